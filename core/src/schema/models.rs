#![deny(missing_docs)]

//! # Schema Models
//!
//! Read-only descriptions of documented routes. These structs are produced by
//! the document loader (or built directly by callers) and consumed by the
//! renderer.

use crate::error::DocError;
use indexmap::{IndexMap, IndexSet};
use std::sync::Arc;

/// The encoding assumed for request bodies when the input does not name one.
pub const DEFAULT_ENCODING: &str = "application/json";

/// A schema node exposing a renderable type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Type class name (e.g. "StringType", "Integer").
    pub class_name: String,
    /// Description attached to the type itself.
    pub description: Option<String>,
    /// Named properties when the descriptor is an object type.
    pub properties: Option<IndexMap<String, TypeDescriptor>>,
    /// Names of required properties (only meaningful with `properties`).
    pub required: Vec<String>,
}

impl TypeDescriptor {
    /// Creates a scalar descriptor with no description.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            description: None,
            properties: None,
            required: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The description, with an empty string treated as absent.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// The value shown in the "Type" column.
    pub fn type_name(&self) -> String {
        self.class_name.to_lowercase()
    }

    /// Builds the expanded body view of an object descriptor.
    pub fn as_expanded_body(&self) -> Option<ExpandedBody> {
        self.properties.as_ref().map(|properties| ExpandedBody {
            properties: properties.clone(),
            required: self.required.iter().cloned().collect(),
        })
    }
}

/// A single named parameter (path, query, or body).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Parameter name.
    pub name: String,
    /// Whether the parameter must be supplied.
    pub required: bool,
    /// Field-level description, overrides the schema description.
    pub description: Option<String>,
    /// Type of the parameter.
    pub schema: TypeDescriptor,
}

impl Field {
    /// Creates an optional field.
    pub fn new(name: impl Into<String>, schema: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            required: false,
            description: None,
            schema,
        }
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the field-level description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Field description first, then the schema's, else nothing.
    /// Empty strings count as absent.
    pub fn resolved_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .or_else(|| self.schema.description())
    }
}

/// A body described as an object with named, typed properties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpandedBody {
    /// Properties in declaration order.
    pub properties: IndexMap<String, TypeDescriptor>,
    /// Names marked required.
    pub required: IndexSet<String>,
}

impl ExpandedBody {
    /// Required names that do not refer to a declared property.
    pub fn dangling_required(&self) -> impl Iterator<Item = &str> {
        self.required
            .iter()
            .filter(|name| !self.properties.contains_key(name.as_str()))
            .map(String::as_str)
    }
}

/// The request body of a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// A single opaque item.
    Single(Field),
    /// An object whose properties are documented individually.
    Expanded {
        /// The body field the object schema belongs to.
        field: Field,
        /// The expanded property listing.
        schema: ExpandedBody,
    },
}

impl Body {
    /// The underlying body field.
    pub fn field(&self) -> &Field {
        match self {
            Body::Single(field) | Body::Expanded { field, .. } => field,
        }
    }

    /// The expanded schema, if any.
    pub fn expanded(&self) -> Option<&ExpandedBody> {
        match self {
            Body::Single(_) => None,
            Body::Expanded { schema, .. } => Some(schema),
        }
    }
}

/// A documented API route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Operation name, used for anchors.
    pub name: String,
    /// Display title, falls back to `name`.
    pub title: Option<String>,
    /// HTTP method: "GET", "POST", etc.
    pub method: String,
    /// URL path template (e.g. "/users/{id}").
    pub url: String,
    /// Free text description.
    pub description: Option<String>,
    /// Path parameters in declaration order.
    pub path_fields: Vec<Field>,
    /// Query parameters in declaration order.
    pub query_fields: Vec<Field>,
    /// Request body, if any.
    pub body: Option<Body>,
    /// Body encoding (media type).
    pub encoding: String,
    /// Pre-rendered code samples keyed by language.
    pub samples: IndexMap<String, String>,
}

impl Link {
    /// Creates a link with no fields, no body and the default encoding.
    pub fn new(
        name: impl Into<String>,
        method: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: None,
            method: method.into(),
            url: url.into(),
            description: None,
            path_fields: Vec::new(),
            query_fields: Vec::new(),
            body: None,
            encoding: DEFAULT_ENCODING.to_string(),
            samples: IndexMap::new(),
        }
    }

    /// Heading text.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Description, treating an empty string as absent.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// A named group of links.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Anchor namespace prefix.
    pub name: String,
    /// Display title, falls back to `name`.
    pub title: Option<String>,
    /// Free text description.
    pub description: Option<String>,
    /// Nested items in declaration order.
    pub content: Vec<Item>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            description: None,
            content: Vec::new(),
        }
    }

    /// Heading text.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

/// A link that could not be converted from its source description.
#[derive(Debug, Clone)]
pub struct RejectedLink {
    /// Declared name, or a positional label when the name itself is missing.
    pub name: String,
    /// Why the link was rejected.
    pub error: Arc<DocError>,
}

impl PartialEq for RejectedLink {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.error.to_string() == other.error.to_string()
    }
}

/// An entry of a document or section.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// A documented route.
    Link(Link),
    /// A nested group.
    Section(Section),
    /// A route whose description was invalid.
    Rejected(RejectedLink),
}

/// A complete API description.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// API title.
    pub title: String,
    /// Free text description.
    pub description: Option<String>,
    /// Base URL of the API.
    pub url: String,
    /// Top-level items in declaration order.
    pub content: Vec<Item>,
}

impl Document {
    /// Creates an empty document.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            url: "/".to_string(),
            content: Vec::new(),
        }
    }

    /// Depth-first walk over every entry, paired with its innermost section.
    pub fn walk(&self) -> Vec<Entry<'_>> {
        let mut out = Vec::new();
        walk_items(&self.content, None, &mut out);
        out
    }
}

/// A link-position entry produced by [`Document::walk`].
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    /// A valid link.
    Link {
        /// Innermost enclosing section.
        section: Option<&'a Section>,
        /// The link.
        link: &'a Link,
    },
    /// A link rejected at load time.
    Rejected {
        /// Innermost enclosing section.
        section: Option<&'a Section>,
        /// The rejection.
        rejected: &'a RejectedLink,
    },
}

fn walk_items<'a>(items: &'a [Item], section: Option<&'a Section>, out: &mut Vec<Entry<'a>>) {
    for item in items {
        match item {
            Item::Link(link) => out.push(Entry::Link { section, link }),
            Item::Rejected(rejected) => out.push(Entry::Rejected { section, rejected }),
            Item::Section(inner) => walk_items(&inner.content, Some(inner), out),
        }
    }
}
