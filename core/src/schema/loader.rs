#![deny(missing_docs)]

//! Document loading.
//!
//! Reads YAML or JSON descriptions into a [`Document`]. Structural problems
//! with the document itself fail the load; problems with a single link turn
//! that link into an [`Item::Rejected`] and loading carries on.

use crate::error::{DocError, DocResult};
use crate::schema::models::{
    Body, Document, ExpandedBody, Field, Item, Link, RejectedLink, Section, TypeDescriptor,
    DEFAULT_ENCODING,
};
use crate::schema::shims::{
    ShimDocument, ShimExpandedBody, ShimField, ShimLink, ShimSection, ShimType,
};
use crate::schema::validation::{unplaced_path_fields, validate_link, validate_type};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Input syntax of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML (also accepts JSON, being a superset).
    Yaml,
    /// Strict JSON.
    Json,
}

impl DocumentFormat {
    /// `.json` files are JSON, everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Reads and parses a document file.
pub fn load_document(path: &Path) -> DocResult<Document> {
    let text = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading document");
    parse_document(&text, DocumentFormat::from_path(path))
}

/// Parses a document from text.
pub fn parse_document(text: &str, format: DocumentFormat) -> DocResult<Document> {
    let raw: Value = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| DocError::Parse(format!("Failed to parse document YAML: {}", e)))?,
        DocumentFormat::Json => serde_json::from_str(text)
            .map_err(|e| DocError::Parse(format!("Failed to parse document JSON: {}", e)))?,
    };

    let shim: ShimDocument = serde_json::from_value(raw)
        .map_err(|e| DocError::Parse(format!("Invalid document structure: {}", e)))?;

    let title = shim
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| DocError::Parse("Document has no title".into()))?;

    Ok(Document {
        title,
        description: shim.description,
        url: shim.url.unwrap_or_else(|| "/".to_string()),
        content: convert_items(shim.content, "document")?,
    })
}

/// Converts a single raw link description.
///
/// This is the per-link boundary: any error returned here rejects only the
/// link being converted.
pub fn parse_link(value: &Value) -> DocResult<Link> {
    let label = declared_name(value).unwrap_or("<unnamed>").to_string();
    let shim: ShimLink = serde_json::from_value(value.clone())
        .map_err(|e| DocError::MalformedSchema(format!("link `{}`: {}", label, e)))?;
    convert_link(shim)
}

fn convert_items(values: Vec<Value>, parent: &str) -> DocResult<Vec<Item>> {
    let mut items = Vec::with_capacity(values.len());
    let mut seen = HashSet::new();

    for (index, value) in values.into_iter().enumerate() {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                DocError::Parse(format!("Item #{} of {} has no `type`", index, parent))
            })?;

        match kind.as_str() {
            "link" => {
                let item = match parse_link(&value) {
                    Ok(link) => {
                        for name in unplaced_path_fields(&link) {
                            tracing::warn!(
                                link = %link.name,
                                field = name,
                                "path field has no placeholder in url"
                            );
                        }
                        Item::Link(link)
                    }
                    Err(error) => {
                        let name = declared_name(&value)
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("#{}", index));
                        tracing::warn!(link = %name, %error, "rejecting link");
                        Item::Rejected(RejectedLink {
                            name,
                            error: Arc::new(error),
                        })
                    }
                };
                if let Some(name) = declared_name(&value) {
                    if !seen.insert(name.to_string()) {
                        tracing::warn!(
                            link = name,
                            parent,
                            "duplicate link name, anchors will collide"
                        );
                    }
                }
                items.push(item);
            }
            "section" => {
                let shim: ShimSection = serde_json::from_value(value).map_err(|e| {
                    DocError::Parse(format!("Invalid section #{} of {}: {}", index, parent, e))
                })?;
                let name = shim.name.filter(|n| !n.trim().is_empty()).ok_or_else(|| {
                    DocError::Parse(format!("Section #{} of {} has no name", index, parent))
                })?;
                let content = convert_items(shim.content, &format!("section `{}`", name))?;
                items.push(Item::Section(Section {
                    name,
                    title: shim.title,
                    description: shim.description,
                    content,
                }));
            }
            other => {
                return Err(DocError::Parse(format!(
                    "Item #{} of {} has unknown type `{}`",
                    index, parent, other
                )))
            }
        }
    }

    Ok(items)
}

fn declared_name(value: &Value) -> Option<&str> {
    value
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.trim().is_empty())
}

fn convert_link(shim: ShimLink) -> DocResult<Link> {
    let name = shim
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| DocError::missing("link", "name"))?;
    let entity = format!("link `{}`", name);
    let method = shim
        .method
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| DocError::missing(entity.clone(), "method"))?;
    let url = shim
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| DocError::missing(entity.clone(), "url"))?;

    let path_fields = shim
        .path_fields
        .into_iter()
        .map(convert_field)
        .collect::<DocResult<Vec<_>>>()?;
    let query_fields = shim
        .query_fields
        .into_iter()
        .map(convert_field)
        .collect::<DocResult<Vec<_>>>()?;

    let body = match (shim.body_field, shim.expanded_body) {
        (None, None) => None,
        (None, Some(_)) => {
            return Err(DocError::MalformedSchema(format!(
                "{} declares an expanded body without a body field",
                entity
            )))
        }
        (Some(field), Some(expanded)) => Some(Body::Expanded {
            field: convert_field(field)?,
            schema: convert_expanded(expanded, &entity)?,
        }),
        (Some(field), None) => {
            let field = convert_field(field)?;
            Some(match field.schema.as_expanded_body() {
                Some(schema) => Body::Expanded { field, schema },
                None => Body::Single(field),
            })
        }
    };

    let link = Link {
        name,
        title: shim.title,
        method: method.to_uppercase(),
        url,
        description: shim.description,
        path_fields,
        query_fields,
        body,
        encoding: shim
            .encoding
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENCODING.to_string()),
        samples: shim.samples,
    };

    validate_link(&link)?;
    Ok(link)
}

fn convert_field(shim: ShimField) -> DocResult<Field> {
    let name = shim
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| DocError::missing("field", "name"))?;
    let entity = format!("field `{}`", name);
    let schema = shim
        .schema
        .ok_or_else(|| DocError::missing(entity.clone(), "schema"))?;

    Ok(Field {
        required: shim.required,
        description: shim.description,
        schema: convert_type(schema, &entity)?,
        name,
    })
}

fn convert_type(shim: ShimType, context: &str) -> DocResult<TypeDescriptor> {
    let class_name = shim.class_name.unwrap_or_default();
    let properties = shim
        .properties
        .map(|value| convert_properties(value, context))
        .transpose()?;

    if let Some(props) = &properties {
        if let Some(ghost) = shim.required.iter().find(|r| !props.contains_key(r.as_str())) {
            return Err(DocError::MalformedSchema(format!(
                "{} requires `{}` which is not a declared property",
                context, ghost
            )));
        }
    }

    let ty = TypeDescriptor {
        class_name,
        description: shim.description,
        properties,
        required: shim.required,
    };
    validate_type(&ty, context)?;
    Ok(ty)
}

fn convert_properties(value: Value, context: &str) -> DocResult<IndexMap<String, TypeDescriptor>> {
    let Value::Object(map) = value else {
        return Err(DocError::MalformedSchema(format!(
            "properties of {} must be a mapping",
            context
        )));
    };

    let mut properties = IndexMap::with_capacity(map.len());
    for (name, raw) in map {
        let nested = format!("property `{}` of {}", name, context);
        let shim: ShimType = serde_json::from_value(raw)
            .map_err(|e| DocError::MalformedSchema(format!("{}: {}", nested, e)))?;
        let ty = convert_type(shim, &nested)?;
        properties.insert(name, ty);
    }
    Ok(properties)
}

fn convert_expanded(shim: ShimExpandedBody, context: &str) -> DocResult<ExpandedBody> {
    let value = shim.properties.ok_or_else(|| {
        DocError::MalformedSchema(format!("expanded body of {} has no properties", context))
    })?;
    let properties = convert_properties(value, &format!("expanded body of {}", context))?;
    Ok(ExpandedBody {
        properties,
        required: shim.required.into_iter().collect(),
    })
}
