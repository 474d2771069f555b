#![deny(missing_docs)]

//! # Link Validation
//!
//! Structural checks applied to a `Link` before any markup is produced.
//!
//! - `name`, `method` and `url` must be non-empty.
//! - Every field name must be non-empty.
//! - Every type descriptor must carry a class name.
//! - An expanded body must not mark undeclared properties as required.
//!
//! Path placeholder drift is only reported through `tracing`.

use crate::error::{DocError, DocResult};
use crate::schema::models::{Body, Field, Link, TypeDescriptor};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Validates a link, returning the first violation found.
pub fn validate_link(link: &Link) -> DocResult<()> {
    if link.name.trim().is_empty() {
        return Err(DocError::missing("link", "name"));
    }
    let entity = || format!("link `{}`", link.name);
    if link.method.trim().is_empty() {
        return Err(DocError::missing(entity(), "method"));
    }
    if link.url.trim().is_empty() {
        return Err(DocError::missing(entity(), "url"));
    }

    for field in link.path_fields.iter().chain(&link.query_fields) {
        validate_field(field)?;
    }

    match &link.body {
        None => {}
        Some(Body::Single(field)) => validate_field(field)?,
        Some(Body::Expanded { field, schema }) => {
            validate_field(field)?;
            if let Some(ghost) = schema.dangling_required().next() {
                return Err(DocError::MalformedSchema(format!(
                    "body of `{}` requires `{}` which is not a declared property",
                    link.name, ghost
                )));
            }
            for (name, property) in &schema.properties {
                validate_type(property, &format!("body property `{}`", name))?;
            }
        }
    }

    Ok(())
}

fn validate_field(field: &Field) -> DocResult<()> {
    if field.name.trim().is_empty() {
        return Err(DocError::missing("field", "name"));
    }
    validate_type(&field.schema, &format!("field `{}`", field.name))
}

/// Ensures a descriptor (and any nested properties) yields a class name.
pub(crate) fn validate_type(ty: &TypeDescriptor, context: &str) -> DocResult<()> {
    if ty.class_name.trim().is_empty() {
        return Err(DocError::MalformedSchema(format!(
            "type of {} has no class name",
            context
        )));
    }
    if let Some(properties) = &ty.properties {
        for (name, property) in properties {
            validate_type(property, &format!("property `{}` of {}", name, context))?;
        }
    }
    Ok(())
}

/// Returns the `{name}` placeholders of a URL template, in order.
pub fn url_placeholders(url: &str) -> Vec<&str> {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER_RE
        .get_or_init(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_\-]*)\}").expect("Invalid regex"));

    re.captures_iter(url)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Path fields that have no matching `{placeholder}` in the link URL.
pub fn unplaced_path_fields(link: &Link) -> Vec<&str> {
    let placeholders: HashSet<&str> = url_placeholders(&link.url).into_iter().collect();
    link.path_fields
        .iter()
        .map(|f| f.name.as_str())
        .filter(|name| !placeholders.contains(name))
        .collect()
}
