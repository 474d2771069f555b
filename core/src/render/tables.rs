#![deny(missing_docs)]

//! # Parameter Tables
//!
//! Every table of a link (path, query, body) is described by a `TableKind`
//! and reduced to rows by the same row-mapping function.

use crate::schema::models::{Body, Field, Link, TypeDescriptor};

/// The markup appended to the name cell of a required parameter.
pub const REQUIRED_MARKER: &str =
    r#"<span class="required" title="required" aria-label="required">&#8727;</span>"#;

/// The tables a link can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Parameters interpolated into the URL path.
    Path,
    /// URL query string parameters.
    Query,
    /// A body consisting of a single item.
    BodySingle,
    /// An object body, one row per property.
    BodyExpanded,
}

impl TableKind {
    /// Kinds present on a link, in rendering order.
    pub fn for_link(link: &Link) -> Vec<TableKind> {
        let mut kinds = Vec::with_capacity(3);
        if !link.path_fields.is_empty() {
            kinds.push(TableKind::Path);
        }
        if !link.query_fields.is_empty() {
            kinds.push(TableKind::Query);
        }
        match &link.body {
            None => {}
            Some(Body::Single(_)) => kinds.push(TableKind::BodySingle),
            Some(Body::Expanded { .. }) => kinds.push(TableKind::BodyExpanded),
        }
        kinds
    }

    /// Section heading.
    pub fn heading(self) -> &'static str {
        match self {
            TableKind::Path => "Path Parameters",
            TableKind::Query => "Query Parameters",
            TableKind::BodySingle | TableKind::BodyExpanded => "Request Body",
        }
    }

    /// Sentence introducing the table.
    pub fn lead(self, encoding: &str) -> String {
        match self {
            TableKind::Path => {
                "The following parameters should be included in the URL path.".to_string()
            }
            TableKind::Query => {
                "The following parameters should be included as part of a URL query string."
                    .to_string()
            }
            TableKind::BodySingle => format!(
                "The request body should be a \"{}\" encoded single item.",
                encoding
            ),
            TableKind::BodyExpanded => format!(
                "The request body should be a \"{}\" encoded object, containing the following items.",
                encoding
            ),
        }
    }

    /// Rows of this table for `link`. Kinds absent from the link yield no rows.
    pub fn rows(self, link: &Link) -> Vec<ParameterRow> {
        match (self, &link.body) {
            (TableKind::Path, _) => link.path_fields.iter().map(ParameterRow::from_field).collect(),
            (TableKind::Query, _) => link.query_fields.iter().map(ParameterRow::from_field).collect(),
            (TableKind::BodySingle, Some(Body::Single(field))) => {
                vec![ParameterRow::from_field(field)]
            }
            (TableKind::BodyExpanded, Some(Body::Expanded { schema, .. })) => schema
                .properties
                .iter()
                .map(|(name, ty)| {
                    row(name, schema.required.contains(name), ty, ty.description())
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// One rendered parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRow {
    /// Parameter name.
    pub name: String,
    /// Whether the required marker is shown.
    pub required: bool,
    /// Lower-cased type class name.
    pub type_name: String,
    /// Resolved description, empty when none is available.
    pub description: String,
}

impl ParameterRow {
    /// Row for a field: field description overrides the schema's.
    pub fn from_field(field: &Field) -> Self {
        row(
            &field.name,
            field.required,
            &field.schema,
            field.resolved_description(),
        )
    }
}

fn row(name: &str, required: bool, ty: &TypeDescriptor, description: Option<&str>) -> ParameterRow {
    ParameterRow {
        name: name.to_string(),
        required,
        type_name: ty.type_name(),
        description: description.unwrap_or_default().to_string(),
    }
}

/// A table ready for the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterTable {
    /// Which table this is.
    pub kind: TableKind,
    /// Section heading.
    pub heading: &'static str,
    /// Introductory sentence.
    pub lead: String,
    /// Rows in input order.
    pub rows: Vec<ParameterRow>,
}

/// Builds every table a link renders, in order.
pub fn link_tables(link: &Link) -> Vec<ParameterTable> {
    TableKind::for_link(link)
        .into_iter()
        .map(|kind| ParameterTable {
            kind,
            heading: kind.heading(),
            lead: kind.lead(&link.encoding),
            rows: kind.rows(link),
        })
        .collect()
}
