#![deny(missing_docs)]

//! Shim structs mirroring the raw document layout.
//!
//! Every attribute is optional here so that a missing key surfaces as a
//! `MissingRequiredAttribute` for one link instead of a serde failure for the
//! whole document.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Root of a document file.
#[derive(Debug, Deserialize)]
pub(crate) struct ShimDocument {
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Items are kept raw so each link is converted in isolation.
    #[serde(default)]
    pub content: Vec<Value>,
}

/// A `type: section` item.
#[derive(Debug, Deserialize)]
pub(crate) struct ShimSection {
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Vec<Value>,
}

/// A `type: link` item.
#[derive(Debug, Deserialize)]
pub(crate) struct ShimLink {
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub method: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub path_fields: Vec<ShimField>,
    #[serde(default)]
    pub query_fields: Vec<ShimField>,
    #[serde(default)]
    pub body_field: Option<ShimField>,
    #[serde(default)]
    pub expanded_body: Option<ShimExpandedBody>,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub samples: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShimField {
    pub name: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schema: Option<ShimType>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShimType {
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Kept raw so a non-mapping value is reported as a malformed schema.
    #[serde(default)]
    pub properties: Option<Value>,
    #[serde(default)]
    pub required: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShimExpandedBody {
    #[serde(default)]
    pub properties: Option<Value>,
    #[serde(default)]
    pub required: Vec<String>,
}
