//! # Error Handling
//!
//! Provides the unified `DocError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Link-level variants (`MissingRequiredAttribute`, `MalformedSchema`) are
/// contained per link by the document renderer. `UnknownLanguage` is
/// recovered by the language panel.
#[derive(Debug, Display, From)]
pub enum DocError {
    /// A Link or Field lacks a mandatory attribute.
    #[from(ignore)]
    #[display("{entity} is missing required attribute `{attribute}`")]
    MissingRequiredAttribute {
        /// The entity being converted (e.g. "link `welcome`").
        entity: String,
        /// The attribute that was absent or empty.
        attribute: &'static str,
    },

    /// A type descriptor or expanded body schema is inconsistent.
    #[from(ignore)]
    #[display("Malformed schema: {_0}")]
    MalformedSchema(String),

    /// No sample provider or embedded sample exists for a language.
    #[from(ignore)]
    #[display("Unknown language: {_0}")]
    UnknownLanguage(String),

    /// Askama template rendering failure.
    #[from(ignore)]
    #[display("Template Error: {_0}")]
    Template(String),

    /// Document or config text could not be parsed.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Strict mode rejected a document with failed links.
    #[from(ignore)]
    #[display("{_0} link(s) failed to render")]
    Incomplete(usize),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for DocError {}

impl From<askama::Error> for DocError {
    fn from(e: askama::Error) -> Self {
        DocError::Template(e.to_string())
    }
}

impl DocError {
    /// Shorthand for `MissingRequiredAttribute`.
    pub fn missing(entity: impl Into<String>, attribute: &'static str) -> Self {
        DocError::MissingRequiredAttribute {
            entity: entity.into(),
            attribute,
        }
    }
}

/// Helper type alias for Result using DocError.
pub type DocResult<T> = Result<T, DocError>;
