#![deny(missing_docs)]

//! # Schema Module
//!
//! - **models**: Link / Field / Section / Document definitions.
//! - **shims**: Raw serde structures for document files.
//! - **loader**: YAML/JSON to model conversion with per-link rejection.
//! - **validation**: Structural checks shared by the loader and renderer.

pub mod loader;
pub mod models;
pub(crate) mod shims;
pub mod validation;

pub use loader::{load_document, parse_document, parse_link, DocumentFormat};
pub use models::{
    Body, Document, Entry, ExpandedBody, Field, Item, Link, RejectedLink, Section, TypeDescriptor,
    DEFAULT_ENCODING,
};
pub use validation::{url_placeholders, validate_link};
