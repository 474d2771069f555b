#![deny(missing_docs)]

//! # Stark Docs Core
//!
//! Renders route-description schemas ("links" with path, query and body
//! fields) into HTML API reference pages with per-language code samples.
//!
//! ```no_run
//! use stark_docs_core::{render_link, Field, Link, SampleRegistry, TypeDescriptor};
//!
//! let mut link = Link::new("welcome", "GET", "/");
//! link.description = Some("Say hello".into());
//! link.query_fields.push(Field::new(
//!     "name",
//!     TypeDescriptor::new("StringType").with_description("Name to greet"),
//! ));
//!
//! let _html = render_link(None, &link, &["python"], &SampleRegistry::new())?;
//! # Ok::<(), stark_docs_core::DocError>(())
//! ```

/// Shared error types.
pub mod error;

/// Rendering options.
pub mod config;

/// Schema model, loader and validation.
pub mod schema;

/// Code sample providers.
pub mod samples;

/// HTML rendering.
pub mod render;

pub use config::DocsConfig;
pub use error::{DocError, DocResult};
pub use render::{
    anchor_id, build_panel, render_document, render_link, LinkFailure, PanelEntry,
    RenderedDocument, TableKind,
};
pub use samples::{SampleProvider, SampleRegistry};
pub use schema::{
    load_document, parse_document, parse_link, Body, Document, DocumentFormat, ExpandedBody,
    Field, Item, Link, RejectedLink, Section, TypeDescriptor,
};
