#![deny(missing_docs)]

//! # Rendering
//!
//! - **tables**: Path / query / body tables as tagged variants.
//! - **panel**: The per-language code-sample panel.
//! - **link**: The per-link HTML fragment.
//! - **document**: Full pages with per-link failure containment.

pub mod document;
pub mod link;
pub mod panel;
pub mod tables;

pub use document::{render_document, LinkFailure, RenderedDocument};
pub use link::{anchor_id, render_link};
pub use panel::{build_panel, PanelEntry};
pub use tables::{link_tables, ParameterRow, ParameterTable, TableKind, REQUIRED_MARKER};
