#![deny(missing_docs)]

//! # Code Samples
//!
//! This module defines the seam through which per-language request examples
//! reach the language panel.
//!
//! - **traits**: Defines `SampleProvider` for plugging in a language.
//! - **registry**: `SampleRegistry`, resolving a language for a given link.

pub mod registry;
pub mod traits;

pub use registry::SampleRegistry;
pub use traits::SampleProvider;
