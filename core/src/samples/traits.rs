#![deny(missing_docs)]

//! # Sample Provider Trait
//!
//! Defines the interface a language plugs into to render a request example
//! for a documented link.

use crate::error::DocResult;
use crate::schema::Link;

/// Renders the code-sample fragment of one language for a link.
///
/// The returned string is trusted HTML and is inserted into the panel
/// verbatim. Errors are fatal for the link being rendered.
pub trait SampleProvider: Send + Sync {
    /// Renders the sample.
    fn render_sample(&self, link: &Link) -> DocResult<String>;
}

impl<F> SampleProvider for F
where
    F: Fn(&Link) -> DocResult<String> + Send + Sync,
{
    fn render_sample(&self, link: &Link) -> DocResult<String> {
        self(link)
    }
}
