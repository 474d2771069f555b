#![deny(missing_docs)]

//! # Language Panel
//!
//! Positions the per-language code samples of a link. The fragments come
//! from a [`SampleRegistry`]; languages it cannot resolve are skipped.

use crate::error::{DocError, DocResult};
use crate::samples::SampleRegistry;
use crate::schema::Link;

/// One language tab of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    /// Language identifier.
    pub language: String,
    /// Whether the entry is initially selected.
    pub active: bool,
    /// Trusted sample markup.
    pub html: String,
}

/// Builds the panel entries for `link`, in `languages` order.
///
/// `selected` indexes the entries that were actually rendered. An
/// out-of-range index selects the first entry.
pub fn build_panel<S: AsRef<str>>(
    link: &Link,
    languages: &[S],
    selected: usize,
    samples: &SampleRegistry,
) -> DocResult<Vec<PanelEntry>> {
    let mut entries = Vec::with_capacity(languages.len());

    for language in languages {
        let language = language.as_ref();
        match samples.resolve(language, link) {
            Ok(html) => entries.push(PanelEntry {
                language: language.to_string(),
                active: false,
                html,
            }),
            Err(DocError::UnknownLanguage(_)) => {
                tracing::warn!(link = %link.name, language, "no code sample, skipping language");
            }
            Err(e) => return Err(e),
        }
    }

    let active = if selected < entries.len() { selected } else { 0 };
    if let Some(entry) = entries.get_mut(active) {
        entry.active = true;
    }

    Ok(entries)
}
