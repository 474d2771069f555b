#![deny(missing_docs)]

//! # Sample Registry
//!
//! Maps language identifiers to providers. Resolution order for a language:
//! registered provider, then a fragment embedded on the link itself, then
//! `DocError::UnknownLanguage`.

use crate::error::{DocError, DocResult};
use crate::samples::SampleProvider;
use crate::schema::Link;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Registered sample providers keyed by language identifier.
#[derive(Clone, Default)]
pub struct SampleRegistry {
    providers: IndexMap<String, Arc<dyn SampleProvider>>,
}

impl SampleRegistry {
    /// Creates an empty registry. Only embedded samples resolve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the provider for `language`.
    pub fn register(
        &mut self,
        language: impl Into<String>,
        provider: impl SampleProvider + 'static,
    ) -> &mut Self {
        self.providers.insert(language.into(), Arc::new(provider));
        self
    }

    /// Registered language identifiers, in registration order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    /// Renders the sample of `language` for `link`.
    pub fn resolve(&self, language: &str, link: &Link) -> DocResult<String> {
        if let Some(provider) = self.providers.get(language) {
            return provider.render_sample(link);
        }
        link.samples
            .get(language)
            .cloned()
            .ok_or_else(|| DocError::UnknownLanguage(language.to_string()))
    }
}

impl fmt::Debug for SampleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampleRegistry")
            .field("languages", &self.languages().collect::<Vec<_>>())
            .finish()
    }
}
