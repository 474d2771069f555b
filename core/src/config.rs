//! # Configuration
//!
//! Rendering options shared by the library and the CLI. Every key is
//! optional in the YAML form; missing keys take the defaults below.

use crate::error::{DocError, DocResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Prefix used for theme assets when none is configured.
pub const DEFAULT_STATIC_URL: &str = "/static/";

/// Options controlling a document render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Sample languages, in panel order. The first one starts selected.
    pub languages: Vec<String>,
    /// Render links on the rayon pool.
    pub parallel: bool,
    /// Fail the render when any link fails.
    pub strict: bool,
    /// Overrides the document title in `<title>`.
    pub page_title: Option<String>,
    /// Prefix of the theme stylesheet URL.
    pub static_url: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            parallel: false,
            strict: false,
            page_title: None,
            static_url: DEFAULT_STATIC_URL.to_string(),
        }
    }
}

impl DocsConfig {
    /// Parses a YAML config.
    pub fn from_yaml_str(text: &str) -> DocResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
            .map_err(|e| DocError::Parse(format!("Failed to parse config YAML: {}", e)))
    }

    /// Reads a YAML config file.
    pub fn load(path: &Path) -> DocResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// URL of the theme stylesheet.
    pub fn stylesheet_url(&self) -> String {
        if self.static_url.ends_with('/') {
            format!("{}css/coredocs.css", self.static_url)
        } else {
            format!("{}/css/coredocs.css", self.static_url)
        }
    }
}
