#![deny(missing_docs)]

//! # Render Options
//!
//! Shared flags that build a `DocsConfig`.
//! Precedence: defaults < `--config` file < environment < flags.

use crate::error::CliResult;
use stark_docs_core::DocsConfig;
use std::path::PathBuf;

/// Flags overriding the rendering configuration.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RenderOptions {
    /// YAML config file (languages, parallel, strict, page_title, static_url).
    #[clap(long, env = "STARK_DOCS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Sample language, repeatable. The first one starts selected.
    #[clap(long = "lang", env = "STARK_DOCS_LANGUAGES", value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Render links in parallel.
    #[clap(long, env = "STARK_DOCS_PARALLEL")]
    pub parallel: bool,

    /// Fail when any link cannot be documented.
    #[clap(long, env = "STARK_DOCS_STRICT")]
    pub strict: bool,

    /// Page `<title>` override.
    #[clap(long, env = "STARK_DOCS_PAGE_TITLE")]
    pub page_title: Option<String>,

    /// Prefix of the theme stylesheet URL.
    #[clap(long, env = "STARK_DOCS_STATIC_URL")]
    pub static_url: Option<String>,
}

impl RenderOptions {
    /// Resolves the effective configuration.
    pub fn resolve(&self) -> CliResult<DocsConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!(path = %path.display(), "reading config");
                DocsConfig::load(path)?
            }
            None => DocsConfig::default(),
        };

        if !self.languages.is_empty() {
            config.languages = self.languages.clone();
        }
        config.parallel |= self.parallel;
        config.strict |= self.strict;
        if let Some(title) = &self.page_title {
            config.page_title = Some(title.clone());
        }
        if let Some(url) = &self.static_url {
            config.static_url = url.clone();
        }

        Ok(config)
    }
}
