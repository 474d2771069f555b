#![deny(missing_docs)]

//! # Link Renderer
//!
//! Renders one documented route into its HTML fragment: heading with a
//! self-anchor, method/URL banner, description, parameter tables and the
//! language panel.

use crate::error::DocResult;
use crate::render::panel::{build_panel, PanelEntry};
use crate::render::tables::{link_tables, ParameterTable, REQUIRED_MARKER};
use crate::samples::SampleRegistry;
use crate::schema::validation::validate_link;
use crate::schema::{Link, Section};
use askama::Template;

#[derive(Template, Debug)]
#[template(path = "docs/link.html")]
struct LinkTemplate<'a> {
    anchor: &'a str,
    title: &'a str,
    method: &'a str,
    url: &'a str,
    description: Option<&'a str>,
    tables: &'a [ParameterTable],
    required_marker: &'static str,
    samples: &'a [PanelEntry],
}

/// Anchor id of a link: `<section>-<link>` inside a section, else `<link>`.
pub fn anchor_id(section: Option<&Section>, link_name: &str) -> String {
    match section {
        Some(section) => format!("{}-{}", section.name, link_name),
        None => link_name.to_string(),
    }
}

/// Renders the documentation fragment of a single link.
///
/// The link is validated first, so a malformed link produces an error and
/// no markup at all.
///
/// # Arguments
///
/// * `section` - The enclosing section, namespacing the anchor.
/// * `link` - The route to document.
/// * `languages` - Sample languages in panel order; the first is selected.
/// * `samples` - Sample providers.
pub fn render_link<S: AsRef<str>>(
    section: Option<&Section>,
    link: &Link,
    languages: &[S],
    samples: &SampleRegistry,
) -> DocResult<String> {
    render_link_at(&anchor_id(section, &link.name), link, languages, samples)
}

/// Renders a link under an anchor chosen by the caller.
pub(crate) fn render_link_at<S: AsRef<str>>(
    anchor: &str,
    link: &Link,
    languages: &[S],
    samples: &SampleRegistry,
) -> DocResult<String> {
    validate_link(link)?;

    let tables = link_tables(link);
    let entries = build_panel(link, languages, 0, samples)?;

    let template = LinkTemplate {
        anchor,
        title: link.display_title(),
        method: &link.method,
        url: &link.url,
        description: link.description(),
        tables: &tables,
        required_marker: REQUIRED_MARKER,
        samples: &entries,
    };

    let html = template.render()?;
    tracing::debug!(
        anchor = %anchor,
        tables = tables.len(),
        samples = entries.len(),
        "rendered link"
    );
    Ok(html)
}
