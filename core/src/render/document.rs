#![deny(missing_docs)]

//! # Document Renderer
//!
//! Renders a whole [`Document`] into a standalone HTML page.
//!
//! A link that fails (rejected at load, or failing validation/rendering) does
//! not abort the page: it is replaced by an inline placeholder and reported
//! in [`RenderedDocument::failures`]. Link fragments are independent, so with
//! `DocsConfig::parallel` they are rendered on the rayon pool and
//! re-assembled in document order.

use crate::config::DocsConfig;
use crate::error::{DocError, DocResult};
use crate::render::link::{anchor_id, render_link_at};
use crate::samples::SampleRegistry;
use crate::schema::{Document, Entry, Item, Section};
use askama::Template;
use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Template, Debug)]
#[template(path = "docs/document.html")]
struct DocumentTemplate<'a> {
    page_title: &'a str,
    stylesheet: &'a str,
    title: &'a str,
    url: &'a str,
    description: Option<&'a str>,
    navigation: &'a [NavEntry],
    blocks: &'a [String],
}

#[derive(Template, Debug)]
#[template(path = "docs/section.html")]
struct SectionTemplate<'a> {
    anchor: &'a str,
    level: usize,
    title: &'a str,
    description: Option<&'a str>,
}

#[derive(Template, Debug)]
#[template(path = "docs/failure.html")]
struct FailureTemplate<'a> {
    anchor: &'a str,
    name: &'a str,
    reason: &'a str,
}

#[derive(Debug)]
struct NavEntry {
    anchor: String,
    label: String,
    depth: usize,
    failed: bool,
}

/// A link that could not be documented.
#[derive(Debug, Clone)]
pub struct LinkFailure {
    /// Anchor of the placeholder in the page.
    pub anchor: String,
    /// Link name (or positional label).
    pub name: String,
    /// Why the link failed.
    pub error: Arc<DocError>,
}

/// Output of [`render_document`].
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// The complete HTML page.
    pub html: String,
    /// Links replaced by placeholders, in document order.
    pub failures: Vec<LinkFailure>,
}

impl RenderedDocument {
    /// Whether every link rendered.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders a full documentation page.
///
/// # Arguments
///
/// * `document` - The API description.
/// * `config` - Languages, parallelism, strictness and page options.
/// * `samples` - Sample providers for the language panels.
///
/// # Returns
///
/// * `DocResult<RenderedDocument>` - The page and its per-link failures.
///   Only page-level template errors, or strict mode with failures, are `Err`.
pub fn render_document(
    document: &Document,
    config: &DocsConfig,
    samples: &SampleRegistry,
) -> DocResult<RenderedDocument> {
    let entries = document.walk();
    let mut anchors = AnchorPlan::default();
    anchors.plan(&document.content, None);

    let render_entry =
        |(entry, anchor): (&Entry<'_>, &String)| -> Result<String, Arc<DocError>> {
            match *entry {
                Entry::Link { link, .. } => {
                    render_link_at(anchor, link, config.languages.as_slice(), samples)
                        .map_err(Arc::new)
                }
                Entry::Rejected { rejected, .. } => Err(Arc::clone(&rejected.error)),
            }
        };

    let outcomes: Vec<Result<String, Arc<DocError>>> = if config.parallel {
        entries
            .par_iter()
            .zip(anchors.links.par_iter())
            .map(render_entry)
            .collect()
    } else {
        entries.iter().zip(anchors.links.iter()).map(render_entry).collect()
    };

    let mut assembly = Assembly {
        outcomes: anchors.links.into_iter().zip(outcomes),
        sections: anchors.sections.into_iter(),
        blocks: Vec::new(),
        navigation: Vec::new(),
        failures: Vec::new(),
    };
    assembly.items(&document.content, 0)?;

    let Assembly {
        blocks,
        navigation,
        failures,
        ..
    } = assembly;

    let stylesheet = config.stylesheet_url();
    let page = DocumentTemplate {
        page_title: config.page_title.as_deref().unwrap_or(&document.title),
        stylesheet: &stylesheet,
        title: &document.title,
        url: &document.url,
        description: document.description.as_deref().filter(|d| !d.is_empty()),
        navigation: &navigation,
        blocks: &blocks,
    };
    let html = page.render()?;

    tracing::info!(
        title = %document.title,
        links = entries.len(),
        failed = failures.len(),
        parallel = config.parallel,
        "rendered document"
    );

    if config.strict && !failures.is_empty() {
        return Err(DocError::Incomplete(failures.len()));
    }

    Ok(RenderedDocument { html, failures })
}

/// Id of a section block.
fn section_anchor(section: &Section) -> String {
    format!("section-{}", section.name)
}

/// Unique ids for every section block and link, in depth-first order.
///
/// A link keeps `anchor_id` unless an earlier element of the page already
/// took it, in which case a `-2`, `-3`, ... suffix is appended.
#[derive(Debug, Default)]
struct AnchorPlan {
    taken: HashSet<String>,
    sections: Vec<String>,
    links: Vec<String>,
}

impl AnchorPlan {
    fn plan(&mut self, items: &[Item], section: Option<&Section>) {
        for item in items {
            match item {
                Item::Section(inner) => {
                    let anchor = self.claim(section_anchor(inner));
                    self.sections.push(anchor);
                    self.plan(&inner.content, Some(inner));
                }
                Item::Link(link) => {
                    let anchor = self.claim(anchor_id(section, &link.name));
                    self.links.push(anchor);
                }
                Item::Rejected(rejected) => {
                    let anchor = self.claim(anchor_id(section, &rejected.name));
                    self.links.push(anchor);
                }
            }
        }
    }

    fn claim(&mut self, anchor: String) -> String {
        if self.taken.insert(anchor.clone()) {
            return anchor;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", anchor, n);
            if self.taken.insert(candidate.clone()) {
                tracing::warn!(%anchor, renamed = %candidate, "duplicate anchor in document");
                return candidate;
            }
            n += 1;
        }
    }
}

/// Walks the item tree a second time, consuming anchors and link outcomes in
/// the same depth-first order `Document::walk` produced them.
struct Assembly<I> {
    outcomes: I,
    sections: std::vec::IntoIter<String>,
    blocks: Vec<String>,
    navigation: Vec<NavEntry>,
    failures: Vec<LinkFailure>,
}

impl<I> Assembly<I>
where
    I: Iterator<Item = (String, Result<String, Arc<DocError>>)>,
{
    fn items(&mut self, items: &[Item], depth: usize) -> DocResult<()> {
        for item in items {
            match item {
                Item::Section(inner) => {
                    let anchor = self.sections.next().ok_or_else(|| {
                        DocError::Template(format!("no anchor for section `{}`", inner.name))
                    })?;
                    let header = SectionTemplate {
                        anchor: &anchor,
                        level: (depth + 2).min(6),
                        title: inner.display_title(),
                        description: inner.description.as_deref().filter(|d| !d.is_empty()),
                    };
                    self.blocks.push(header.render()?);
                    self.navigation.push(NavEntry {
                        anchor,
                        label: inner.display_title().to_string(),
                        depth,
                        failed: false,
                    });
                    self.items(&inner.content, depth + 1)?;
                }
                Item::Link(link) => {
                    self.link(&link.name, link.display_title(), depth)?;
                }
                Item::Rejected(rejected) => {
                    self.link(&rejected.name, &rejected.name, depth)?;
                }
            }
        }
        Ok(())
    }

    fn link(&mut self, name: &str, label: &str, depth: usize) -> DocResult<()> {
        let (anchor, outcome) = self.outcomes.next().ok_or_else(|| {
            DocError::Template(format!("no rendered output for link `{}`", name))
        })?;

        let failed = match outcome {
            Ok(html) => {
                self.blocks.push(html);
                false
            }
            Err(error) => {
                tracing::warn!(link = name, %error, "link documentation unavailable");
                let reason = error.to_string();
                let placeholder = FailureTemplate {
                    anchor: &anchor,
                    name,
                    reason: &reason,
                };
                self.blocks.push(placeholder.render()?);
                self.failures.push(LinkFailure {
                    anchor: anchor.clone(),
                    name: name.to_string(),
                    error,
                });
                true
            }
        };

        self.navigation.push(NavEntry {
            anchor,
            label: label.to_string(),
            depth,
            failed,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, Link, RejectedLink, TypeDescriptor};

    fn document() -> Document {
        let mut users = Section::new("users");
        users.title = Some("Users".into());
        let mut get_user = Link::new("get", "GET", "/users/{id}");
        get_user
            .path_fields
            .push(Field::new("id", TypeDescriptor::new("Integer")).required());
        users.content.push(Item::Link(get_user));
        users.content.push(Item::Rejected(RejectedLink {
            name: "delete".into(),
            error: Arc::new(DocError::missing("link `delete`", "method")),
        }));

        let mut welcome = Link::new("welcome", "GET", "/");
        welcome.description = Some("Say hello".into());

        let mut doc = Document::new("Hello API");
        doc.description = Some("A friendly service".into());
        doc.content.push(Item::Link(welcome));
        doc.content.push(Item::Section(users));
        doc
    }

    #[test]
    fn test_page_contains_every_link_in_order() {
        let rendered =
            render_document(&document(), &DocsConfig::default(), &SampleRegistry::new()).unwrap();
        let html = &rendered.html;

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Hello API</title>"));
        assert!(html.contains("<p>A friendly service</p>"));

        let welcome = html.find(r#"<h3 id="welcome""#).unwrap();
        let users = html.find(r#"<div class="coredocs-section" id="section-users">"#).unwrap();
        let get = html.find(r#"<h3 id="users-get""#).unwrap();
        assert!(welcome < users && users < get);
    }

    #[test]
    fn test_failed_link_becomes_placeholder() {
        let rendered =
            render_document(&document(), &DocsConfig::default(), &SampleRegistry::new()).unwrap();

        assert!(!rendered.is_complete());
        assert_eq!(rendered.failures.len(), 1);
        let failure = &rendered.failures[0];
        assert_eq!(failure.name, "delete");
        assert_eq!(failure.anchor, "users-delete");
        assert!(rendered
            .html
            .contains("documentation unavailable for <code>delete</code>"));
        assert!(rendered.html.contains(r#"class="nav-depth-1 nav-error""#));
    }

    #[test]
    fn test_ids_are_unique_across_sections_and_links() {
        let mut doc = Document::new("Collisions");
        doc.content.push(Item::Link(Link::new("users", "GET", "/users")));
        let mut users = Section::new("users");
        users.content.push(Item::Link(Link::new("list", "GET", "/users")));
        doc.content.push(Item::Section(users));
        for parent in ["accounts", "billing"] {
            let mut admin = Section::new("admin");
            admin.content.push(Item::Link(Link::new("list", "GET", "/admin")));
            let mut outer = Section::new(parent);
            outer.content.push(Item::Section(admin));
            doc.content.push(Item::Section(outer));
        }

        let rendered =
            render_document(&doc, &DocsConfig::default(), &SampleRegistry::new()).unwrap();
        let html = &rendered.html;
        assert_eq!(html.matches(r#"id="users""#).count(), 1);
        assert_eq!(html.matches(r#"id="section-users""#).count(), 1);
        assert_eq!(html.matches(r#"id="users-list""#).count(), 1);
        assert_eq!(html.matches(r#"id="admin-list""#).count(), 1);
        assert_eq!(html.matches(r#"id="admin-list-2""#).count(), 1);
        assert_eq!(html.matches(r#"id="section-admin-2""#).count(), 1);
        assert!(html.contains(r##"<a href="#admin-list-2">"##));
    }

    #[test]
    fn test_render_time_failure_is_contained() {
        let mut doc = document();
        let mut broken = Link::new("broken", "GET", "/broken");
        broken
            .query_fields
            .push(Field::new("q", TypeDescriptor::new("")));
        doc.content.insert(0, Item::Link(broken));

        let rendered =
            render_document(&doc, &DocsConfig::default(), &SampleRegistry::new()).unwrap();
        let names: Vec<&str> = rendered.failures.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["broken", "delete"]);
        assert!(matches!(
            *rendered.failures[0].error,
            DocError::MalformedSchema(_)
        ));
        assert!(rendered.html.contains(r#"<h3 id="welcome""#));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let doc = document();
        let samples = SampleRegistry::new();
        let sequential = render_document(&doc, &DocsConfig::default(), &samples).unwrap();
        let parallel = render_document(
            &doc,
            &DocsConfig {
                parallel: true,
                ..DocsConfig::default()
            },
            &samples,
        )
        .unwrap();
        assert_eq!(sequential.html, parallel.html);
    }

    #[test]
    fn test_strict_mode_reports_incomplete() {
        let config = DocsConfig {
            strict: true,
            ..DocsConfig::default()
        };
        let err = render_document(&document(), &config, &SampleRegistry::new()).unwrap_err();
        assert!(matches!(err, DocError::Incomplete(1)));
    }

    #[test]
    fn test_page_title_and_static_url() {
        let config = DocsConfig {
            page_title: Some("Reference".into()),
            static_url: "/assets".into(),
            ..DocsConfig::default()
        };
        let rendered = render_document(&document(), &config, &SampleRegistry::new()).unwrap();
        assert!(rendered.html.contains("<title>Reference</title>"));
        assert!(rendered.html.contains("<h1>Hello API</h1>"));
        assert!(rendered.html.contains("assets"));
    }
}
