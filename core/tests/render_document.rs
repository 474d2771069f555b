use pretty_assertions::assert_eq;
use stark_docs_core::{
    parse_document, render_document, DocError, DocsConfig, DocumentFormat, Item, Link,
    SampleRegistry,
};
use std::path::Path;

const HELLO_API: &str = include_str!("fixtures/hello_api.yaml");

fn config(languages: &[&str]) -> DocsConfig {
    DocsConfig {
        languages: languages.iter().map(|l| l.to_string()).collect(),
        ..DocsConfig::default()
    }
}

#[test]
fn test_fixture_loads_with_one_rejected_link() {
    let doc = parse_document(HELLO_API, DocumentFormat::Yaml).unwrap();
    assert_eq!(doc.title, "Hello API");

    let Item::Section(notes) = &doc.content[1] else {
        panic!("expected the notes section");
    };
    let names: Vec<&str> = notes
        .content
        .iter()
        .map(|item| match item {
            Item::Link(link) => link.name.as_str(),
            Item::Rejected(rejected) => rejected.name.as_str(),
            Item::Section(section) => section.name.as_str(),
        })
        .collect();
    assert_eq!(names, vec!["list", "get", "create", "delete"]);
    assert!(matches!(&notes.content[3], Item::Rejected(_)));
}

#[test]
fn test_full_page_render() {
    let doc = parse_document(HELLO_API, DocumentFormat::Yaml).unwrap();
    let rendered =
        render_document(&doc, &config(&["python", "javascript"]), &SampleRegistry::new()).unwrap();
    let html = &rendered.html;

    // Welcome link, with both embedded samples and python selected.
    assert!(html.contains(r#"<h3 id="welcome" class="coredocs-link-title">welcome"#));
    assert!(html.contains(r#"<div class="code-sample active" data-language="python">"#));
    assert!(html.contains(r#"<div class="code-sample" data-language="javascript">"#));

    // Section anchors namespace the links.
    for anchor in ["notes-list", "notes-get", "notes-create"] {
        assert!(html.contains(&format!(r#"<h3 id="{}""#, anchor)), "{}", anchor);
    }

    // Field-level description wins over the schema description.
    assert!(html.contains("<td>boolean</td><td>Show archived notes too</td>"));
    assert!(!html.contains("Include archived notes"));

    // Object body expands into property rows.
    assert!(html.contains("<code>title</code>"));
    assert!(html.contains("<td>string</td><td>Short title</td>"));
    assert!(!html.contains("<code>note</code>"));

    // The invalid link is a visible placeholder.
    assert_eq!(rendered.failures.len(), 1);
    assert_eq!(rendered.failures[0].anchor, "notes-delete");
    assert!(matches!(
        *rendered.failures[0].error,
        DocError::MissingRequiredAttribute {
            attribute: "schema",
            ..
        }
    ));
    assert!(html.contains("documentation unavailable for <code>delete</code>"));
}

#[test]
fn test_links_without_samples_skip_languages() {
    let doc = parse_document(HELLO_API, DocumentFormat::Yaml).unwrap();
    let rendered = render_document(&doc, &config(&["python"]), &SampleRegistry::new()).unwrap();

    // Only `welcome` embeds samples; every other link renders an empty panel.
    assert_eq!(rendered.html.matches(r#"class="code-sample"#).count(), 1);
    assert_eq!(rendered.failures.len(), 1);
}

#[test]
fn test_registered_provider_covers_every_link() {
    let doc = parse_document(HELLO_API, DocumentFormat::Yaml).unwrap();
    let mut samples = SampleRegistry::new();
    samples.register("shell", |link: &Link| -> stark_docs_core::DocResult<String> {
        Ok(format!("<pre>curl -X {} {}</pre>", link.method, link.url))
    });

    let rendered = render_document(&doc, &config(&["shell"]), &samples).unwrap();
    assert_eq!(
        rendered.html.matches(r#"<div class="code-sample active""#).count(),
        4
    );
    assert!(rendered.html.contains("<pre>curl -X POST /notes</pre>"));
}

#[test]
fn test_render_is_deterministic_across_modes() {
    let doc = parse_document(HELLO_API, DocumentFormat::Yaml).unwrap();
    let samples = SampleRegistry::new();
    let sequential = render_document(&doc, &config(&["python"]), &samples).unwrap();
    let again = render_document(&doc, &config(&["python"]), &samples).unwrap();
    let parallel = render_document(
        &doc,
        &DocsConfig {
            parallel: true,
            ..config(&["python"])
        },
        &samples,
    )
    .unwrap();

    assert_eq!(sequential.html, again.html);
    assert_eq!(sequential.html, parallel.html);
}

#[test]
fn test_json_document() {
    let text = r#"{
        "title": "JSON API",
        "content": [
            { "type": "link", "name": "ping", "method": "get", "url": "/ping" }
        ]
    }"#;
    let doc = parse_document(text, DocumentFormat::from_path(Path::new("api.json"))).unwrap();
    let rendered = render_document(&doc, &DocsConfig::default(), &SampleRegistry::new()).unwrap();
    assert!(rendered.is_complete());
    assert!(rendered
        .html
        .contains(r#"<span class="label label-primary">GET</span>"#));
}
