#![deny(missing_docs)]

//! # Render Command
//!
//! Renders a document file (or a directory of them) into HTML pages.

use crate::error::{CliError, CliResult};
use crate::options::RenderOptions;
use stark_docs_core::{load_document, render_document, DocsConfig, RenderedDocument, SampleRegistry};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const DOCUMENT_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Arguments for the render command.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Document file, or a directory searched recursively for documents.
    #[clap(long, short)]
    pub input: PathBuf,

    /// Output file (single document) or directory. Defaults to stdout.
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    #[clap(flatten)]
    pub options: RenderOptions,
}

/// Executes the render command.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `samples` - Sample providers made available to every page.
pub fn execute(args: &RenderArgs, samples: &SampleRegistry) -> CliResult<()> {
    let config = args.options.resolve()?;

    if args.input.is_dir() {
        let output_dir = args.output.as_ref().ok_or_else(|| {
            CliError::General("--output is required when --input is a directory".into())
        })?;
        return render_directory(&args.input, output_dir, &config, samples);
    }

    let rendered = render_file(&args.input, &config, samples)?;
    match &args.output {
        Some(path) => write_page(path, &rendered.html)?,
        None => io::stdout().write_all(rendered.html.as_bytes())?,
    }
    Ok(())
}

fn render_directory(
    input_dir: &Path,
    output_dir: &Path,
    config: &DocsConfig,
    samples: &SampleRegistry,
) -> CliResult<()> {
    let mut pages = 0;
    let walker = WalkDir::new(input_dir).sort_by_file_name().into_iter();

    for entry in walker.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !entry.file_type().is_file() || !is_document(path) {
            continue;
        }

        let rendered = render_file(path, config, samples)?;
        let relative = path.strip_prefix(input_dir).unwrap_or(path);
        let target = output_dir.join(relative).with_extension("html");
        write_page(&target, &rendered.html)?;
        pages += 1;
    }

    if pages == 0 {
        return Err(CliError::General(format!(
            "No documents found in {:?}",
            input_dir
        )));
    }
    tracing::info!(pages, output = %output_dir.display(), "rendered directory");
    Ok(())
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.iter().any(|d| ext.eq_ignore_ascii_case(d)))
}

/// Loads and renders one document, reporting failed links on stderr.
pub(crate) fn render_file(
    path: &Path,
    config: &DocsConfig,
    samples: &SampleRegistry,
) -> CliResult<RenderedDocument> {
    let document = load_document(path)?;
    let rendered = render_document(&document, config, samples)?;
    for failure in &rendered.failures {
        eprintln!(
            "{}: documentation unavailable for `{}` (#{}): {}",
            path.display(),
            failure.name,
            failure.anchor,
            failure.error
        );
    }
    Ok(rendered)
}

fn write_page(path: &Path, html: &str) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| CliError::General(format!("Failed to create output dir: {}", e)))?;
        }
    }
    fs::write(path, html)
        .map_err(|e| CliError::General(format!("Failed to write {:?}: {}", path, e)))?;
    tracing::info!(path = %path.display(), "wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const DOC: &str = "title: Hello API\ncontent:\n  - type: link\n    name: welcome\n    method: GET\n    url: /\n";

    fn args(input: PathBuf, output: Option<PathBuf>) -> RenderArgs {
        RenderArgs {
            input,
            output,
            options: RenderOptions::default(),
        }
    }

    #[test]
    fn test_render_single_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("api.yaml");
        let output = dir.path().join("out/index.html");
        fs::write(&input, DOC).unwrap();

        execute(&args(input, Some(output.clone())), &SampleRegistry::new()).unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains(r#"<h3 id="welcome""#));
    }

    #[test]
    fn test_render_directory() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("docs");
        fs::create_dir_all(input.join("v2")).unwrap();
        fs::write(input.join("a.yaml"), DOC).unwrap();
        fs::write(input.join("v2/b.yml"), DOC).unwrap();
        fs::write(input.join("README.md"), "# not a document").unwrap();
        let output = dir.path().join("site");

        execute(&args(input, Some(output.clone())), &SampleRegistry::new()).unwrap();

        assert!(output.join("a.html").exists());
        assert!(output.join("v2/b.html").exists());
        assert!(!output.join("README.html").exists());
    }

    #[test]
    fn test_same_stem_in_subdirectories_kept_apart() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("docs");
        fs::create_dir_all(input.join("public")).unwrap();
        fs::create_dir_all(input.join("internal")).unwrap();
        fs::write(input.join("public/api.yaml"), DOC).unwrap();
        fs::write(
            input.join("internal/api.yaml"),
            DOC.replace("Hello API", "Internal API"),
        )
        .unwrap();
        let output = dir.path().join("site");

        execute(&args(input, Some(output.clone())), &SampleRegistry::new()).unwrap();

        let public = fs::read_to_string(output.join("public/api.html")).unwrap();
        let internal = fs::read_to_string(output.join("internal/api.html")).unwrap();
        assert!(public.contains("<h1>Hello API</h1>"));
        assert!(internal.contains("<h1>Internal API</h1>"));
        assert!(!output.join("api.html").exists());
    }

    #[test]
    fn test_directory_requires_output() {
        let dir = tempdir().unwrap();
        let err = execute(&args(dir.path().to_path_buf(), None), &SampleRegistry::new());
        assert!(matches!(err, Err(CliError::General(_))));
    }

    #[test]
    fn test_strict_mode_fails_on_bad_link() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("api.yaml");
        fs::write(
            &input,
            "title: API\ncontent:\n  - type: link\n    name: broken\n    url: /\n",
        )
        .unwrap();

        let mut strict = args(input, Some(dir.path().join("out.html")));
        strict.options.strict = true;
        assert!(matches!(
            execute(&strict, &SampleRegistry::new()),
            Err(CliError::Doc(stark_docs_core::DocError::Incomplete(1)))
        ));
    }
}
