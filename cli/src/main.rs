#![deny(missing_docs)]

//! # Stark Docs CLI
//!
//! Command Line Interface for rendering API reference documentation.
//!
//! Supported Commands:
//! - `render`: Document file(s) -> HTML page(s).
//! - `check`: Reports links that cannot be documented.

use clap::{Parser, Subcommand};
use stark_docs_core::SampleRegistry;
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

mod check;
mod error;
mod options;
mod render;

#[derive(Parser, Debug)]
#[clap(author, version, about = "API reference documentation renderer")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render documents into HTML pages.
    Render(render::RenderArgs),
    /// Check that every link of a document can be documented.
    Check(check::CheckArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "stark_docs=debug"
    } else {
        "stark_docs=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Samples come from the documents themselves.
    let samples = SampleRegistry::new();

    match &cli.command {
        Commands::Render(args) => render::execute(args, &samples)?,
        Commands::Check(args) => check::execute(args, &samples)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_flags() {
        let cli = Cli::try_parse_from([
            "stark-docs",
            "render",
            "--input",
            "api.yaml",
            "--lang",
            "python,javascript",
            "--parallel",
        ])
        .unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.options.languages, vec!["python", "javascript"]);
                assert!(args.options.parallel);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
