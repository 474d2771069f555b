#![deny(missing_docs)]

//! # Check Command
//!
//! Renders a document in memory and fails if any link would be replaced by
//! a placeholder.

use crate::error::{CliError, CliResult};
use crate::options::RenderOptions;
use crate::render::render_file;
use stark_docs_core::SampleRegistry;
use std::path::PathBuf;

/// Arguments for the check command.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Document file to check.
    #[clap(long, short)]
    pub input: PathBuf,

    #[clap(flatten)]
    pub options: RenderOptions,
}

/// Executes the check command.
pub fn execute(args: &CheckArgs, samples: &SampleRegistry) -> CliResult<()> {
    let mut config = args.options.resolve()?;
    // Failures are counted here rather than turned into an error by the renderer.
    config.strict = false;

    let rendered = render_file(&args.input, &config, samples)?;
    if !rendered.is_complete() {
        return Err(CliError::General(format!(
            "{} link(s) in {:?} cannot be documented",
            rendered.failures.len(),
            args.input
        )));
    }

    println!("{}: ok", args.input.display());
    Ok(())
}
