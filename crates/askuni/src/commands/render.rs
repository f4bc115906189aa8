//! `askuni render` command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use askuni_renderer::{HtmlBackend, MarkdownRenderer};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render, or `-` for stdin.
    #[arg(default_value = "-")]
    input: PathBuf,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let markdown = read_input(&self.input)?;

        let result = MarkdownRenderer::<HtmlBackend>::new().render(&markdown);
        for warning in &result.warnings {
            output.warning(&format!("Warning: {warning}"));
        }
        output.result(&result.html)?;
        Ok(())
    }
}

/// Read markdown from a file, or from stdin when `path` is `-`.
fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut markdown = String::new();
        std::io::stdin().read_to_string(&mut markdown)?;
        Ok(markdown)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
