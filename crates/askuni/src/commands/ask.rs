//! `askuni ask` command implementation.

use askuni_knowledge::{DocumentLoader, Knowledge};
use askuni_llm::{ModelClient, compose_question_prompt};
use askuni_server::model_from_config;
use clap::Args;

use crate::commands::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the ask command.
#[derive(Args)]
pub(crate) struct AskArgs {
    /// Question to ask.
    question: String,

    #[command(flatten)]
    config: ConfigArgs,

    /// Print the reply rendered to HTML instead of markdown.
    #[arg(long)]
    html: bool,
}

impl AskArgs {
    /// Execute the ask command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, a document cannot be
    /// loaded, or the model fails to answer.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let question = self.question.trim();
        if question.is_empty() {
            output.warning("Question is empty");
            return Ok(());
        }

        let config = self.config.load(None, None)?;
        let model = model_from_config(&config)?;
        let knowledge = Knowledge::load(
            &DocumentLoader::default(),
            &config.knowledge.knowledge_base,
            &config.knowledge.summary,
        )?;

        tracing::info!(model = %config.model.name, question_len = question.len(), "Asking model");
        let prompt =
            compose_question_prompt(&knowledge.summary, &knowledge.knowledge_base, question);
        let reply = model.generate(&prompt)?;

        if self.html {
            output.result(&askuni_renderer::render(&reply))?;
        } else {
            output.result(&reply)?;
        }
        Ok(())
    }
}
