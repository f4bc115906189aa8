//! Mock model for testing.

use std::sync::Mutex;

use crate::ModelClient;
use crate::error::QueryError;

/// Model that answers every prompt with a fixed reply, or fails.
///
/// Prompts are recorded so tests can check what was sent.
///
/// ```ignore
/// use askuni_llm::{MockModel, ModelClient};
///
/// let model = MockModel::replying("**Yes**");
/// assert_eq!(model.generate("Is it open?").unwrap(), "**Yes**");
/// assert_eq!(model.prompts(), vec!["Is it open?".to_owned()]);
/// ```
#[derive(Debug)]
pub struct MockModel {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockModel {
    /// Mock answering every prompt with `reply`.
    #[must_use]
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Mock rejecting every prompt with an API error.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

impl ModelClient for MockModel {
    fn generate(&self, prompt: &str) -> Result<String, QueryError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_owned());
        }
        self.reply.clone().ok_or_else(|| QueryError::Api {
            status: 503,
            message: "mock model unavailable".to_owned(),
        })
    }
}
