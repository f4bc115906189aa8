//! Language model access.
//!
//! - [`ModelClient`]: one blocking text-in, text-out call
//! - [`GeminiClient`]: implementation for the Gemini REST API
//! - [`compose_question_prompt`] and [`compose_prompt`]: build the request
//!   text for a question and for a relayed prompt
//! - [`MockModel`] for testing (behind `mock` feature flag)

mod error;
mod gemini;
#[cfg(feature = "mock")]
mod mock;
mod prompt;

pub use error::QueryError;
pub use gemini::{GeminiClient, GenerationConfig};
#[cfg(feature = "mock")]
pub use mock::MockModel;
pub use prompt::{compose_prompt, compose_question_prompt};

/// A model that turns one prompt into one reply.
///
/// Calls block until the reply arrives or the request fails. Async callers
/// should run them on a blocking thread.
pub trait ModelClient: Send + Sync {
    /// Generate a reply for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the model is unreachable, rejects the
    /// request, or returns no text.
    fn generate(&self, prompt: &str) -> Result<String, QueryError>;
}
