//! Gemini `generateContent` client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ureq::Agent;

use crate::ModelClient;
use crate::error::QueryError;

/// Sampling parameters sent with every request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_k: u32,
    pub top_p: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 800,
            top_k: 40,
            top_p: 0.95,
        }
    }
}

/// Blocking client for the Gemini REST API.
pub struct GeminiClient {
    agent: Agent,
    endpoint: String,
    api_key: String,
    generation: GenerationConfig,
}

impl GeminiClient {
    /// Create a client for `model` served under `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - API root, e.g. `https://generativelanguage.googleapis.com/v1beta`
    /// * `model` - model name, e.g. `gemini-2.5-flash`
    /// * `api_key` - key sent in the `x-goog-api-key` header
    /// * `generation` - sampling parameters
    /// * `timeout` - limit for the whole request
    #[must_use]
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: &str,
        generation: GenerationConfig,
        timeout: Duration,
    ) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            endpoint: format!(
                "{}/models/{model}:generateContent",
                base_url.trim_end_matches('/')
            ),
            api_key: api_key.to_owned(),
            generation,
        }
    }

    /// Request URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ModelClient for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, QueryError> {
        let request = GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
            generation_config: self.generation,
        };

        debug!(endpoint = %self.endpoint, prompt_len = prompt.len(), "Querying model");

        let response = self
            .agent
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .header("Accept", "application/json")
            .send_json(&request)?;

        let status = response.status().as_u16();
        let body = response.into_body().read_to_string()?;

        if status >= 400 {
            return Err(QueryError::Api {
                status,
                message: api_error_message(&body),
            });
        }

        let reply = extract_reply(&serde_json::from_str(&body)?)?;
        info!(reply_len = reply.len(), "Model replied");
        Ok(reply)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Concatenated text of the first candidate.
fn extract_reply(response: &GenerateResponse) -> Result<String, QueryError> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_ref())
    {
        return Err(QueryError::Blocked {
            reason: reason.clone(),
        });
    }

    let Some(candidate) = response.candidates.first() else {
        return Err(QueryError::EmptyResponse);
    };

    if candidate.finish_reason.as_deref() == Some("MAX_TOKENS") {
        warn!("Model reply was cut off at the output token limit");
    }

    let text: String = candidate
        .content
        .iter()
        .flat_map(|content| &content.parts)
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        return Err(QueryError::EmptyResponse);
    }
    Ok(text)
}

/// Pull the message out of an API error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body).map_or_else(
        |_| {
            let body = body.trim();
            if body.is_empty() {
                "(empty error body)".to_owned()
            } else {
                body.to_owned()
            }
        },
        |parsed| parsed.error.message,
    )
}
