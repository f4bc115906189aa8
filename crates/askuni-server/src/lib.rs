//! HTTP server for the askuni chat assistant.
//!
//! Serves:
//! - the chat page (embedded HTML, script and stylesheet)
//! - `POST /api/ask`: answer a question from the loaded documents, returning
//!   the reply as markdown and as rendered markup
//! - `POST /api/chat`: relay a prompt and documents to the model
//! - `POST /api/render`: render markdown
//! - `GET /api/status`: readiness and branding for the chat page
//!
//! # Start-up
//!
//! The server accepts connections immediately. The model client is built
//! from configuration before binding; the knowledge documents load on a
//! background task. Until both are available, questions are refused with the
//! message that explains why.
//!
//! ```text
//! Browser ──HTTP──► axum router
//!                       │
//!                       ├─► /api/ask ──► compose_question_prompt ──► ModelClient ──► render
//!                       ├─► /api/chat ─► compose_prompt ──► ModelClient
//!                       ├─► /api/status
//!                       └─► static page
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use askuni_config::{Config, ConfigError};
use askuni_knowledge::{DocumentLoader, Knowledge};
use askuni_llm::{GeminiClient, GenerationConfig, ModelClient};

pub use error::ServerError;
pub use state::{Branding, ErrorClass, StartupFailure};

use state::AppState;

/// Build the Gemini client described by `config`.
///
/// # Errors
///
/// Returns `ConfigError::Validation` if no API key is configured or a model
/// setting is out of range.
pub fn model_from_config(config: &Config) -> Result<GeminiClient, ConfigError> {
    let model = config.require_model()?;
    let generation = GenerationConfig {
        temperature: model.temperature,
        max_output_tokens: model.max_output_tokens,
        top_k: model.top_k,
        top_p: model.top_p,
    };
    Ok(GeminiClient::new(
        &model.base_url,
        &model.name,
        model.api_key.as_deref().unwrap_or_default(),
        generation,
        Duration::from_secs(model.timeout_secs),
    ))
}

/// Run the server.
///
/// A missing API key or unreachable documents do not stop the server; they
/// are reported on the status endpoint and refuse questions.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to bind.
pub async fn run_server(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let model: Result<Arc<dyn ModelClient>, StartupFailure> = match model_from_config(config) {
        Ok(client) => {
            tracing::info!(endpoint = client.endpoint(), "Model client ready");
            Ok(Arc::new(client))
        }
        Err(e) => {
            tracing::error!(error = %e, "Model is not configured");
            Err(StartupFailure::new(ErrorClass::Configuration, e))
        }
    };

    let state = Arc::new(AppState::new(Branding::from(&config.branding), model));
    spawn_document_loader(
        Arc::clone(&state),
        config.knowledge.knowledge_base.clone(),
        config.knowledge.summary.clone(),
    );

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.server.host, config.server.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Load the knowledge documents in the background and publish the outcome.
fn spawn_document_loader(state: Arc<AppState>, knowledge_base: String, summary: String) {
    tokio::spawn(async move {
        let loaded = tokio::task::spawn_blocking(move || {
            Knowledge::load(&DocumentLoader::default(), &knowledge_base, &summary)
        })
        .await;

        let outcome = match loaded {
            Ok(Ok(knowledge)) => {
                tracing::info!(
                    knowledge_base_len = knowledge.knowledge_base.len(),
                    summary_len = knowledge.summary.len(),
                    "Knowledge documents loaded"
                );
                Ok(knowledge)
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, cause = %e.cause, "Failed to load knowledge documents");
                Err(StartupFailure::new(ErrorClass::DocumentLoad, e))
            }
            Err(e) => {
                tracing::error!(error = %e, "Document loader task failed");
                Err(StartupFailure::new(ErrorClass::DocumentLoad, e))
            }
        };
        state.finish_loading(outcome);
    });
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

#[cfg(test)]
mod tests {
    use askuni_config::ModelConfig;
    use askuni_llm::MockModel;

    use super::*;
    use crate::state::Readiness;

    #[test]
    fn test_model_from_config_requires_key() {
        let config = Config {
            model: ModelConfig {
                api_key: None,
                ..ModelConfig::default()
            },
            ..Config::default()
        };

        assert!(matches!(
            model_from_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_model_from_config_endpoint() {
        let config = Config {
            model: ModelConfig {
                api_key: Some("secret".to_owned()),
                name: "gemini-test".to_owned(),
                base_url: "https://api.test/v1/".to_owned(),
                ..ModelConfig::default()
            },
            ..Config::default()
        };

        let client = model_from_config(&config).unwrap();

        assert_eq!(
            client.endpoint(),
            "https://api.test/v1/models/gemini-test:generateContent"
        );
    }

    #[tokio::test]
    async fn test_document_loader_reports_missing_file() {
        let model: Arc<dyn ModelClient> = Arc::new(MockModel::replying("hi"));
        let state = Arc::new(AppState::new(Branding::default(), Ok(model)));
        let dir = std::env::temp_dir().join("askuni-missing-docs");

        spawn_document_loader(
            Arc::clone(&state),
            dir.join("kb.txt").to_string_lossy().into_owned(),
            dir.join("summary.txt").to_string_lossy().into_owned(),
        );

        for _ in 0..200 {
            if !matches!(state.readiness(), Readiness::Loading) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        let Readiness::Unavailable(failure) = state.readiness() else {
            panic!("expected unavailable");
        };
        assert_eq!(failure.class, ErrorClass::DocumentLoad);
        assert!(state.knowledge().is_none());
    }
}
