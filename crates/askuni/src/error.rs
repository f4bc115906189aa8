//! CLI error types.

use askuni_config::ConfigError;
use askuni_knowledge::LoadError;
use askuni_llm::QueryError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0} ({cause})", cause = .0.cause)]
    Load(#[from] LoadError),

    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("{0}")]
    Server(String),
}
