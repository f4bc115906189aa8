//! CLI command implementations.

pub(crate) mod ask;
pub(crate) mod render;
pub(crate) mod serve;

use std::path::PathBuf;

use askuni_config::{CliSettings, Config};
use clap::Args;

use crate::error::CliError;

pub(crate) use ask::AskArgs;
pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;

/// Configuration options shared by commands that talk to the model.
#[derive(Args, Debug, Default)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover askuni.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model name (overrides config).
    #[arg(long)]
    model: Option<String>,

    /// Knowledge base path or URL (overrides config).
    #[arg(long)]
    knowledge_base: Option<String>,

    /// University summary path or URL (overrides config).
    #[arg(long)]
    summary: Option<String>,
}

impl ConfigArgs {
    /// Load configuration with these overrides plus a server address.
    pub(crate) fn load(
        self,
        host: Option<String>,
        port: Option<u16>,
    ) -> Result<Config, CliError> {
        let settings = CliSettings {
            host,
            port,
            model: self.model,
            knowledge_base: self.knowledge_base,
            summary: self.summary,
        };
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_overrides_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("askuni.toml");
        std::fs::write(
            &path,
            "[model]\napi_key = \"k\"\nname = \"file-model\"\n\n[knowledge]\nsummary = \"s.txt\"\n",
        )
        .unwrap();
        let args = ConfigArgs {
            config: Some(path),
            model: Some("cli-model".to_owned()),
            knowledge_base: Some("https://u.test/kb.txt".to_owned()),
            summary: None,
        };

        let config = args.load(None, Some(9000)).unwrap();

        assert_eq!(config.model.name, "cli-model");
        assert_eq!(config.knowledge.knowledge_base, "https://u.test/kb.txt");
        assert_eq!(
            config.knowledge.summary,
            dir.path().join("s.txt").to_string_lossy()
        );
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_missing_explicit_config() {
        let args = ConfigArgs {
            config: Some(PathBuf::from("/nonexistent/askuni.toml")),
            ..ConfigArgs::default()
        };

        assert!(matches!(args.load(None, None), Err(CliError::Config(_))));
    }
}
