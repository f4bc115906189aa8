//! Configuration management for askuni.
//!
//! Parses `askuni.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `model.api_key`
//! - `model.base_url`
//! - `knowledge.knowledge_base`
//! - `knowledge.summary`
//! - `branding.logo_url`
//! - `branding.banner_image_url`
//!
//! When `model.api_key` is absent the key is read from `GEMINI_API_KEY`.
//!
//! ## Example
//!
//! ```toml
//! [server]
//! port = 8080
//!
//! [model]
//! api_key = "${GEMINI_API_KEY}"
//! name = "gemini-2.5-flash"
//!
//! [knowledge]
//! knowledge_base = "data/university_info.txt"
//! summary = "https://files.example.edu/summary.txt"
//!
//! [branding]
//! title = "Campus Assistant"
//! logo_url = "https://files.example.edu/logo.png"
//! ```

mod expand;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable consulted when the config file sets no API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "askuni.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override model name.
    pub model: Option<String>,
    /// Override knowledge base location.
    pub knowledge_base: Option<String>,
    /// Override university summary location.
    pub summary: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Language model configuration.
    pub model: ModelConfig,
    /// Knowledge document locations.
    pub knowledge: KnowledgeConfig,
    /// Chat page branding.
    pub branding: BrandingConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

/// Language model configuration.
///
/// Generation parameters are sent with every request.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// API key. Falls back to [`API_KEY_ENV`] when unset.
    pub api_key: Option<String>,
    /// Model name, e.g. `gemini-2.5-flash`.
    pub name: String,
    /// API base URL, without trailing slash.
    pub base_url: String,
    /// Sampling temperature (0.0-2.0).
    pub temperature: f32,
    /// Maximum number of tokens in a reply.
    pub max_output_tokens: u32,
    /// Top-k sampling.
    pub top_k: u32,
    /// Nucleus sampling (0.0-1.0).
    pub top_p: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            name: "gemini-2.5-flash".to_owned(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_owned(),
            temperature: 0.7,
            max_output_tokens: 800,
            top_k: 40,
            top_p: 0.95,
            timeout_secs: 60,
        }
    }
}

// The key never shows up in logs or error output.
impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("top_k", &self.top_k)
            .field("top_p", &self.top_p)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ModelConfig {
    /// Validate generation parameters.
    ///
    /// The API key is not checked here; see [`Config::require_model`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.name, "model.name")?;
        require_non_empty(&self.base_url, "model.base_url")?;
        require_http_url(&self.base_url, "model.base_url")?;

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Validation(
                "model.temperature must be between 0.0 and 2.0".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(ConfigError::Validation(
                "model.top_p must be between 0.0 and 1.0".to_owned(),
            ));
        }
        if self.max_output_tokens == 0 {
            return Err(ConfigError::Validation(
                "model.max_output_tokens must be greater than 0".to_owned(),
            ));
        }
        if self.top_k == 0 {
            return Err(ConfigError::Validation(
                "model.top_k must be greater than 0".to_owned(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "model.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Knowledge document locations.
///
/// Each entry is a filesystem path or an `http(s)://` URL. Relative paths in
/// a config file are resolved against the file's directory.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Detailed knowledge base consulted first.
    pub knowledge_base: String,
    /// General university summary used as fallback context.
    pub summary: String,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            knowledge_base: "university_info.txt".to_owned(),
            summary: "university_summary.txt".to_owned(),
        }
    }
}

/// Chat page branding.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    /// Page and header title.
    pub title: String,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Banner background image URL.
    pub banner_image_url: Option<String>,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            title: "University Assistant".to_owned(),
            logo_url: None,
            banner_image_url: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`model.api_key`").
        field: String,
        /// Error message (e.g., "${`GEMINI_API_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !is_http_url(url) {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `askuni.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// CLI settings are applied last, so they take precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// a referenced environment variable is unset, or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if config.model.api_key.is_none() {
            config.model.api_key = std::env::var(API_KEY_ENV).ok();
        }

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(model) = &settings.model {
            self.model.name.clone_from(model);
        }
        if let Some(knowledge_base) = &settings.knowledge_base {
            self.knowledge.knowledge_base.clone_from(knowledge_base);
        }
        if let Some(summary) = &settings.summary {
            self.knowledge.summary.clone_from(summary);
        }
    }

    /// Get validated model configuration including a usable API key.
    ///
    /// A missing key is not a load error: the server still starts and reports
    /// the problem on its status endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if no API key is configured or a
    /// generation parameter is invalid.
    pub fn require_model(&self) -> Result<&ModelConfig, ConfigError> {
        let key = self.model.api_key.as_deref().unwrap_or_default();
        if key.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "model.api_key is not set (configure it or export {API_KEY_ENV})"
            )));
        }
        self.model.validate()?;
        Ok(&self.model)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.model.validate()?;
        require_non_empty(&self.knowledge.knowledge_base, "knowledge.knowledge_base")?;
        require_non_empty(&self.knowledge.summary, "knowledge.summary")?;
        require_non_empty(&self.branding.title, "branding.title")?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        expand::expand_opt(&mut self.model.api_key, "model.api_key")?;
        self.model.base_url = expand::expand_env(&self.model.base_url, "model.base_url")?;

        self.knowledge.knowledge_base =
            expand::expand_env(&self.knowledge.knowledge_base, "knowledge.knowledge_base")?;
        self.knowledge.summary = expand::expand_env(&self.knowledge.summary, "knowledge.summary")?;

        expand::expand_opt(&mut self.branding.logo_url, "branding.logo_url")?;
        expand::expand_opt(&mut self.branding.banner_image_url, "branding.banner_image_url")?;

        Ok(())
    }

    /// Resolve relative document paths against the config directory.
    ///
    /// URLs and absolute paths are left alone.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |location: &mut String| {
            if is_http_url(location) || Path::new(location.as_str()).is_absolute() {
                return;
            }
            *location = config_dir.join(location.as_str()).to_string_lossy().into_owned();
        };

        resolve(&mut self.knowledge.knowledge_base);
        resolve(&mut self.knowledge.summary);
    }
}
