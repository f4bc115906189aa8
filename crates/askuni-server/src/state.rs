//! Application state.
//!
//! The model handle is fixed when the server starts. The knowledge documents
//! arrive later, from a background task, and are set exactly once. No
//! question reaches the model before both are in place: handlers go through
//! [`AppState::readiness`], which only yields the model and documents once
//! everything loaded.

use std::sync::{Arc, OnceLock};

use askuni_knowledge::Knowledge;
use askuni_llm::ModelClient;
use serde::Serialize;

/// Shown while the knowledge documents are loading.
pub(crate) const LOADING_MESSAGE: &str = "Please wait while the system is loading...";

/// Shown once the assistant can take questions.
pub(crate) const READY_MESSAGE: &str = "Curious about our college? I'm here for you!";

/// Failure category, deciding how a problem is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorClass {
    /// Missing or invalid model settings. Blocks every question.
    Configuration,
    /// Knowledge documents could not be read. Blocks every question until restart.
    DocumentLoad,
    /// A single question failed. The user may send it again.
    Query,
}

impl ErrorClass {
    /// Message shown to the user.
    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            Self::Configuration => "AI model is not initialized. Please check the API key.",
            Self::DocumentLoad => {
                "Knowledge base files are not loaded. Please check the file URLs in CONFIG."
            }
            Self::Query => "Sorry, I encountered an error. Please try again.",
        }
    }

    /// Status bar text while this failure blocks the assistant.
    #[must_use]
    pub fn status_message(self) -> &'static str {
        match self {
            Self::Configuration => "❌ Error initializing AI. Check API key.",
            Self::DocumentLoad => "❌ Error loading data. Please refresh the page.",
            Self::Query => self.user_message(),
        }
    }

    /// Whether resending the same question can succeed.
    #[must_use]
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Query)
    }
}

/// A start-up step that failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartupFailure {
    pub class: ErrorClass,
    /// Operator-facing cause, for logs.
    pub detail: String,
}

impl StartupFailure {
    pub(crate) fn new(class: ErrorClass, detail: impl ToString) -> Self {
        Self {
            class,
            detail: detail.to_string(),
        }
    }
}

/// Chat page branding, as sent to the page.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub title: String,
    pub logo_url: Option<String>,
    pub banner_image_url: Option<String>,
}

impl From<&askuni_config::BrandingConfig> for Branding {
    fn from(config: &askuni_config::BrandingConfig) -> Self {
        Self {
            title: config.title.clone(),
            logo_url: config.logo_url.clone(),
            banner_image_url: config.banner_image_url.clone(),
        }
    }
}

/// Current readiness, borrowed from [`AppState`].
pub(crate) enum Readiness<'a> {
    /// Documents still loading.
    Loading,
    /// Questions can be answered.
    Ready {
        model: &'a Arc<dyn ModelClient>,
        knowledge: &'a Knowledge,
    },
    /// Start-up failed; nothing will be answered until restart.
    Unavailable(&'a StartupFailure),
}

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Page branding.
    pub(crate) branding: Branding,
    /// Model handle, or why none could be built.
    model: Result<Arc<dyn ModelClient>, StartupFailure>,
    /// Knowledge documents, set once by the loader task.
    knowledge: OnceLock<Result<Knowledge, StartupFailure>>,
}

impl AppState {
    /// State whose documents are still to be loaded.
    pub(crate) fn new(
        branding: Branding,
        model: Result<Arc<dyn ModelClient>, StartupFailure>,
    ) -> Self {
        Self {
            branding,
            model,
            knowledge: OnceLock::new(),
        }
    }

    /// Record the outcome of document loading.
    ///
    /// Only the first call has an effect.
    pub(crate) fn finish_loading(&self, knowledge: Result<Knowledge, StartupFailure>) {
        if self.knowledge.set(knowledge).is_err() {
            tracing::warn!("Knowledge documents were already set; ignoring second load");
        }
    }

    /// Model handle, regardless of document state.
    pub(crate) fn model(&self) -> Result<&Arc<dyn ModelClient>, &StartupFailure> {
        self.model.as_ref()
    }

    /// Loaded documents, if loading has finished successfully.
    pub(crate) fn knowledge(&self) -> Option<&Knowledge> {
        self.knowledge.get().and_then(|loaded| loaded.as_ref().ok())
    }

    /// Whether a question may be dispatched now.
    ///
    /// Checks run in order: model, loading, documents. A model that failed to
    /// configure is reported without waiting for the documents.
    pub(crate) fn readiness(&self) -> Readiness<'_> {
        let model = match &self.model {
            Ok(model) => model,
            Err(failure) => return Readiness::Unavailable(failure),
        };
        match self.knowledge.get() {
            None => Readiness::Loading,
            Some(Err(failure)) => Readiness::Unavailable(failure),
            Some(Ok(knowledge)) => Readiness::Ready { model, knowledge },
        }
    }
}
