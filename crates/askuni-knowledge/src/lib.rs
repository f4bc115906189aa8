//! Knowledge documents the assistant answers from.
//!
//! Two plain-text documents back every answer: a detailed knowledge base and
//! a shorter university summary used when the knowledge base has no answer.
//! Each is read once, at start-up, from a local path or an `http(s)://` URL.
//! Loading is blocking; async callers should run it on a blocking thread.

mod error;
mod loader;
mod source;

pub use error::{DocumentKind, FetchError, LoadError};
pub use loader::DocumentLoader;
pub use source::DocumentSource;

/// Both knowledge documents, loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Knowledge {
    /// Detailed knowledge base.
    pub knowledge_base: String,
    /// University summary.
    pub summary: String,
}

impl Knowledge {
    /// Load both documents. The knowledge base is read first.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] for the first document that cannot be read.
    pub fn load(
        loader: &DocumentLoader,
        knowledge_base: &str,
        summary: &str,
    ) -> Result<Self, LoadError> {
        Ok(Self {
            knowledge_base: loader.load(DocumentKind::KnowledgeBase, knowledge_base)?,
            summary: loader.load(DocumentKind::Summary, summary)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_load_both_documents() {
        let dir = tempfile::tempdir().unwrap();
        let kb = dir.path().join("kb.txt");
        let summary = dir.path().join("summary.txt");
        std::fs::write(&kb, "Courses: BSc, MSc").unwrap();
        std::fs::write(&summary, "A public college.").unwrap();

        let knowledge = Knowledge::load(
            &DocumentLoader::default(),
            &kb.to_string_lossy(),
            &summary.to_string_lossy(),
        )
        .unwrap();

        assert_eq!(
            knowledge,
            Knowledge {
                knowledge_base: "Courses: BSc, MSc".to_owned(),
                summary: "A public college.".to_owned(),
            }
        );
    }

    #[test]
    fn test_load_reports_failing_document() {
        let dir = tempfile::tempdir().unwrap();
        let kb = dir.path().join("kb.txt");
        std::fs::write(&kb, "Courses: BSc").unwrap();

        let err = Knowledge::load(
            &DocumentLoader::default(),
            &kb.to_string_lossy(),
            &dir.path().join("missing.txt").to_string_lossy(),
        )
        .unwrap_err();

        assert_eq!(err.document, DocumentKind::Summary);
        assert!(matches!(err.cause, FetchError::Io(_)));
    }

    #[test]
    fn test_knowledge_base_failure_wins() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let missing = missing.to_string_lossy();

        let err = Knowledge::load(&DocumentLoader::default(), &missing, &missing).unwrap_err();
        assert_eq!(err.document, DocumentKind::KnowledgeBase);
    }
}
