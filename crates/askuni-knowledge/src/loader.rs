//! Blocking document loader.

use std::time::Duration;

use tracing::{debug, info};
use ureq::Agent;

use crate::error::{DocumentKind, FetchError, LoadError};
use crate::source::DocumentSource;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Reads documents from disk or over HTTP.
pub struct DocumentLoader {
    agent: Agent,
}

impl DocumentLoader {
    /// Create a loader whose HTTP requests give up after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }

    /// Read one document.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the file or URL cannot be read, the server
    /// answers with an error status, or the document is blank.
    pub fn fetch(&self, source: &DocumentSource) -> Result<String, FetchError> {
        let text = match source {
            DocumentSource::File(path) => std::fs::read_to_string(path)?,
            DocumentSource::Url(url) => self.fetch_url(url)?,
        };

        if text.trim().is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(text)
    }

    /// Read the document at `location`, tagging failures with `document`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] naming the document and its location.
    pub fn load(&self, document: DocumentKind, location: &str) -> Result<String, LoadError> {
        let source = DocumentSource::parse(location);
        let text = self.fetch(&source).map_err(|cause| LoadError {
            document,
            location: location.to_owned(),
            cause,
        })?;

        info!(%document, location = %source, bytes = text.len(), "Loaded document");
        Ok(text)
    }

    fn fetch_url(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "Fetching document");
        let response = self.agent.get(url).call()?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FetchError::HttpStatus { status });
        }

        Ok(response.into_body().read_to_string()?)
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    /// Serve a single canned HTTP response on a local port.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            write!(
                stream,
                "HTTP/1.1 {status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
        });

        format!("http://{addr}/doc.txt")
    }

    #[test]
    fn test_fetch_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.txt");
        std::fs::write(&path, "Library hours: 8-20").unwrap();

        let text = DocumentLoader::default()
            .fetch(&DocumentSource::File(path))
            .unwrap();
        assert_eq!(text, "Library hours: 8-20");
    }

    #[test]
    fn test_fetch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DocumentLoader::default()
            .fetch(&DocumentSource::File(dir.path().join("missing.txt")))
            .unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }

    #[test]
    fn test_fetch_blank_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        std::fs::write(&path, "  \n\n").unwrap();

        let err = DocumentLoader::default()
            .fetch(&DocumentSource::File(path))
            .unwrap_err();
        assert!(matches!(err, FetchError::Empty));
    }

    #[test]
    fn test_fetch_url() {
        let url = serve_once("200 OK", "Founded in 1961.");
        let text = DocumentLoader::default()
            .fetch(&DocumentSource::Url(url))
            .unwrap();
        assert_eq!(text, "Founded in 1961.");
    }

    #[test]
    fn test_fetch_url_error_status() {
        let url = serve_once("404 Not Found", "nope");
        let err = DocumentLoader::default()
            .fetch(&DocumentSource::Url(url))
            .unwrap_err();
        assert!(matches!(err, FetchError::HttpStatus { status: 404 }));
    }

    #[test]
    fn test_load_error_names_document() {
        let dir = tempfile::tempdir().unwrap();
        let location = dir.path().join("gone.txt");
        let location = location.to_string_lossy();

        let err = DocumentLoader::default()
            .load(DocumentKind::Summary, &location)
            .unwrap_err();
        assert_eq!(err.document, DocumentKind::Summary);
        assert_eq!(err.location, location);
        assert!(err.to_string().starts_with("Failed to load university summary from "));
    }
}
