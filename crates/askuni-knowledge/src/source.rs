//! Document locations.

use std::fmt;
use std::path::PathBuf;

/// Where a document is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentSource {
    /// Local file.
    File(PathBuf),
    /// `http://` or `https://` URL.
    Url(String),
}

impl DocumentSource {
    /// Interpret a configured location.
    ///
    /// Anything that is not an `http(s)://` URL is treated as a path.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_owned())
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        assert_eq!(
            DocumentSource::parse("https://u.test/kb.txt"),
            DocumentSource::Url("https://u.test/kb.txt".to_owned())
        );
        assert_eq!(
            DocumentSource::parse(" http://u.test/kb.txt "),
            DocumentSource::Url("http://u.test/kb.txt".to_owned())
        );
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(
            DocumentSource::parse("data/kb.txt"),
            DocumentSource::File(PathBuf::from("data/kb.txt"))
        );
        assert_eq!(
            DocumentSource::parse("ftp://u.test/kb.txt"),
            DocumentSource::File(PathBuf::from("ftp://u.test/kb.txt"))
        );
    }

    #[test]
    fn test_display_round_trips_location() {
        assert_eq!(DocumentSource::parse("kb.txt").to_string(), "kb.txt");
        assert_eq!(
            DocumentSource::parse("https://u.test/a").to_string(),
            "https://u.test/a"
        );
    }
}
