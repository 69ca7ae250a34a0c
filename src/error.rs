//! Error type for the TMDB gatherer.
//!
//! Every failure inside the library funnels into [`Error`]. The gatherer
//! never hands these to the host as a hard failure; they end up inside
//! [`GatherOutcome::Failed`](crate::gatherer::GatherOutcome::Failed).

/// Unified error type covering remote, decoding, configuration and
/// preference failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("TMDB request failed: {source}")]
    Request {
        /// The underlying transport error.
        #[from]
        source: reqwest::Error,
    },

    /// TMDB answered with a non-success status.
    #[error("TMDB returned {status} for {path}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// API path that was requested (without query parameters).
        path: String,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode TMDB response for {path}: {source}")]
    Decode {
        /// API path that was requested.
        path: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host preference store rejected an operation.
    #[error("Preference error: {0}")]
    Preference(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Convenience constructor for [`Error::Status`].
    pub fn status(status: u16, path: impl Into<String>) -> Self {
        Error::Status {
            status,
            path: path.into(),
        }
    }

    /// Convenience constructor for [`Error::Decode`].
    pub fn decode(path: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Decode {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a remote "resource does not exist" answer.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Status { status: 404, .. })
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        let err = Error::status(401, "/search/movie");
        assert_eq!(err.to_string(), "TMDB returned 401 for /search/movie");
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_detection() {
        assert!(Error::status(404, "/tv/1/season/9").is_not_found());
        assert!(!Error::Config("x".into()).is_not_found());
    }

    #[test]
    fn decode_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::decode("/movie/1", source);
        assert!(err
            .to_string()
            .starts_with("Failed to decode TMDB response for /movie/1"));
    }

    #[test]
    fn io_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn config_display() {
        let err = Error::Config("timeout_secs must be positive".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: timeout_secs must be positive"
        );
    }
}
