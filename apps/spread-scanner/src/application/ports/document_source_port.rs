//! Document Source Port (Driven Port)
//!
//! Interface for obtaining the raw option chain document.

use async_trait::async_trait;

/// Document source error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    /// Request could not be sent or the body could not be read.
    #[error("Network error fetching {location}: {message}")]
    Network {
        /// URL or path that was requested.
        location: String,
        /// Error details.
        message: String,
    },

    /// Server answered with a non-success status.
    #[error("HTTP {status} fetching {location}")]
    Status {
        /// URL that was requested.
        location: String,
        /// HTTP status code.
        status: u16,
    },

    /// Local file could not be read.
    #[error("Failed to read {location}: {message}")]
    Io {
        /// File path.
        location: String,
        /// Error details.
        message: String,
    },

    /// Source configuration is unusable.
    #[error("Invalid document source: {message}")]
    Invalid {
        /// Error details.
        message: String,
    },
}

/// Port for fetching an option chain document.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the whole document as text.
    async fn fetch(&self) -> Result<String, SourceError>;

    /// Human-readable location (URL or path) for logs.
    fn location(&self) -> &str;
}

#[async_trait]
impl<T> DocumentSource for Box<T>
where
    T: DocumentSource + ?Sized,
{
    async fn fetch(&self) -> Result<String, SourceError> {
        (**self).fetch().await
    }

    fn location(&self) -> &str {
        (**self).location()
    }
}
