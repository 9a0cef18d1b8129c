//! Error handling for the spread scanner.
//!
//! Module-level errors are folded into [`ScanError`], which carries a stable
//! [`ErrorCode`] for log fields and JSON error output.
//!
//! | Code | Cause |
//! |------|-------|
//! | `SOURCE_UNAVAILABLE` | Document could not be fetched or read |
//! | `INVALID_DOCUMENT` | Option chain tables missing or malformed |
//! | `MISSING_COLUMN` | Requested column label absent from the header |
//! | `INVALID_CONSTRAINTS` | Constraint values are inconsistent |
//! | `INVALID_CONFIG` | Configuration could not be loaded |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::SourceError;
use crate::config::ConfigError;
use crate::domain::ConstraintsError;
use crate::infrastructure::ExtractError;
use crate::normalizer::NormalizeError;

/// Error codes for the spread scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Document could not be fetched or read.
    SourceUnavailable,
    /// Option chain tables missing or malformed.
    InvalidDocument,
    /// Requested column label absent from the header.
    MissingColumn,
    /// Constraint values are inconsistent.
    InvalidConstraints,
    /// Configuration could not be loaded.
    InvalidConfig,
}

impl ErrorCode {
    /// Stable reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::SourceUnavailable => "SOURCE_UNAVAILABLE",
            Self::InvalidDocument => "INVALID_DOCUMENT",
            Self::MissingColumn => "MISSING_COLUMN",
            Self::InvalidConstraints => "INVALID_CONSTRAINTS",
            Self::InvalidConfig => "INVALID_CONFIG",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Umbrella error for a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Fetching the document failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The document did not contain usable tables.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The header did not contain a requested column.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// Constraints were inconsistent.
    #[error(transparent)]
    Constraints(#[from] ConstraintsError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ScanError {
    /// Classify the error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Source(_) => ErrorCode::SourceUnavailable,
            Self::Extract(_) => ErrorCode::InvalidDocument,
            Self::Normalize(_) => ErrorCode::MissingColumn,
            Self::Constraints(_) => ErrorCode::InvalidConstraints,
            Self::Config(_) => ErrorCode::InvalidConfig,
        }
    }

    /// JSON-friendly error body.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code().reason().to_string(),
            message: self.to_string(),
        }
    }
}

/// Serializable error body for `--format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_from_sources() {
        let err = ScanError::from(ExtractError::MissingTable { found: 1 });
        assert_eq!(err.code(), ErrorCode::InvalidDocument);

        let err = ScanError::from(SourceError::Status {
            location: "https://example.com".into(),
            status: 503,
        });
        assert_eq!(err.code(), ErrorCode::SourceUnavailable);
        assert_eq!(err.to_string(), "HTTP 503 fetching https://example.com");
    }

    #[test]
    fn response_body() {
        let err = ScanError::from(NormalizeError::MissingColumn {
            label: "Bid".into(),
            header: vec!["Strike".into()],
        });
        let body = err.to_response();
        assert_eq!(body.code, "MISSING_COLUMN");
        assert!(body.message.contains("'Bid'"));

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "MISSING_COLUMN");
    }

    #[test]
    fn code_display() {
        assert_eq!(ErrorCode::InvalidConfig.to_string(), "INVALID_CONFIG");
    }
}
