//! Local file document source.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{DocumentSource, SourceError};

/// Reads a saved option chain page from disk.
#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    path: PathBuf,
    display: String,
}

impl FileDocumentSource {
    /// Create a new file source.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Io {
                location: self.display.clone(),
                message: e.to_string(),
            })
    }

    fn location(&self) -> &str {
        &self.display
    }
}
