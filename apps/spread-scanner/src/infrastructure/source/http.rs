//! HTTP document source.

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{DocumentSource, SourceError};

/// Browser-like user agent; option chain pages reject bare clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Fetches the option chain page over HTTP(S).
#[derive(Debug)]
pub struct HttpDocumentSource {
    client: reqwest::Client,
    url: String,
}

impl HttpDocumentSource {
    /// Create a new HTTP source.
    pub fn new(
        url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let url = url.into();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SourceError::Invalid {
                message: format!("'{url}' is not an http(s) URL"),
            });
        }

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Invalid {
                message: e.to_string(),
            })?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        tracing::debug!(url = %self.url, "Fetching option chain");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Network {
                location: self.url.clone(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                location: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|e| SourceError::Network {
            location: self.url.clone(),
            message: e.to_string(),
        })
    }

    fn location(&self) -> &str {
        &self.url
    }
}
