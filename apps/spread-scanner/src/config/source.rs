//! Document source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::infrastructure::DEFAULT_USER_AGENT;

/// Default option chain page (UBER, January 2022 expiry).
pub const DEFAULT_URL: &str = "https://finance.yahoo.com/quote/UBER/options?date=1642723200";

/// Where the option chain document comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Option chain page URL.
    #[serde(default = "default_url")]
    pub url: String,
    /// Local HTML file; takes precedence over `url` when set.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// User agent sent with HTTP requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            file: None,
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}
