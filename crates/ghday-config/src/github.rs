//! GitHub API configuration.

use serde::{Deserialize, Serialize};

/// Public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub's maximum page size.
pub const MAX_PER_PAGE: u32 = 100;

fn default_api_url() -> String {
    String::from(DEFAULT_API_URL)
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_per_page() -> u32 {
    MAX_PER_PAGE
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubConfig {
    /// Personal access token. Requests are unauthenticated when empty.
    #[serde(default)]
    pub token: String,

    /// Login whose activity is reported.
    #[serde(default)]
    pub user: String,

    /// REST API base URL (GitHub Enterprise: `https://ghe.example.com/api/v3`).
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Results requested per facet query. Only one page is ever fetched.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            user: String::new(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            per_page: default_per_page(),
        }
    }
}

impl GitHubConfig {
    /// A user to report on is known.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.user.trim().is_empty()
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Page size clamped to `1..=100`.
    #[must_use]
    pub fn effective_per_page(&self) -> u32 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }
}
