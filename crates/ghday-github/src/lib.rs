//! # ghday-github
//!
//! GitHub REST client backing ghday's activity queries.
//!
//! [`GitHubClient`] implements [`ActivityProvider`] over three endpoints:
//! - `GET /search/issues` for issues, reviewed/merged PRs and comments
//! - `GET /users/{user}/repos` for repository enumeration
//! - `GET /repos/{owner}/{repo}/commits` for per-repository commits
//!
//! Every call fetches a single page. Rate-limit responses are reported as
//! [`GitHubError::RateLimited`] and never retried.

mod commits;
mod error;
mod http;
mod repos;
mod search;

pub use error::GitHubError;

use async_trait::async_trait;
use ghday_activity::{
    ActivityProvider, CommitFilter, CommitRecord, IssueRecord, RepoRef, SearchQuery,
};
use ghday_config::GitHubConfig;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};

const USER_AGENT: &str = concat!("ghday/", env!("CARGO_PKG_VERSION"));
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";

// ── Client ─────────────────────────────────────────────────────────

/// Credential-bound HTTP client for the GitHub REST API.
///
/// Cheap to share: wrap it in an `Arc` and hand the same instance to every
/// concurrent facet query.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    per_page: u32,
}

impl GitHubClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &GitHubConfig) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            HeaderName::from_static(API_VERSION_HEADER),
            HeaderValue::from_static(API_VERSION),
        );

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let token = config.has_token().then(|| config.token.trim().to_string());
        if token.is_none() {
            tracing::debug!("no GitHub token configured; requests are unauthenticated");
        }

        Ok(Self {
            http,
            base_url: config.api_base().to_string(),
            token,
            per_page: config.effective_per_page(),
        })
    }

    /// API base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// GET request with auth applied.
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.http.get(url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl ActivityProvider for GitHubClient {
    type Error = GitHubError;

    async fn search_issues(&self, query: &SearchQuery) -> Result<Vec<IssueRecord>, GitHubError> {
        self.fetch_search(query).await
    }

    async fn list_repositories(&self, user: &str) -> Result<Vec<RepoRef>, GitHubError> {
        self.fetch_repositories(user).await
    }

    async fn list_commits(
        &self,
        repo: &RepoRef,
        filter: &CommitFilter,
    ) -> Result<Vec<CommitRecord>, GitHubError> {
        self.fetch_commits(repo, filter).await
    }
}
