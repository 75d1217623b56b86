//! Issue and pull request search (`GET /search/issues`).

use chrono::{DateTime, Utc};
use ghday_activity::{IssueRecord, SearchQuery};

use crate::{
    GitHubClient,
    error::GitHubError,
    http::{check_response, decode_json},
};

#[derive(serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    incomplete_results: bool,
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(serde::Deserialize)]
struct SearchItem {
    title: String,
    html_url: String,
    updated_at: Option<DateTime<Utc>>,
    pull_request: Option<PullRequestLinks>,
}

#[derive(serde::Deserialize)]
struct PullRequestLinks {
    merged_at: Option<DateTime<Utc>>,
}

impl From<SearchItem> for IssueRecord {
    fn from(item: SearchItem) -> Self {
        Self {
            title: item.title,
            html_url: item.html_url,
            updated_at: item.updated_at,
            merged_at: item.pull_request.and_then(|pr| pr.merged_at),
        }
    }
}

pub(crate) fn search_url(base: &str, query: &SearchQuery, per_page: u32) -> String {
    format!(
        "{base}/search/issues?q={}&sort={}&order={}&per_page={per_page}",
        urlencoding::encode(&query.filter),
        query.sort.as_str(),
        query.order.as_str(),
    )
}

impl GitHubClient {
    /// Run an issue search and return the first page of results.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the HTTP request fails, GitHub returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn fetch_search(&self, query: &SearchQuery) -> Result<Vec<IssueRecord>, GitHubError> {
        let url = search_url(&self.base_url, query, self.per_page);
        let resp = check_response(self.get(&url).send().await?).await?;

        let data: SearchResponse = decode_json(resp).await?;
        if data.incomplete_results {
            tracing::debug!(filter = %query.filter, "search results are incomplete");
        }
        Ok(data.items.into_iter().map(IssueRecord::from).collect())
    }
}
