//! Per-repository commits (`GET /repos/{owner}/{repo}/commits`).
//!
//! GitHub answers `409 Conflict` for an empty repository. That surfaces as a
//! [`GitHubError::Api`] and the commits facet skips the repository.

use chrono::SecondsFormat;
use ghday_activity::{CommitFilter, CommitRecord, RepoRef};

use crate::{
    GitHubClient,
    error::GitHubError,
    http::{check_response, decode_json},
};

#[derive(serde::Deserialize)]
struct CommitItem {
    html_url: String,
    commit: CommitDetail,
}

#[derive(serde::Deserialize)]
struct CommitDetail {
    message: String,
}

pub(crate) fn commits_url(
    base: &str,
    repo: &RepoRef,
    filter: &CommitFilter,
    per_page: u32,
) -> String {
    format!(
        "{base}/repos/{}/{}/commits?author={}&since={}&until={}&per_page={per_page}",
        urlencoding::encode(&repo.owner),
        urlencoding::encode(&repo.name),
        urlencoding::encode(&filter.author),
        urlencoding::encode(&filter.since.to_rfc3339_opts(SecondsFormat::Secs, true)),
        urlencoding::encode(&filter.until.to_rfc3339_opts(SecondsFormat::Secs, true)),
    )
}

impl GitHubClient {
    /// List the first page of commits in `repo` matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the HTTP request fails, GitHub returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn fetch_commits(
        &self,
        repo: &RepoRef,
        filter: &CommitFilter,
    ) -> Result<Vec<CommitRecord>, GitHubError> {
        let url = commits_url(&self.base_url, repo, filter, self.per_page);
        let resp = check_response(self.get(&url).send().await?).await?;

        let commits: Vec<CommitItem> = decode_json(resp).await?;
        Ok(commits
            .into_iter()
            .map(|c| CommitRecord {
                message: c.commit.message,
                html_url: c.html_url,
            })
            .collect())
    }
}
