//! The provider seam: what the facets need from a GitHub-compatible API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

use ghday_core::DateWindow;

/// Sort key for issue search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSort {
    Created,
    Updated,
}

impl SearchSort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A user-scoped issue/PR search, e.g. `author:alice type:issue created:2024-03-15`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub filter: String,
    pub sort: SearchSort,
    pub order: SortOrder,
}

impl SearchQuery {
    /// Descending search on `sort`.
    #[must_use]
    pub fn newest_first(filter: impl Into<String>, sort: SearchSort) -> Self {
        Self {
            filter: filter.into(),
            sort,
            order: SortOrder::Desc,
        }
    }
}

/// An issue or pull request returned by search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    pub title: String,
    pub html_url: String,
    pub updated_at: Option<DateTime<Utc>>,
    /// Set only for merged pull requests.
    pub merged_at: Option<DateTime<Utc>>,
}

/// A repository to probe for commits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Commits by `author` with a commit timestamp in `[since, until)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitFilter {
    pub author: String,
    pub since: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

impl CommitFilter {
    #[must_use]
    pub fn within(author: impl Into<String>, window: &DateWindow) -> Self {
        Self {
            author: author.into(),
            since: window.start(),
            until: window.end(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub message: String,
    pub html_url: String,
}

/// Read-only access to a GitHub-compatible API.
///
/// One handle is shared by every concurrent facet query, so implementations
/// must be safe to call from several tasks at once.
#[async_trait]
pub trait ActivityProvider: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search issues and pull requests. Returns a single page of results in
    /// the order requested by `query`.
    async fn search_issues(&self, query: &SearchQuery) -> Result<Vec<IssueRecord>, Self::Error>;

    /// List the repositories of `user`, in provider order.
    async fn list_repositories(&self, user: &str) -> Result<Vec<RepoRef>, Self::Error>;

    /// List commits of `repo` matching `filter`, in provider order.
    async fn list_commits(
        &self,
        repo: &RepoRef,
        filter: &CommitFilter,
    ) -> Result<Vec<CommitRecord>, Self::Error>;
}
