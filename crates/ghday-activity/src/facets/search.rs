//! Facets backed by issue search.
//!
//! Reviewed, merged and commented facets filter on the provider's *update*
//! timestamp. An item touched on D for an unrelated reason still matches, and
//! an item commented on D but edited on D+1 does not.

use ghday_core::{Activity, ActivityList, DateWindow, Facet};

use crate::provider::{ActivityProvider, SearchQuery, SearchSort};

/// The search issued for a search-backed facet, or `None` for commits.
#[must_use]
pub fn search_query(facet: Facet, user: &str, window: &DateWindow) -> Option<SearchQuery> {
    match facet {
        Facet::IssuesCreated => Some(issues_created_query(user, window)),
        Facet::PrsReviewed => Some(prs_reviewed_query(user, window)),
        Facet::PrsMerged => Some(prs_merged_query(user, window)),
        Facet::Comments => Some(comments_query(user, window)),
        Facet::CommitsCreated => None,
    }
}

fn issues_created_query(user: &str, window: &DateWindow) -> SearchQuery {
    SearchQuery::newest_first(
        format!("author:{user} type:issue created:{}", window.query_date()),
        SearchSort::Created,
    )
}

fn prs_reviewed_query(user: &str, window: &DateWindow) -> SearchQuery {
    SearchQuery::newest_first(
        format!("reviewed-by:{user} type:pr updated:{}", window.query_date()),
        SearchSort::Updated,
    )
}

fn prs_merged_query(user: &str, window: &DateWindow) -> SearchQuery {
    SearchQuery::newest_first(
        format!("author:{user} type:pr is:merged updated:{}", window.query_date()),
        SearchSort::Updated,
    )
}

fn comments_query(user: &str, window: &DateWindow) -> SearchQuery {
    SearchQuery::newest_first(
        format!("commenter:{user} updated:{}", window.query_date()),
        SearchSort::Updated,
    )
}

async fn search_facet<P>(
    facet: Facet,
    provider: &P,
    query: SearchQuery,
) -> Result<ActivityList, P::Error>
where
    P: ActivityProvider + ?Sized,
{
    tracing::debug!(%facet, filter = %query.filter, "searching issues");

    let records = provider.search_issues(&query).await?;
    Ok(records
        .into_iter()
        .map(|r| Activity::new(r.title, r.html_url))
        .collect())
}

/// Issues authored by `user` and created on the window's date, newest first.
///
/// # Errors
///
/// Returns the provider's error if the search fails.
pub async fn issues_created<P>(
    provider: &P,
    user: &str,
    window: &DateWindow,
) -> Result<ActivityList, P::Error>
where
    P: ActivityProvider + ?Sized,
{
    search_facet(Facet::IssuesCreated, provider, issues_created_query(user, window)).await
}

/// Pull requests reviewed by `user` and updated on the window's date.
///
/// # Errors
///
/// Returns the provider's error if the search fails.
pub async fn prs_reviewed<P>(
    provider: &P,
    user: &str,
    window: &DateWindow,
) -> Result<ActivityList, P::Error>
where
    P: ActivityProvider + ?Sized,
{
    search_facet(Facet::PrsReviewed, provider, prs_reviewed_query(user, window)).await
}

/// Merged pull requests authored by `user` and updated on the window's date.
///
/// # Errors
///
/// Returns the provider's error if the search fails.
pub async fn prs_merged<P>(
    provider: &P,
    user: &str,
    window: &DateWindow,
) -> Result<ActivityList, P::Error>
where
    P: ActivityProvider + ?Sized,
{
    search_facet(Facet::PrsMerged, provider, prs_merged_query(user, window)).await
}

/// Issues and pull requests `user` commented on, updated on the window's date.
///
/// # Errors
///
/// Returns the provider's error if the search fails.
pub async fn comments<P>(
    provider: &P,
    user: &str,
    window: &DateWindow,
) -> Result<ActivityList, P::Error>
where
    P: ActivityProvider + ?Sized,
{
    search_facet(Facet::Comments, provider, comments_query(user, window)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{CommitFilter, CommitRecord, IssueRecord, RepoRef, SortOrder};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProvider {
        queries: Mutex<Vec<SearchQuery>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("unused")]
    struct Never;

    #[async_trait]
    impl ActivityProvider for RecordingProvider {
        type Error = Never;

        async fn search_issues(&self, query: &SearchQuery) -> Result<Vec<IssueRecord>, Never> {
            self.queries.lock().unwrap().push(query.clone());
            Ok(vec![
                IssueRecord {
                    title: "second".into(),
                    html_url: "https://github.com/o/r/issues/2".into(),
                    updated_at: None,
                    merged_at: None,
                },
                IssueRecord {
                    title: "first".into(),
                    html_url: "https://github.com/o/r/issues/1".into(),
                    updated_at: None,
                    merged_at: None,
                },
            ])
        }

        async fn list_repositories(&self, _user: &str) -> Result<Vec<RepoRef>, Never> {
            Ok(Vec::new())
        }

        async fn list_commits(
            &self,
            _repo: &RepoRef,
            _filter: &CommitFilter,
        ) -> Result<Vec<CommitRecord>, Never> {
            Ok(Vec::new())
        }
    }

    fn window() -> DateWindow {
        DateWindow::parse("15-03-2024").unwrap()
    }

    #[test]
    fn filters_match_facet_semantics() {
        let w = window();
        let filter = |facet| search_query(facet, "alice", &w).unwrap().filter;
        assert_eq!(
            filter(Facet::IssuesCreated),
            "author:alice type:issue created:2024-03-15"
        );
        assert_eq!(
            filter(Facet::PrsReviewed),
            "reviewed-by:alice type:pr updated:2024-03-15"
        );
        assert_eq!(
            filter(Facet::PrsMerged),
            "author:alice type:pr is:merged updated:2024-03-15"
        );
        assert_eq!(filter(Facet::Comments), "commenter:alice updated:2024-03-15");
    }

    #[test]
    fn only_issues_sort_by_creation() {
        let w = window();
        for facet in [Facet::IssuesCreated, Facet::PrsReviewed, Facet::PrsMerged, Facet::Comments] {
            let query = search_query(facet, "alice", &w).unwrap();
            let expected = if facet == Facet::IssuesCreated {
                SearchSort::Created
            } else {
                SearchSort::Updated
            };
            assert_eq!(query.sort, expected, "{facet}");
            assert_eq!(query.order, SortOrder::Desc, "{facet}");
        }
    }

    #[test]
    fn commits_have_no_search_query() {
        assert!(search_query(Facet::CommitsCreated, "alice", &window()).is_none());
    }

    #[tokio::test]
    async fn search_results_keep_provider_order() {
        let provider = RecordingProvider::default();
        let activities = issues_created(&provider, "alice", &window()).await.unwrap();

        assert_eq!(
            activities,
            vec![
                Activity::new("second", "https://github.com/o/r/issues/2"),
                Activity::new("first", "https://github.com/o/r/issues/1"),
            ]
        );
        let queries = provider.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].sort, SearchSort::Created);
    }

    #[tokio::test]
    async fn every_search_facet_reaches_the_provider() {
        let provider = RecordingProvider::default();
        let w = window();
        for list in [
            issues_created(&provider, "alice", &w).await.unwrap(),
            prs_reviewed(&provider, "alice", &w).await.unwrap(),
            prs_merged(&provider, "alice", &w).await.unwrap(),
            comments(&provider, "alice", &w).await.unwrap(),
        ] {
            assert_eq!(list.len(), 2);
        }

        let expected: Vec<SearchQuery> = [
            Facet::IssuesCreated,
            Facet::PrsReviewed,
            Facet::PrsMerged,
            Facet::Comments,
        ]
        .into_iter()
        .filter_map(|facet| search_query(facet, "alice", &w))
        .collect();
        assert_eq!(*provider.queries.lock().unwrap(), expected);
    }
}
