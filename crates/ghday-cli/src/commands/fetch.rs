use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, anyhow};
use ghday_activity::{ActivityProvider, Aggregator};
use ghday_config::GhdayConfig;
use ghday_core::Report;
use ghday_github::GitHubClient;

use crate::cli::{FetchArgs, GlobalFlags};
use crate::output::output;

/// Handle `ghday fetch`.
pub async fn handle(
    args: &FetchArgs,
    flags: &GlobalFlags,
    config: &GhdayConfig,
) -> anyhow::Result<()> {
    let user = resolve_user(args.user.as_deref(), config)?;
    let client = GitHubClient::new(&config.github).context("failed to build GitHub client")?;
    let aggregator = Aggregator::new(Arc::new(client));

    let report = build_report(&aggregator, &user, &args.date, config.general.deadline()).await?;
    tracing::info!(user = %user, date = %args.date, total = report.total(), "report ready");
    output(&report, flags.format)
}

/// `--user` wins over `github.user`.
fn resolve_user(flag: Option<&str>, config: &GhdayConfig) -> anyhow::Result<String> {
    if let Some(user) = flag.map(str::trim).filter(|u| !u.is_empty()) {
        return Ok(user.to_string());
    }
    config
        .require_user()
        .map(str::to_string)
        .context("no GitHub user given; pass --user or set GITHUB_USER")
}

/// Run the aggregator, optionally bounded by an overall deadline.
pub async fn build_report<P>(
    aggregator: &Aggregator<P>,
    user: &str,
    date: &str,
    deadline: Option<Duration>,
) -> anyhow::Result<Report>
where
    P: ActivityProvider + ?Sized + 'static,
{
    let fetch = aggregator.fetch(user, date);
    let report = match deadline {
        Some(limit) => tokio::time::timeout(limit, fetch)
            .await
            .map_err(|_| anyhow!("report not ready within {}ms", limit.as_millis()))??,
        None => fetch.await?,
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ghday_activity::{CommitFilter, CommitRecord, IssueRecord, RepoRef, SearchQuery};
    use pretty_assertions::assert_eq;

    #[derive(Debug, thiserror::Error)]
    #[error("stub")]
    struct StubError;

    struct SlowProvider(Duration);

    #[async_trait]
    impl ActivityProvider for SlowProvider {
        type Error = StubError;

        async fn search_issues(&self, query: &SearchQuery) -> Result<Vec<IssueRecord>, StubError> {
            tokio::time::sleep(self.0).await;
            Ok(vec![IssueRecord {
                title: query.filter.clone(),
                html_url: "https://github.com/o/r/issues/1".into(),
                updated_at: None,
                merged_at: None,
            }])
        }

        async fn list_repositories(&self, _user: &str) -> Result<Vec<RepoRef>, StubError> {
            Err(StubError)
        }

        async fn list_commits(
            &self,
            _repo: &RepoRef,
            _filter: &CommitFilter,
        ) -> Result<Vec<CommitRecord>, StubError> {
            Ok(Vec::new())
        }
    }

    fn aggregator(latency: Duration) -> Aggregator<SlowProvider> {
        Aggregator::new(Arc::new(SlowProvider(latency)))
    }

    #[test]
    fn flag_user_wins_over_config() {
        let mut config = GhdayConfig::default();
        config.github.user = "from-config".into();
        assert_eq!(resolve_user(Some(" alice "), &config).unwrap(), "alice");
        assert_eq!(resolve_user(None, &config).unwrap(), "from-config");
        assert_eq!(resolve_user(Some(""), &config).unwrap(), "from-config");
    }

    #[test]
    fn missing_user_is_an_error() {
        let err = resolve_user(None, &GhdayConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--user"));
    }

    #[tokio::test]
    async fn report_without_deadline() {
        let report = build_report(&aggregator(Duration::ZERO), "alice", "15-03-2024", None)
            .await
            .unwrap();
        assert_eq!(report.issues_created().len(), 1);
        assert!(report.commits_created().is_empty());
    }

    #[tokio::test]
    async fn invalid_date_is_reported() {
        let err = build_report(&aggregator(Duration::ZERO), "alice", "2024-03-15", None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("invalid date format"));
    }

    #[tokio::test]
    async fn deadline_bounds_the_whole_report() {
        let err = build_report(
            &aggregator(Duration::from_secs(5)),
            "alice",
            "15-03-2024",
            Some(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("not ready within 50ms"));
    }
}
