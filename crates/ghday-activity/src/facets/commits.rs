//! Commits authored by the user across their repositories.

use ghday_core::{Activity, ActivityList, DateWindow};

use crate::provider::{ActivityProvider, CommitFilter};

/// Commits authored by `user` inside `window`, across every repository the
/// user owns.
///
/// Repositories are probed one after another in enumeration order and their
/// commit lists concatenated. A repository whose commit listing fails is
/// skipped; the rest are still probed.
///
/// # Errors
///
/// Returns the provider's error only if the repository listing fails.
pub async fn commits_created<P>(
    provider: &P,
    user: &str,
    window: &DateWindow,
) -> Result<ActivityList, P::Error>
where
    P: ActivityProvider + ?Sized,
{
    let repos = provider.list_repositories(user).await?;
    let filter = CommitFilter::within(user, window);
    tracing::debug!(repos = repos.len(), %window, "probing repositories for commits");

    let mut activities = Vec::new();
    for repo in &repos {
        match provider.list_commits(repo, &filter).await {
            Ok(commits) => {
                activities.extend(
                    commits
                        .into_iter()
                        .map(|c| Activity::new(c.message, c.html_url)),
                );
            }
            Err(error) => {
                tracing::warn!(%repo, %error, "commit listing failed; skipping repository");
            }
        }
    }
    Ok(activities)
}
