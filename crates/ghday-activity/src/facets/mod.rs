//! Per-facet query semantics.
//!
//! Each facet is an async function `(provider, user, window) -> Result<ActivityList, _>`.
//! Four facets are issue searches that differ only in their filter and sort;
//! commits enumerate the user's repositories and probe each one.
//!
//! | Facet | Filter | Sort |
//! |---|---|---|
//! | issues created | `author:U type:issue created:D` | created |
//! | PRs reviewed | `reviewed-by:U type:pr updated:D` | updated |
//! | PRs merged | `author:U type:pr is:merged updated:D` | updated |
//! | comments | `commenter:U updated:D` | updated |
//! | commits | per repository, `author=U since=start until=end` | provider order |

mod commits;
mod search;

pub use commits::commits_created;
pub use search::{comments, issues_created, prs_merged, prs_reviewed, search_query};

use ghday_core::{ActivityList, DateWindow, Facet};

use crate::provider::ActivityProvider;

/// Run the query for `facet`.
///
/// # Errors
///
/// Returns the provider's error if the facet's query fails. For commits this
/// only happens when the repository listing itself fails.
pub async fn run<P>(
    facet: Facet,
    provider: &P,
    user: &str,
    window: &DateWindow,
) -> Result<ActivityList, P::Error>
where
    P: ActivityProvider + ?Sized,
{
    match facet {
        Facet::IssuesCreated => issues_created(provider, user, window).await,
        Facet::PrsReviewed => prs_reviewed(provider, user, window).await,
        Facet::PrsMerged => prs_merged(provider, user, window).await,
        Facet::CommitsCreated => commits_created(provider, user, window).await,
        Facet::Comments => comments(provider, user, window).await,
    }
}
