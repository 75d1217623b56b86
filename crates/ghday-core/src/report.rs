//! The assembled per-day activity report.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityList, Facet};

/// What one user did on one day, grouped by facet.
///
/// Field order is the serialized key order. Every facet is always present;
/// a facet with no activity (or whose query failed) is an empty array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    issues_created: ActivityList,
    prs_reviewed: ActivityList,
    prs_merged: ActivityList,
    commits_created: ActivityList,
    comments: ActivityList,
}

impl Report {
    /// Build a report from one list per facet.
    #[must_use]
    pub const fn new(
        issues_created: ActivityList,
        prs_reviewed: ActivityList,
        prs_merged: ActivityList,
        commits_created: ActivityList,
        comments: ActivityList,
    ) -> Self {
        Self {
            issues_created,
            prs_reviewed,
            prs_merged,
            commits_created,
            comments,
        }
    }

    /// Build a report by asking `list_for` for each facet in report order.
    pub fn from_facets(mut list_for: impl FnMut(Facet) -> ActivityList) -> Self {
        Self {
            issues_created: list_for(Facet::IssuesCreated),
            prs_reviewed: list_for(Facet::PrsReviewed),
            prs_merged: list_for(Facet::PrsMerged),
            commits_created: list_for(Facet::CommitsCreated),
            comments: list_for(Facet::Comments),
        }
    }

    #[must_use]
    pub fn issues_created(&self) -> &[Activity] {
        &self.issues_created
    }

    #[must_use]
    pub fn prs_reviewed(&self) -> &[Activity] {
        &self.prs_reviewed
    }

    #[must_use]
    pub fn prs_merged(&self) -> &[Activity] {
        &self.prs_merged
    }

    #[must_use]
    pub fn commits_created(&self) -> &[Activity] {
        &self.commits_created
    }

    #[must_use]
    pub fn comments(&self) -> &[Activity] {
        &self.comments
    }

    /// Activities recorded under `facet`.
    #[must_use]
    pub fn facet(&self, facet: Facet) -> &[Activity] {
        match facet {
            Facet::IssuesCreated => &self.issues_created,
            Facet::PrsReviewed => &self.prs_reviewed,
            Facet::PrsMerged => &self.prs_merged,
            Facet::CommitsCreated => &self.commits_created,
            Facet::Comments => &self.comments,
        }
    }

    /// Total number of activities across all facets.
    #[must_use]
    pub fn total(&self) -> usize {
        Facet::ALL.iter().map(|f| self.facet(*f).len()).sum()
    }

    /// `true` when no facet has any activity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
