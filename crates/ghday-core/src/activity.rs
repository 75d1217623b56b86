//! Activity values and the facets they are grouped under.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One unit of GitHub activity reduced to a title and a canonical link.
///
/// Activities carry no identity beyond their fields. Two identical activities
/// in one list are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Activity {
    pub title: String,
    pub url: String,
}

impl Activity {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Activities of one facet, in the order the provider returned them.
pub type ActivityList = Vec<Activity>;

// ---------------------------------------------------------------------------
// Facet
// ---------------------------------------------------------------------------

/// The independent activity categories that make up a [`Report`](crate::Report).
///
/// Declaration order is the report's field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    IssuesCreated,
    PrsReviewed,
    PrsMerged,
    CommitsCreated,
    Comments,
}

impl Facet {
    /// Every facet, in report order.
    pub const ALL: [Self; 5] = [
        Self::IssuesCreated,
        Self::PrsReviewed,
        Self::PrsMerged,
        Self::CommitsCreated,
        Self::Comments,
    ];

    /// Report key for this facet.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IssuesCreated => "issues_created",
            Self::PrsReviewed => "prs_reviewed",
            Self::PrsMerged => "prs_merged",
            Self::CommitsCreated => "commits_created",
            Self::Comments => "comments",
        }
    }

    /// Position of this facet in [`Facet::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
