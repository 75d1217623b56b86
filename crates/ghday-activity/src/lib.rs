//! # ghday-activity
//!
//! Answers "what did user U do on GitHub on date D?" by running five
//! independent facet queries concurrently against one shared provider and
//! assembling a [`Report`](ghday_core::Report).
//!
//! - [`ActivityProvider`] is the seam to the remote API (implemented for
//!   GitHub in `ghday-github`, and by stub providers in tests).
//! - [`facets`] holds the per-facet query semantics.
//! - [`Aggregator`] fans the facets out, isolates their failures, and joins
//!   the results.

pub mod facets;
pub mod fan_out;

mod aggregate;
mod error;
mod provider;

pub use aggregate::{Aggregator, FacetFailure, FetchOutcome};
pub use error::FacetError;
pub use provider::{
    ActivityProvider, CommitFilter, CommitRecord, IssueRecord, RepoRef, SearchQuery, SearchSort,
    SortOrder,
};
