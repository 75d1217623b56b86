//! Per-facet failure types.

use thiserror::Error;

/// Why a facet contributed an empty list to the report.
#[derive(Debug, Error)]
pub enum FacetError {
    /// The provider returned an error for this facet's query.
    #[error("provider error: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The facet task panicked or was cancelled before completing.
    #[error("facet task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl FacetError {
    pub(crate) fn provider<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Provider(Box::new(error))
    }
}
