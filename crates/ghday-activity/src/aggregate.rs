//! Concurrent facet fan-out and report assembly.

use std::sync::Arc;

use ghday_core::{ActivityList, CoreError, DateWindow, Facet, Report};

use crate::error::FacetError;
use crate::facets;
use crate::fan_out;
use crate::provider::ActivityProvider;

/// A facet whose query failed and was reported as empty.
#[derive(Debug)]
pub struct FacetFailure {
    pub facet: Facet,
    pub error: FacetError,
}

/// A report together with the facets that failed while building it.
#[derive(Debug)]
pub struct FetchOutcome {
    pub report: Report,
    pub failures: Vec<FacetFailure>,
}

/// Runs every facet concurrently against one shared provider.
///
/// Once the date parses, a report is always produced. Facet failures never
/// surface as errors; the failed facet is simply empty.
pub struct Aggregator<P: ?Sized> {
    provider: Arc<P>,
}

impl<P: ?Sized> Clone for Aggregator<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<P> Aggregator<P>
where
    P: ActivityProvider + ?Sized + 'static,
{
    #[must_use]
    pub const fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    #[must_use]
    pub const fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    /// Report what `user` did on `date` (`DD-MM-YYYY`).
    ///
    /// Facet failures are logged at `warn` and reported as empty facets.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDateFormat`] if `date` does not parse. No
    /// query is issued in that case.
    pub async fn fetch(&self, user: &str, date: &str) -> Result<Report, CoreError> {
        let outcome = self.fetch_detailed(user, date).await?;
        for failure in &outcome.failures {
            tracing::warn!(
                facet = %failure.facet,
                error = %failure.error,
                "facet query failed; reporting it as empty"
            );
        }
        Ok(outcome.report)
    }

    /// Like [`fetch`](Self::fetch), but returns the facet failures instead of
    /// logging them.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDateFormat`] if `date` does not parse. No
    /// query is issued in that case.
    pub async fn fetch_detailed(&self, user: &str, date: &str) -> Result<FetchOutcome, CoreError> {
        let window = DateWindow::parse(date)?;
        Ok(self.fetch_window(user, window).await)
    }

    /// Run all facets for an already-validated window.
    pub async fn fetch_window(&self, user: &str, window: DateWindow) -> FetchOutcome {
        tracing::debug!(user, %window, "fetching activity");

        let jobs = Facet::ALL.map(|facet| {
            let provider = Arc::clone(&self.provider);
            let user = user.to_string();
            async move {
                facets::run(facet, provider.as_ref(), &user, &window)
                    .await
                    .map_err(FacetError::provider)
            }
        });
        let settled = fan_out::join_all(jobs).await;

        let mut lists: [ActivityList; 5] = Default::default();
        let mut failures = Vec::new();
        for (facet, result) in Facet::ALL.into_iter().zip(settled) {
            match result.map_err(FacetError::from).and_then(|r| r) {
                Ok(list) => {
                    tracing::debug!(%facet, count = list.len(), "facet settled");
                    lists[facet.index()] = list;
                }
                Err(error) => failures.push(FacetFailure { facet, error }),
            }
        }

        let report = Report::from_facets(|facet| std::mem::take(&mut lists[facet.index()]));
        FetchOutcome { report, failures }
    }
}
