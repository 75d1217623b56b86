//! Launch N independent tasks and wait for all N.

use std::collections::HashMap;
use std::future::Future;

use tokio::task::{JoinError, JoinSet};

/// Spawn every job as its own task and wait until all of them settle.
///
/// Results come back in job order regardless of completion order. A job that
/// panics yields `Err(JoinError)` in its own slot and does not affect the
/// others. Dropping the returned future aborts every job still running.
pub async fn join_all<I, Fut>(jobs: I) -> Vec<Result<Fut::Output, JoinError>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future + Send + 'static,
    Fut::Output: Send + 'static,
{
    let mut set = JoinSet::new();
    let slot_of: HashMap<_, _> = jobs
        .into_iter()
        .enumerate()
        .map(|(idx, job)| (set.spawn(job).id(), idx))
        .collect();

    let mut slots: Vec<Option<Result<Fut::Output, JoinError>>> =
        std::iter::repeat_with(|| None).take(slot_of.len()).collect();
    while let Some(settled) = set.join_next_with_id().await {
        let (id, result) = match settled {
            Ok((id, output)) => (id, Ok(output)),
            Err(error) => (error.id(), Err(error)),
        };
        if let Some(&idx) = slot_of.get(&id) {
            slots[idx] = Some(result);
        }
    }
    slots.into_iter().flatten().collect()
}
