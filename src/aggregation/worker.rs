use super::partition::Partition;
use crate::domain::account::Money;
use crate::domain::ledger::PaymentSnapshot;
use crate::domain::payment::Payment;
use std::sync::Arc;
use tokio::task::{JoinError, JoinSet};
use tracing::debug;

/// Output of one worker, tagged with the partition it covered.
pub(crate) type Tagged<T> = (usize, T);

/// Spawns one blocking task per partition, each running `task` over its slice.
///
/// Tasks are fresh per call; nothing is pooled across aggregations. The
/// snapshot is shared read-only between all of them.
pub(crate) fn spawn_workers<T, F>(
    snapshot: &PaymentSnapshot,
    parts: &[Partition],
    task: F,
) -> JoinSet<Tagged<T>>
where
    T: Send + 'static,
    F: Fn(&[Payment]) -> T + Send + Sync + 'static,
{
    let task = Arc::new(task);
    let mut set = JoinSet::new();

    for part in parts.iter().copied() {
        let payments = Arc::clone(snapshot);
        let task = Arc::clone(&task);
        set.spawn_blocking(move || (part.index, task(&payments[part.range()])));
    }

    debug!(workers = parts.len(), payments = snapshot.len(), "spawned workers");
    set
}

/// Unwraps a joined worker, re-raising its panic in the caller.
pub(crate) fn join_worker<T>(joined: Result<T, JoinError>) -> T {
    match joined {
        Ok(value) => value,
        Err(err) => match err.try_into_panic() {
            Ok(payload) => std::panic::resume_unwind(payload),
            // Only reachable when the runtime shuts down underneath us.
            Err(err) => panic!("aggregation worker did not complete: {err}"),
        },
    }
}

pub(crate) fn local_sum(payments: &[Payment]) -> Money {
    payments.iter().map(|payment| payment.amount).sum()
}
