use super::partition::partition;
use super::worker::{join_worker, local_sum, spawn_workers};
use crate::domain::account::Money;
use crate::domain::ledger::PaymentSnapshot;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Sums every payment amount with one worker per partition.
///
/// Each worker reduces its slice locally and then adds the partial to a
/// shared accumulator under a lock. The call returns once every worker has
/// finished. An empty snapshot sums to zero.
pub async fn sum_payments(snapshot: PaymentSnapshot, workers: usize) -> Money {
    let parts = partition(snapshot.len(), workers);
    let total = Arc::new(Mutex::new(Money::ZERO));

    let accumulator = Arc::clone(&total);
    let mut set = spawn_workers(&snapshot, &parts, move |payments| {
        let partial = local_sum(payments);
        *accumulator.blocking_lock() += partial;
    });

    while let Some(joined) = set.join_next().await {
        let (index, ()) = join_worker(joined);
        debug!(part = index, "worker merged partial sum");
    }

    *total.lock().await
}
