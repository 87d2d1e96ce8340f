use super::partition::partition;
use super::worker::{join_worker, spawn_workers};
use crate::domain::ledger::PaymentSnapshot;
use crate::domain::payment::Payment;

/// Collects the payments matching `predicate`, scanning partitions in parallel.
///
/// Workers fill local buffers that are concatenated by partition index, not
/// by completion order, so the result keeps the ledger order.
pub async fn filter_payments<F>(
    snapshot: PaymentSnapshot,
    workers: usize,
    predicate: F,
) -> Vec<Payment>
where
    F: Fn(&Payment) -> bool + Send + Sync + 'static,
{
    let parts = partition(snapshot.len(), workers);
    let mut set = spawn_workers(&snapshot, &parts, move |payments| {
        payments
            .iter()
            .filter(|&payment| predicate(payment))
            .cloned()
            .collect::<Vec<Payment>>()
    });

    let mut buffers: Vec<Vec<Payment>> = vec![Vec::new(); parts.len()];
    while let Some(joined) = set.join_next().await {
        let (index, found) = join_worker(joined);
        buffers[index] = found;
    }

    buffers.into_iter().flatten().collect()
}
