use super::partition::partition;
use super::worker::local_sum;
use crate::domain::account::Money;
use crate::domain::ledger::PaymentSnapshot;
use futures::stream::BoxStream;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;

/// The partial sum of one partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Index of the partition this result covers.
    pub part: usize,
    pub result: Money,
}

/// Partial results in the order the workers finish.
pub type ProgressStream = BoxStream<'static, Progress>;

/// Sums the payments in parallel and streams each worker's partial result.
///
/// The stream yields exactly one [`Progress`] per partition, in completion
/// order, and ends once every worker has reported. Summing the yielded
/// results gives the total. Workers hand results over through a
/// single-slot channel, so a slow consumer holds finished workers back.
/// Dropping the stream early lets the remaining workers exit without
/// reporting.
///
/// # Panics
///
/// Must be called from within a tokio runtime.
pub fn sum_payments_with_progress(snapshot: PaymentSnapshot, workers: usize) -> ProgressStream {
    let parts = partition(snapshot.len(), workers);
    let (tx, rx) = mpsc::channel(1);

    for part in parts {
        let tx = tx.clone();
        let payments = Arc::clone(&snapshot);
        tokio::task::spawn_blocking(move || {
            let progress = Progress {
                part: part.index,
                result: local_sum(&payments[part.range()]),
            };
            if tx.blocking_send(progress).is_err() {
                debug!(part = part.index, "progress stream dropped before delivery");
            }
        });
    }

    // The stream ends when the last worker drops its sender.
    drop(tx);
    Box::pin(ReceiverStream::new(rx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::Payment;
    use futures::StreamExt;
    use std::collections::HashSet;

    fn snapshot(amounts: impl IntoIterator<Item = i64>) -> PaymentSnapshot {
        Arc::new(
            amounts
                .into_iter()
                .map(|amount| Payment::new(1, Money::new(amount), "auto".to_string()))
                .collect(),
        )
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_one_result_per_partition() {
        let results: Vec<Progress> = sum_payments_with_progress(snapshot(1..=7), 3)
            .collect()
            .await;

        assert_eq!(results.len(), 3);
        let parts: HashSet<usize> = results.iter().map(|p| p.part).collect();
        assert_eq!(parts, HashSet::from([0, 1, 2]));

        let mut by_part = results.clone();
        by_part.sort_by_key(|p| p.part);
        let sums: Vec<i64> = by_part.iter().map(|p| p.result.value()).collect();
        assert_eq!(sums, vec![3, 7, 18]);

        let total: Money = results.iter().map(|p| p.result).sum();
        assert_eq!(total, Money::new(28));
    }

    #[tokio::test]
    async fn test_empty_snapshot_still_reports_every_partition() {
        let results: Vec<Progress> = sum_payments_with_progress(snapshot([]), 4)
            .collect()
            .await;

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|p| p.result == Money::ZERO));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_dropping_stream_early_does_not_hang() {
        let mut stream = sum_payments_with_progress(snapshot(1..=1_000), 16);
        let first = stream.next().await;
        assert!(first.is_some());
        drop(stream);
    }
}
