//! Parallel aggregation over a payment snapshot.
//!
//! Every operation splits the snapshot with [`partition`], runs one worker per
//! range on tokio's blocking pool and merges the partial results: summed
//! under a lock, streamed in completion order, or concatenated in partition
//! order. The snapshot is read-only for the whole call.

pub mod filter;
pub mod partition;
pub mod progress;
pub mod sum;
mod worker;

pub use filter::filter_payments;
pub use partition::{Partition, partition};
pub use progress::{Progress, ProgressStream, sum_payments_with_progress};
pub use sum::sum_payments;
