//! Application layer orchestrating ledger mutations and aggregations.
//!
//! [`service::WalletService`] owns the ledger and is its only writer. Parallel
//! aggregations borrow it immutably and read from payment snapshots.

pub mod service;
