//! Adapters implementing the [`LedgerArchive`](crate::domain::ports::LedgerArchive) port.

pub mod flat_file;
pub mod in_memory;
