//! Outer adapters for moving ledger data in and out of the process.

pub mod flat;
