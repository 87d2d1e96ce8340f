//! Domain model: value objects, ledger records and the archive port.

pub mod account;
pub mod ledger;
pub mod payment;
pub mod ports;
