use super::ledger::LedgerSnapshot;
use crate::error::Result;
use async_trait::async_trait;

/// Storage for a full ledger snapshot.
#[async_trait]
pub trait LedgerArchive: Send + Sync {
    /// Persists every collection of the snapshot.
    async fn save(&self, snapshot: &LedgerSnapshot) -> Result<()>;
    /// Loads whatever the archive holds. Absent collections come back empty.
    async fn load(&self) -> Result<LedgerSnapshot>;
}

pub type LedgerArchiveBox = Box<dyn LedgerArchive>;
