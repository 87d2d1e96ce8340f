use crate::domain::ledger::LedgerSnapshot;
use crate::domain::ports::LedgerArchive;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory archive.
///
/// Clones share the same storage, so a snapshot saved through one handle can
/// be loaded through another. Useful for tests and for moving state between
/// services without touching the filesystem.
#[derive(Default, Clone)]
pub struct InMemoryArchive {
    snapshot: Arc<RwLock<LedgerSnapshot>>,
}

impl InMemoryArchive {
    /// Creates a new, empty in-memory archive.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerArchive for InMemoryArchive {
    async fn save(&self, snapshot: &LedgerSnapshot) -> Result<()> {
        let mut stored = self.snapshot.write().await;
        *stored = snapshot.clone();
        Ok(())
    }

    async fn load(&self) -> Result<LedgerSnapshot> {
        let stored = self.snapshot.read().await;
        Ok(stored.clone())
    }
}
