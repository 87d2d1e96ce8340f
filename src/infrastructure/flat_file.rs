use crate::domain::ledger::LedgerSnapshot;
use crate::domain::ports::LedgerArchive;
use crate::error::Result;
use crate::interfaces::flat::record_writer::encode;
use crate::interfaces::flat::{RecordTerminator, create_dir, decode, read_file, write_file};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const ACCOUNTS_FILE: &str = "accounts.dump";
pub const PAYMENTS_FILE: &str = "payments.dump";
pub const FAVORITES_FILE: &str = "favorites.dump";

/// A directory of flat dump files, one per collection.
///
/// Saving writes only the collections that hold records. Loading skips files
/// that do not exist, so a directory with just `accounts.dump` is valid.
#[derive(Debug, Clone)]
pub struct FlatFileArchive {
    dir: PathBuf,
}

impl FlatFileArchive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

async fn save_collection<T: Serialize>(path: PathBuf, records: &[T]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    let bytes = encode(records, RecordTerminator::Record)?;
    write_file(&path, &bytes).await
}

async fn load_collection<T: DeserializeOwned>(path: PathBuf) -> Result<Vec<T>> {
    if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        debug!(path = %path.display(), "dump file absent, skipping");
        return Ok(Vec::new());
    }
    let bytes = read_file(&path).await?;
    decode(&bytes, RecordTerminator::Record, &path)
}

#[async_trait]
impl LedgerArchive for FlatFileArchive {
    async fn save(&self, snapshot: &LedgerSnapshot) -> Result<()> {
        create_dir(&self.dir).await?;
        save_collection(self.dir.join(ACCOUNTS_FILE), &snapshot.accounts).await?;
        save_collection(self.dir.join(PAYMENTS_FILE), &snapshot.payments).await?;
        save_collection(self.dir.join(FAVORITES_FILE), &snapshot.favorites).await?;

        info!(
            dir = %self.dir.display(),
            accounts = snapshot.accounts.len(),
            payments = snapshot.payments.len(),
            favorites = snapshot.favorites.len(),
            "exported ledger"
        );
        Ok(())
    }

    async fn load(&self) -> Result<LedgerSnapshot> {
        let snapshot = LedgerSnapshot {
            accounts: load_collection(self.dir.join(ACCOUNTS_FILE)).await?,
            payments: load_collection(self.dir.join(PAYMENTS_FILE)).await?,
            favorites: load_collection(self.dir.join(FAVORITES_FILE)).await?,
        };

        info!(
            dir = %self.dir.display(),
            accounts = snapshot.accounts.len(),
            payments = snapshot.payments.len(),
            favorites = snapshot.favorites.len(),
            "imported ledger"
        );
        Ok(snapshot)
    }
}
