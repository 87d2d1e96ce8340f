use super::record_writer::encode;
use super::{RecordTerminator, decode, read_file, write_file};
use crate::domain::account::Account;
use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Writes the accounts to a single file as `id;phone;balance|` records.
pub async fn export_accounts(path: &Path, accounts: &[Account]) -> Result<()> {
    let bytes = encode(accounts, RecordTerminator::Record)?;
    write_file(path, &bytes).await?;
    info!(path = %path.display(), accounts = accounts.len(), "exported accounts");
    Ok(())
}

/// Reads the accounts written by [`export_accounts`].
pub async fn import_accounts(path: &Path) -> Result<Vec<Account>> {
    let bytes = read_file(path).await?;
    let accounts: Vec<Account> = decode(&bytes, RecordTerminator::Record, path)?;
    info!(path = %path.display(), accounts = accounts.len(), "imported accounts");
    Ok(accounts)
}
