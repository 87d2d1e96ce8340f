use super::record_writer::encode;
use super::{RecordTerminator, create_dir, write_file};
use crate::domain::payment::Payment;
use crate::error::{Result, WalletError};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes payments to `dir` as newline-terminated records.
///
/// Nothing is written for an empty slice. Up to `records` payments go to
/// `payments.dump`; beyond that they are split into `payments1.dump`,
/// `payments2.dump`, … with at most `records` lines each. Files written before
/// a failure are left in place.
pub async fn history_to_files(payments: &[Payment], dir: &Path, records: usize) -> Result<()> {
    if records == 0 {
        return Err(WalletError::RecordLimitMustBePositive);
    }
    if payments.is_empty() {
        return Ok(());
    }

    create_dir(dir).await?;

    let files = if payments.len() <= records {
        vec![dir.join("payments.dump")]
    } else {
        history_file_names(dir, payments.len(), records)
    };
    for (path, chunk) in files.iter().zip(payments.chunks(records)) {
        let bytes = encode(chunk, RecordTerminator::Line)?;
        write_file(path, &bytes).await?;
    }

    info!(
        dir = %dir.display(),
        payments = payments.len(),
        files = files.len(),
        "exported payment history"
    );
    Ok(())
}

fn history_file_names(dir: &Path, len: usize, records: usize) -> Vec<PathBuf> {
    (1..=len.div_ceil(records))
        .map(|n| dir.join(format!("payments{n}.dump")))
        .collect()
}
