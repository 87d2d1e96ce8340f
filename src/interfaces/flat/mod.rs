//! Delimited flat-record format.
//!
//! Fields are separated by `;`. Snapshot files end every record with `|`,
//! history files with a newline. Values are never quoted or escaped, so a
//! field containing either separator cannot be read back.

pub mod accounts;
pub mod history;
pub mod record_reader;
pub mod record_writer;

use crate::error::{Result, WalletError};
use record_reader::RecordReader;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::error;

pub const FIELD_SEPARATOR: u8 = b';';
pub const RECORD_SEPARATOR: u8 = b'|';

/// What follows every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordTerminator {
    /// `|`, used by snapshot exports.
    Record,
    /// `\n`, used by history files.
    Line,
}

impl From<RecordTerminator> for csv::Terminator {
    fn from(value: RecordTerminator) -> Self {
        match value {
            RecordTerminator::Record => csv::Terminator::Any(RECORD_SEPARATOR),
            RecordTerminator::Line => csv::Terminator::Any(b'\n'),
        }
    }
}

/// Decodes every record in `bytes`, attributing failures to `path`.
///
/// Line breaks after the last record are ignored. Field contents, including
/// surrounding spaces, are kept as written.
pub fn decode<T: DeserializeOwned>(
    bytes: &[u8],
    terminator: RecordTerminator,
    path: &Path,
) -> Result<Vec<T>> {
    RecordReader::new(trim_line_breaks(bytes), terminator)
        .records()
        .collect::<Result<Vec<T>>>()
        .map_err(|err| match err {
            WalletError::Csv(source) => WalletError::MalformedRecord {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
}

fn trim_line_breaks(mut bytes: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n' | b'\r'] = bytes {
        bytes = rest;
    }
    bytes
}

pub async fn read_file(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|source| file_error("read", path, source))
}

pub async fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| file_error("write", path, source))
}

pub async fn create_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| file_error("create directory", path, source))
}

fn file_error(action: &str, path: &Path, source: std::io::Error) -> WalletError {
    error!(path = %path.display(), error = %source, "failed to {action}");
    WalletError::FileNotFound {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Account;
    use crate::domain::payment::{Favorite, Payment};

    #[test]
    fn test_decode_ignores_trailing_newline() {
        let accounts: Vec<Account> = decode(
            b"1;+992000000001;5|\n",
            RecordTerminator::Record,
            Path::new("accounts.dump"),
        )
        .unwrap();
        assert_eq!(accounts.len(), 1);
    }

    #[test]
    fn test_decode_keeps_trailing_spaces_of_last_field() {
        let payments: Vec<Payment> = decode(
            b"a;1;10;auto;INPROGRESS\nb;1;20;food ;FAIL\n",
            RecordTerminator::Line,
            Path::new("payments.dump"),
        )
        .unwrap();
        assert_eq!(payments[1].category, "food ");

        let favorites: Vec<Favorite> = decode(
            b"f;1;lunch;10;food \n",
            RecordTerminator::Line,
            Path::new("favorites.dump"),
        )
        .unwrap();
        assert_eq!(favorites[0].category, "food ");
    }

    #[test]
    fn test_decode_reports_path() {
        let result: Result<Vec<Account>> = decode(
            b"1;+992000000001|",
            RecordTerminator::Record,
            Path::new("accounts.dump"),
        );
        match result {
            Err(WalletError::MalformedRecord { path, .. }) => {
                assert_eq!(path, Path::new("accounts.dump"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_file(&dir.path().join("missing.dump")).await;
        assert!(matches!(result, Err(WalletError::FileNotFound { .. })));
    }
}
