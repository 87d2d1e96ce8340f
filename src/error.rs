use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("amount must be greater than 0")]
    AmountMustBePositive,
    #[error("account not found")]
    AccountNotFound,
    #[error("payment not found")]
    PaymentNotFound,
    #[error("favorite not found")]
    FavoriteNotFound,
    #[error("phone already registered")]
    PhoneRegistered,
    #[error("not enough balance")]
    NotEnoughBalance,
    #[error("balance would overflow")]
    BalanceOverflow,
    #[error("record limit must be greater than 0")]
    RecordLimitMustBePositive,
    #[error("file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record in {}: {source}", path.display())]
    MalformedRecord {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, WalletError>;
