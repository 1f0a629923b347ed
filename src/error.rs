use thiserror::Error;

#[derive(Error, Debug)]
pub enum BursarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown entry field: {0} (expected account, debit, credit or description)")]
    InvalidField(String),

    #[error("Entry row {index} out of range (voucher has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("Not a monetary amount: {0}")]
    UnparseableAmount(String),

    #[error("Amount must not be negative: {0}")]
    NegativeAmount(String),

    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    #[error("Account code already exists: {0}")]
    DuplicateAccount(String),

    #[error("Unknown voucher: {0}")]
    UnknownVoucher(String),

    #[error("Voucher number already exists: {0}")]
    DuplicateVoucher(String),

    #[error("Unknown student: {0}")]
    UnknownStudent(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BursarError>;
