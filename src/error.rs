use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog file holds {found} slots, machine requires {expected}")]
    SlotCount { expected: usize, found: usize },
    #[error("malformed ledger line {line}: {reason}")]
    LedgerFormat { line: usize, reason: String },
    #[error("denomination {0} is not accepted by this machine")]
    UnknownDenomination(u32),
}

pub type Result<T> = std::result::Result<T, VendingError>;
