use rust_decimal::Decimal;
use thiserror::Error;

/// Error type that captures ledger and report failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Insufficient funds in `{category}`: requested {requested}, available {available}")]
    InsufficientFunds {
        category: String,
        requested: Decimal,
        available: Decimal,
    },
    #[error("No spending data: none of the categories recorded a withdrawal")]
    NoSpendingData,
    #[error("No categories supplied to the spend chart")]
    NoCategories,
    #[error("Amount overflow: combined spending exceeds the representable range")]
    AmountOverflow,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
