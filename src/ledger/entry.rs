use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// A single signed movement on a category ledger.
///
/// Deposits carry a positive amount; withdrawals and outgoing transfers carry
/// a negative one. Entries are never edited after being recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    amount: Amount,
    description: String,
}

impl LedgerEntry {
    pub fn new(amount: Amount, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount < Amount::ZERO
    }
}
