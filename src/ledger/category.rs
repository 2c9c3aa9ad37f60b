use std::fmt;

use serde::Serialize;

use super::{amount::Amount, entry::LedgerEntry};
use crate::{
    errors::{LedgerError, Result},
    report::statement,
};

/// A named budget bucket holding an append-only ledger.
///
/// Two categories may share a name; each value remains a distinct budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    name: String,
    ledger: Vec<LedgerEntry>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recorded entries in insertion order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Records `amount` as-is. Always succeeds.
    pub fn deposit(&mut self, amount: Amount, description: impl Into<String>) {
        let entry = LedgerEntry::new(amount, description);
        tracing::debug!(
            category = %self.name,
            amount = %amount,
            description = entry.description(),
            "deposit recorded"
        );
        self.ledger.push(entry);
    }

    /// Records a withdrawal of `amount` (a positive magnitude) when funds allow.
    ///
    /// Returns `false` and leaves the ledger untouched otherwise.
    pub fn withdraw(&mut self, amount: Amount, description: impl Into<String>) -> bool {
        self.try_withdraw(amount, description).is_ok()
    }

    /// Like [`Category::withdraw`], reporting a rejection as
    /// [`LedgerError::InsufficientFunds`].
    pub fn try_withdraw(&mut self, amount: Amount, description: impl Into<String>) -> Result<()> {
        if !self.check_funds(amount) {
            let err = self.insufficient_funds(amount);
            tracing::debug!(category = %self.name, amount = %amount, "withdrawal rejected");
            return Err(err);
        }
        let entry = LedgerEntry::new(-amount, description);
        tracing::debug!(
            category = %self.name,
            amount = %amount,
            description = entry.description(),
            "withdrawal recorded"
        );
        self.ledger.push(entry);
        Ok(())
    }

    /// Sum of every ledger amount; zero for an empty ledger.
    ///
    /// Saturates at `Amount::MAX` / `Amount::MIN` instead of overflowing.
    pub fn balance(&self) -> Amount {
        self.ledger
            .iter()
            .fold(Amount::ZERO, |acc, entry| acc.saturating_add(entry.amount()))
    }

    /// Sole admission rule for withdrawals and transfers: `amount <= balance`.
    pub fn check_funds(&self, amount: Amount) -> bool {
        amount <= self.balance()
    }

    /// Sum of the withdrawal entries only (non-positive), saturating at
    /// `Amount::MIN`.
    pub fn total_spent(&self) -> Amount {
        self.ledger
            .iter()
            .filter(|entry| entry.is_withdrawal())
            .fold(Amount::ZERO, |acc, entry| acc.saturating_add(entry.amount()))
    }

    /// Moves `amount` into `destination`, recording one entry on each side.
    ///
    /// Returns `false` with neither ledger modified when funds are short.
    pub fn transfer(&mut self, amount: Amount, destination: &mut Category) -> bool {
        self.try_transfer(amount, destination).is_ok()
    }

    /// Like [`Category::transfer`], reporting a rejection as
    /// [`LedgerError::InsufficientFunds`].
    pub fn try_transfer(&mut self, amount: Amount, destination: &mut Category) -> Result<()> {
        if !self.check_funds(amount) {
            tracing::debug!(
                source = %self.name,
                destination = %destination.name,
                amount = %amount,
                "transfer rejected"
            );
            return Err(self.insufficient_funds(amount));
        }

        // Re-checked by the withdrawal itself; cannot fail after the check above.
        self.try_withdraw(amount, format!("Transfer to {}", destination.name))?;
        destination.deposit(amount, format!("Transfer from {}", self.name));
        tracing::debug!(
            source = %self.name,
            destination = %destination.name,
            amount = %amount,
            "transfer completed"
        );
        Ok(())
    }

    fn insufficient_funds(&self, requested: Amount) -> LedgerError {
        LedgerError::InsufficientFunds {
            category: self.name.clone(),
            requested,
            available: self.balance(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&statement::render_statement(self))
    }
}
