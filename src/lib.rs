#![doc(test(attr(deny(warnings))))]

//! Budget Ledger offers named spending categories with append-only ledgers,
//! inter-category transfers, fixed-width statements, and a comparative
//! spend chart.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod utils;

pub use errors::{LedgerError, Result};
pub use ledger::{Amount, Category, LedgerEntry};
pub use report::{create_spend_chart, create_spend_chart_with};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Ledger tracing initialized.");
    });
}
