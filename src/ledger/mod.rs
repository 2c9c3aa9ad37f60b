//! Category ledgers and the monetary amount type they record.

pub mod amount;
pub mod category;
pub mod entry;

pub use amount::{format_amount, Amount};
pub use category::Category;
pub use entry::LedgerEntry;
