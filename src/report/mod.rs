//! Fixed-width text reports: per-category statements and the spend chart.

pub mod chart;
pub mod layout;
pub mod statement;

pub use chart::{create_spend_chart, create_spend_chart_with, spend_percentages};
pub use statement::render_statement;
