use crate::ledger::{format_amount, Category};

use super::layout::{center, fit_left, pad_left};

const TITLE_WIDTH: usize = 30;
const TITLE_FILL: char = '*';
const DESCRIPTION_WIDTH: usize = 23;
const AMOUNT_WIDTH: usize = 7;

/// Renders the fixed-width statement for `category`.
///
/// A `*`-centered title line, one line per entry (23-column description,
/// 7-column amount) and a final `Total:` line without a trailing newline.
pub fn render_statement(category: &Category) -> String {
    let mut out = center(category.name(), TITLE_WIDTH, TITLE_FILL);
    out.push('\n');

    for entry in category.entries() {
        out.push_str(&fit_left(entry.description(), DESCRIPTION_WIDTH));
        out.push_str(&pad_left(&format_amount(entry.amount()), AMOUNT_WIDTH));
        out.push('\n');
    }

    out.push_str("Total: ");
    out.push_str(&format_amount(category.balance()));
    out
}
