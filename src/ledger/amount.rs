use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary value stored in a ledger. Fixed-point, so repeated deposits and
/// withdrawals never accumulate binary rounding drift.
pub type Amount = Decimal;

/// Number of fraction digits shown in statements.
pub const DISPLAY_SCALE: u32 = 2;

/// Formats an amount with exactly two fraction digits. Zero never carries a
/// minus sign.
pub fn format_amount(amount: Amount) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_SCALE);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}
