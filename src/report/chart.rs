use rust_decimal::prelude::ToPrimitive;

use crate::{
    config::{ChartConfig, ZeroSpendPolicy},
    errors::{LedgerError, Result},
    ledger::{Amount, Category},
};

use super::layout::pad_left;

const CHART_TITLE: &str = "Percentage spent by category";
const LEVEL_WIDTH: usize = 3;
const LEVEL_STEP: usize = 10;
const MAX_LEVEL: u32 = 100;
const BAR: &str = " o ";
const NO_BAR: &str = "   ";
const AXIS_INDENT: &str = "    ";
const LABEL_INDENT: &str = "     ";

/// Renders the spend chart for `categories` with the default [`ChartConfig`].
pub fn create_spend_chart(categories: &[&Category]) -> Result<String> {
    create_spend_chart_with(categories, &ChartConfig::default())
}

/// Renders the spend chart for `categories`, in input order.
///
/// Bars reach every decile level at or below each category's share of the
/// combined withdrawals; names run vertically under the axis.
pub fn create_spend_chart_with(categories: &[&Category], config: &ChartConfig) -> Result<String> {
    let percentages = spend_percentages(categories, config)?;

    let mut chart = String::from(CHART_TITLE);
    chart.push('\n');

    for level in (0..=MAX_LEVEL).rev().step_by(LEVEL_STEP) {
        chart.push_str(&pad_left(&level.to_string(), LEVEL_WIDTH));
        chart.push('|');
        for &percentage in &percentages {
            chart.push_str(if percentage >= level { BAR } else { NO_BAR });
        }
        chart.push_str(" \n");
    }

    chart.push_str(AXIS_INDENT);
    chart.push_str(&"---".repeat(categories.len()));
    chart.push_str("-\n");

    chart.push_str(&vertical_labels(categories));
    Ok(chart)
}

/// Each category's share of the combined withdrawals, truncated toward zero
/// to a whole percent.
pub fn spend_percentages(categories: &[&Category], config: &ChartConfig) -> Result<Vec<u32>> {
    if categories.is_empty() {
        return Err(LedgerError::NoCategories);
    }

    let spent: Vec<Amount> = categories.iter().map(|c| c.total_spent()).collect();
    let total_spent = spent
        .iter()
        .try_fold(Amount::ZERO, |acc, &amount| acc.checked_add(amount))
        .ok_or(LedgerError::AmountOverflow)?;

    if total_spent.is_zero() {
        return match config.zero_spend {
            ZeroSpendPolicy::Reject => Err(LedgerError::NoSpendingData),
            ZeroSpendPolicy::Zero => {
                tracing::warn!(
                    categories = categories.len(),
                    "no withdrawals recorded; charting every category at 0%"
                );
                Ok(vec![0; categories.len()])
            }
        };
    }

    let hundred = Amount::from(MAX_LEVEL);
    Ok(spent
        .iter()
        .map(|&amount| {
            let share = match amount.checked_mul(hundred) {
                Some(scaled) => scaled / total_spent,
                // Scale the divisor instead once the numerator leaves range.
                None => amount / (total_spent / hundred),
            };
            share.trunc().to_u32().unwrap_or(0)
        })
        .collect())
}

fn vertical_labels(categories: &[&Category]) -> String {
    let names: Vec<Vec<char>> = categories
        .iter()
        .map(|category| category.name().chars().collect())
        .collect();
    let tallest = names.iter().map(Vec::len).max().unwrap_or(0);

    let rows: Vec<String> = (0..tallest)
        .map(|row| {
            let mut line = String::from(LABEL_INDENT);
            for name in &names {
                match name.get(row) {
                    Some(ch) => {
                        line.push(*ch);
                        line.push_str("  ");
                    }
                    None => line.push_str(NO_BAR),
                }
            }
            line
        })
        .collect();
    rows.join("\n")
}
