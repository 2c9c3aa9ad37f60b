//! Demo front-end: renders a sample budget as statements plus a spend chart.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    config::ChartConfig,
    errors::LedgerError,
    ledger::Category,
    report::create_spend_chart_with,
    utils::build_info,
};

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Unknown argument `{0}` (expected --json or --version)")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    Report,
    Json,
    Version,
}

impl CliCommand {
    /// Interprets the arguments following the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut command = CliCommand::Report;
        for arg in args {
            command = match arg.as_ref() {
                "--json" => CliCommand::Json,
                "--version" | "-V" => CliCommand::Version,
                other => return Err(CliError::UnknownArgument(other.to_string())),
            };
        }
        Ok(command)
    }
}

/// The Food / Clothing / Auto budget shown by the demo.
pub fn sample_categories() -> Vec<Category> {
    let mut food = Category::new("Food");
    let mut clothing = Category::new("Clothing");
    let mut auto = Category::new("Auto");

    food.deposit(Decimal::new(1000, 0), "initial deposit");
    food.withdraw(Decimal::new(1015, 2), "groceries");
    food.withdraw(Decimal::new(1589, 2), "restaurant and more food for dessert");
    food.transfer(Decimal::new(50, 0), &mut clothing);

    clothing.withdraw(Decimal::new(2555, 2), "");
    // Rejected: exceeds the remaining balance.
    clothing.withdraw(Decimal::new(100, 0), "");

    auto.deposit(Decimal::new(1000, 0), "initial deposit");
    auto.withdraw(Decimal::new(15, 0), "");

    vec![food, clothing, auto]
}

/// Runs one CLI invocation and returns the text to print.
pub fn run_cli<I, S>(args: I) -> Result<String, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let command = CliCommand::parse(args)?;
    tracing::debug!(?command, "running budget ledger cli");

    match command {
        CliCommand::Version => Ok(build_info::current().summary()),
        CliCommand::Json => {
            let categories = sample_categories();
            Ok(serde_json::to_string_pretty(&categories).map_err(LedgerError::from)?)
        }
        CliCommand::Report => {
            let config = ChartConfig::from_env()?;
            render_report(&sample_categories(), &config).map_err(CliError::from)
        }
    }
}

/// Statements for each category, separated by blank lines, then the chart.
pub fn render_report(categories: &[Category], config: &ChartConfig) -> Result<String, LedgerError> {
    let refs: Vec<&Category> = categories.iter().collect();
    let mut sections: Vec<String> = categories.iter().map(Category::to_string).collect();
    sections.push(create_spend_chart_with(&refs, config)?);
    Ok(sections.join("\n\n"))
}
