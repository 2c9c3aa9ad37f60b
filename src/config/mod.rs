use std::{env, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// Environment variable overriding [`ChartConfig::zero_spend`].
pub const ZERO_SPEND_ENV: &str = "BUDGET_LEDGER_ZERO_SPEND";

/// What the spend chart does when no category recorded a withdrawal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroSpendPolicy {
    /// Fail with [`LedgerError::NoSpendingData`].
    #[default]
    Reject,
    /// Treat every percentage as 0.
    Zero,
}

impl fmt::Display for ZeroSpendPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ZeroSpendPolicy::Reject => "reject",
            ZeroSpendPolicy::Zero => "zero",
        };
        f.write_str(label)
    }
}

impl FromStr for ZeroSpendPolicy {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(ZeroSpendPolicy::Reject),
            "zero" => Ok(ZeroSpendPolicy::Zero),
            other => Err(LedgerError::Config(format!(
                "unknown zero-spend policy `{other}` (expected `reject` or `zero`)"
            ))),
        }
    }
}

/// Rendering options for the spend chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub zero_spend: ZeroSpendPolicy,
}

impl ChartConfig {
    pub fn new(zero_spend: ZeroSpendPolicy) -> Self {
        Self { zero_spend }
    }

    /// Parses a JSON document; missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults overlaid with `BUDGET_LEDGER_ZERO_SPEND` when it is set.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = env::var_os(ZERO_SPEND_ENV) {
            let value = raw.to_string_lossy();
            config.zero_spend = value.parse()?;
        }
        Ok(config)
    }
}
