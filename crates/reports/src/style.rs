//! Balance styles

use duobank_core::Money;
use std::fmt;

/// How monetary amounts are written in a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BalanceStyle {
    /// Shortest amount plus a literal `.00`; matches the historical output.
    #[default]
    Legacy,
    /// Two-decimal fixed point.
    Fixed,
}

impl BalanceStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceStyle::Legacy => "legacy",
            BalanceStyle::Fixed => "fixed",
        }
    }

    pub fn amount(&self, money: &Money) -> String {
        match self {
            BalanceStyle::Legacy => money.to_legacy(),
            BalanceStyle::Fixed => money.to_fixed(),
        }
    }
}

impl fmt::Display for BalanceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
