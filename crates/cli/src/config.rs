//! Driver configuration
//!
//! Everything defaults to the fixed script; flags only change presentation
//! and which transfer path is taken.

use duobank_reports::BalanceStyle;
use std::fmt;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Which transfer operation the script uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransferMode {
    /// Any variant to any variant
    #[default]
    Open,
    /// Current-initiated transfer that requires a current recipient
    Typed,
}

impl TransferMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferMode::Open => "open",
            TransferMode::Typed => "typed",
        }
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverConfig {
    pub balance_style: BalanceStyle,
    pub transfer_mode: TransferMode,
}

impl DriverConfig {
    pub fn with_balance_style(mut self, style: BalanceStyle) -> Self {
        self.balance_style = style;
        self
    }

    pub fn with_transfer_mode(mut self, mode: TransferMode) -> Self {
        self.transfer_mode = mode;
        self
    }
}
