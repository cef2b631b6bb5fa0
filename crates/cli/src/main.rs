//! Duobank CLI - savings/current account demonstration
//!
//! Usage:
//! ```bash
//! duobank
//! duobank --balance-style fixed
//! duobank --transfer-mode typed
//! RUST_LOG=debug duobank
//! ```

use anyhow::Result;
use clap::{Parser, ValueEnum};
use duobank_cli::{DriverConfig, TransferMode, DEFAULT_LOG_FILTER};
use duobank_reports::BalanceStyle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Duobank - savings and current accounts with a transfer between them
#[derive(Parser)]
#[command(name = "duobank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// How balances and limits are written
    #[arg(long, default_value = "legacy")]
    pub balance_style: BalanceStyleArg,

    /// Transfer path used by the script
    #[arg(long, default_value = "open")]
    pub transfer_mode: TransferModeArg,
}

impl Cli {
    pub fn to_config(&self) -> DriverConfig {
        DriverConfig::default()
            .with_balance_style(self.balance_style.to_style())
            .with_transfer_mode(self.transfer_mode.to_mode())
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BalanceStyleArg {
    /// Shortest amount followed by ".00"
    Legacy,
    /// Two-decimal fixed point
    Fixed,
}

impl BalanceStyleArg {
    pub fn to_style(&self) -> BalanceStyle {
        match self {
            BalanceStyleArg::Legacy => BalanceStyle::Legacy,
            BalanceStyleArg::Fixed => BalanceStyle::Fixed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TransferModeArg {
    /// Transfer between any two accounts
    Open,
    /// Require the recipient to be a current account
    Typed,
}

impl TransferModeArg {
    pub fn to_mode(&self) -> TransferMode {
        match self {
            TransferModeArg::Open => TransferMode::Open,
            TransferModeArg::Typed => TransferMode::Typed,
        }
    }
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();

    let mut stdout = std::io::stdout().lock();
    duobank_cli::run(&config, &mut stdout)?;

    Ok(())
}
