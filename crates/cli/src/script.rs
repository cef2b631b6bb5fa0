//! The account demonstration script.
//!
//! Phases: initial details, deposit and withdrawal, transfer. Each account
//! block is followed by a blank line, and every phase but the last by one
//! more.

use anyhow::{Context, Result};
use duobank_core::{
    transfer, Account, AnyAccount, CurrentAccount, PolicyViolation, SavingsAccount,
    STANDARD_TRANSFER_AMOUNT,
};
use duobank_reports::{ReportExporter, TextExporter};
use rust_decimal_macros::dec;
use std::io::{self, Write};

use crate::config::{DriverConfig, TransferMode};

/// Final state of both accounts after the script
#[derive(Debug, Clone)]
pub struct ScriptOutcome {
    pub savings: AnyAccount,
    pub current: AnyAccount,
}

/// Run the script, writing the report to `out`.
///
/// Policy violations are written inline and the script carries on. A
/// variant mismatch on the typed transfer path aborts with an error.
pub fn run<W: Write>(config: &DriverConfig, out: &mut W) -> Result<ScriptOutcome> {
    let exporter = TextExporter::new(config.balance_style);

    let mut savings = AnyAccount::from(SavingsAccount::new(
        "S123",
        "John Doe",
        dec!(1000),
        dec!(0.02),
    ));
    let mut current = AnyAccount::from(CurrentAccount::new(
        "C456",
        "Jane Doe",
        dec!(2000),
        dec!(500),
    ));
    tracing::info!(style = %config.balance_style, mode = %config.transfer_mode, "Script started");

    print_accounts(out, &exporter, &[&savings, &current])?;
    writeln!(out)?;

    report_violation(out, savings.deposit(dec!(500)))?;
    report_violation(out, current.withdraw(dec!(1000)))?;

    writeln!(out, "Account Details after deposit and withdrawal: ")?;
    print_accounts(out, &exporter, &[&savings, &current])?;
    writeln!(out)?;

    match config.transfer_mode {
        TransferMode::Open => {
            match transfer(STANDARD_TRANSFER_AMOUNT, &mut current, &mut savings) {
                Ok(receipt) => tracing::info!(
                    from = %receipt.from,
                    to = %receipt.to,
                    amount = %receipt.amount,
                    "Transfer done"
                ),
                Err(err) => match err.violation() {
                    Some(violation) => writeln!(out, "{}", violation)?,
                    None => return Err(err).context("Transfer from current account failed"),
                },
            }
        }
        TransferMode::Typed => {
            current
                .transfer_typed(&mut savings, STANDARD_TRANSFER_AMOUNT)
                .context("Typed transfer from current account failed")?;
        }
    }

    writeln!(out, "Account Details After Transfer: ")?;
    print_accounts(out, &exporter, &[&savings, &current])?;
    out.flush()?;

    Ok(ScriptOutcome { savings, current })
}

fn print_accounts<W: Write>(
    out: &mut W,
    exporter: &TextExporter,
    accounts: &[&AnyAccount],
) -> io::Result<()> {
    for account in accounts {
        write!(out, "{}", exporter.export(*account))?;
        writeln!(out)?;
    }
    Ok(())
}

fn report_violation<W: Write>(out: &mut W, result: Result<(), PolicyViolation>) -> io::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(violation) => writeln!(out, "{}", violation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duobank_core::TransferError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_run_balances() {
        let mut out = Vec::new();
        let outcome = run(&DriverConfig::default(), &mut out).unwrap();

        assert_eq!(outcome.savings.balance(), dec!(1800));
        assert_eq!(outcome.current.balance(), dec!(700));
    }

    #[test]
    fn test_typed_run_aborts_after_second_phase() {
        let mut out = Vec::new();
        let config = DriverConfig::default().with_transfer_mode(TransferMode::Typed);

        let err = run(&config, &mut out).unwrap_err();
        let cause = err.downcast_ref::<TransferError>().unwrap();
        assert!(cause.is_variant_mismatch());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Account Details after deposit and withdrawal: "));
        assert!(!text.contains("Account Details After Transfer"));
    }

    #[test]
    fn test_report_violation_writes_message() {
        let mut out = Vec::new();
        report_violation(
            &mut out,
            Err(PolicyViolation::InvalidDeposit { amount: dec!(0) }),
        )
        .unwrap();
        report_violation(&mut out, Ok(())).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Invalid deposit amount.\n");
    }
}
