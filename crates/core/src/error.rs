//! # Error Module
//!
//! Domain errors using thiserror. Policy violations are the soft tier: the
//! operation is skipped and the message is shown to the operator. A variant
//! mismatch is the hard tier and is expected to end the program.

use crate::account::AccountKind;
use rust_decimal::Decimal;
use thiserror::Error;

/// A deposit or withdrawal refused by the account's policy.
///
/// The `Display` text is the operator-facing warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("Minimum Balance Reached!")]
    MinimumBalance {
        requested: Decimal,
        balance: Decimal,
        floor: Decimal,
    },

    #[error("Overdraft Limit!")]
    OverdraftLimit {
        requested: Decimal,
        balance: Decimal,
        limit: Decimal,
    },

    #[error("Invalid deposit amount.")]
    InvalidDeposit { amount: Decimal },
}

impl PolicyViolation {
    /// Amount the caller asked for
    pub fn requested(&self) -> Decimal {
        match self {
            PolicyViolation::MinimumBalance { requested, .. }
            | PolicyViolation::OverdraftLimit { requested, .. } => *requested,
            PolicyViolation::InvalidDeposit { amount } => *amount,
        }
    }

    pub fn is_withdrawal(&self) -> bool {
        !matches!(self, PolicyViolation::InvalidDeposit { .. })
    }
}

/// The recipient of a typed transfer is not the required variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Variant mismatch: expected {expected} account, got {actual} account")]
pub struct VariantMismatch {
    pub expected: AccountKind,
    pub actual: AccountKind,
}

impl VariantMismatch {
    pub fn new(expected: AccountKind, actual: AccountKind) -> Self {
        Self { expected, actual }
    }
}

/// Transfer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("Invalid transfer amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Transfer withdrawal rejected: {0}")]
    Withdrawal(PolicyViolation),

    #[error("Transfer deposit rejected: {0}")]
    Deposit(PolicyViolation),

    #[error(transparent)]
    VariantMismatch(#[from] VariantMismatch),
}

impl TransferError {
    /// The policy violation behind a soft failure, if any
    pub fn violation(&self) -> Option<&PolicyViolation> {
        match self {
            TransferError::Withdrawal(v) | TransferError::Deposit(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_variant_mismatch(&self) -> bool {
        matches!(self, TransferError::VariantMismatch(_))
    }
}
