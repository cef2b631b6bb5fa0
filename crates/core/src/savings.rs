//! # Savings Account
//!
//! A savings account may never be withdrawn below [`MINIMUM_BALANCE`].
//! Its interest rate is informational only.

use crate::account::{Account, AccountDetails, AccountKind};
use crate::error::{PolicyViolation, TransferError};
use crate::transfer::transfer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Floor a savings withdrawal may not cross
pub const MINIMUM_BALANCE: Decimal = dec!(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsAccount {
    details: AccountDetails,
    /// Fraction, e.g. 0.02 for 2%. Never applied to the balance.
    interest_rate: Decimal,
}

impl SavingsAccount {
    pub fn new(
        id: impl Into<String>,
        holder: impl Into<String>,
        balance: Decimal,
        interest_rate: Decimal,
    ) -> Self {
        Self {
            details: AccountDetails::new(id, holder, balance),
            interest_rate,
        }
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Moves `amount` into another savings account and hands back the
    /// initiator.
    pub fn transfer_to_savings(
        &mut self,
        to: &mut SavingsAccount,
        amount: Decimal,
    ) -> Result<&mut Self, TransferError> {
        transfer(amount, &mut *self, to)?;
        Ok(self)
    }
}

impl Account for SavingsAccount {
    fn details(&self) -> &AccountDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut AccountDetails {
        &mut self.details
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), PolicyViolation> {
        let balance = self.details.balance();
        let permitted = amount > Decimal::ZERO
            && balance
                .checked_sub(amount)
                .is_some_and(|rest| rest >= MINIMUM_BALANCE);

        if !permitted {
            tracing::warn!(
                account = %self.details.id(),
                %amount,
                %balance,
                "Withdrawal would cross the minimum balance"
            );
            return Err(PolicyViolation::MinimumBalance {
                requested: amount,
                balance,
                floor: MINIMUM_BALANCE,
            });
        }

        self.details.debit(amount);
        tracing::debug!(
            account = %self.details.id(),
            %amount,
            balance = %self.details.balance(),
            "Withdrawal accepted"
        );
        Ok(())
    }
}
