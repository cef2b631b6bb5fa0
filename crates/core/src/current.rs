//! # Current Account
//!
//! A current account may go negative, down to minus its overdraft limit.

use crate::account::{Account, AccountDetails, AccountKind};
use crate::error::{PolicyViolation, TransferError};
use crate::transfer::transfer;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentAccount {
    details: AccountDetails,
    overdraft_limit: Decimal,
}

impl CurrentAccount {
    pub fn new(
        id: impl Into<String>,
        holder: impl Into<String>,
        balance: Decimal,
        overdraft_limit: Decimal,
    ) -> Self {
        Self {
            details: AccountDetails::new(id, holder, balance),
            overdraft_limit,
        }
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    /// Lowest balance a withdrawal may leave behind
    pub fn floor(&self) -> Decimal {
        -self.overdraft_limit
    }

    /// Moves `amount` into another current account and hands back the
    /// recipient.
    pub fn transfer_to_current<'a>(
        &mut self,
        to: &'a mut CurrentAccount,
        amount: Decimal,
    ) -> Result<&'a mut CurrentAccount, TransferError> {
        transfer(amount, self, &mut *to)?;
        Ok(to)
    }
}

impl Account for CurrentAccount {
    fn details(&self) -> &AccountDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut AccountDetails {
        &mut self.details
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Current
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), PolicyViolation> {
        let balance = self.details.balance();
        let floor = self.floor();
        let permitted = amount > Decimal::ZERO
            && balance
                .checked_sub(amount)
                .is_some_and(|rest| rest >= floor);

        if !permitted {
            tracing::warn!(
                account = %self.details.id(),
                %amount,
                %balance,
                limit = %self.overdraft_limit,
                "Withdrawal would exceed the overdraft limit"
            );
            return Err(PolicyViolation::OverdraftLimit {
                requested: amount,
                balance,
                limit: self.overdraft_limit,
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
