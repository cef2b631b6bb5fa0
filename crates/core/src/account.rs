//! # Account Module
//!
//! The shared account capability. Every account carries the same
//! [`AccountDetails`] (id, holder, balance); variants differ only in how
//! they police withdrawals. [`AnyAccount`] is the closed set of variants for
//! code that only learns the concrete kind at run time.

use crate::current::CurrentAccount;
use crate::error::{PolicyViolation, VariantMismatch};
use crate::money::Money;
use crate::savings::SavingsAccount;
use rust_decimal::Decimal;
use std::fmt;

/// Account variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Savings,
    Current,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "savings",
            AccountKind::Current => "current",
        }
    }

    /// Human-readable account type, as shown in reports
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings Account",
            AccountKind::Current => "Current Account",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "savings" => Some(AccountKind::Savings),
            "current" => Some(AccountKind::Current),
            _ => None,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields shared by every account.
///
/// `id` and `holder` are fixed at creation. The balance is read-only from
/// outside this crate; it only moves through [`Account::deposit`] and the
/// variants' `withdraw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDetails {
    id: String,
    holder: String,
    balance: Decimal,
}

impl AccountDetails {
    pub fn new(id: impl Into<String>, holder: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id: id.into(),
            holder: holder.into(),
            balance,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub(crate) fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    pub(crate) fn debit(&mut self, amount: Decimal) {
        self.balance -= amount;
    }
}

/// Capability shared by savings and current accounts.
///
/// Implementors supply the shared details, their kind, and a withdrawal
/// policy. Deposits behave identically for every variant.
pub trait Account {
    fn details(&self) -> &AccountDetails;

    fn details_mut(&mut self) -> &mut AccountDetails;

    fn kind(&self) -> AccountKind;

    /// Withdraw `amount`, or leave the balance untouched and report why not.
    fn withdraw(&mut self, amount: Decimal) -> Result<(), PolicyViolation>;

    fn account_type(&self) -> &'static str {
        self.kind().label()
    }

    fn id(&self) -> &str {
        self.details().id()
    }

    fn holder(&self) -> &str {
        self.details().holder()
    }

    fn balance(&self) -> Decimal {
        self.details().balance()
    }

    fn balance_money(&self) -> Money {
        Money::usd(self.balance())
    }

    /// Deposit a strictly positive amount.
    fn deposit(&mut self, amount: Decimal) -> Result<(), PolicyViolation> {
        if amount <= Decimal::ZERO {
            tracing::warn!(account = %self.id(), %amount, "Deposit rejected");
            return Err(PolicyViolation::InvalidDeposit { amount });
        }

        self.details_mut().credit(amount);
        tracing::debug!(
            account = %self.id(),
            %amount,
            balance = %self.balance(),
            "Deposit accepted"
        );
        Ok(())
    }
}

/// Closed set of account variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyAccount {
    Savings(SavingsAccount),
    Current(CurrentAccount),
}

impl AnyAccount {
    pub fn as_savings(&self) -> Option<&SavingsAccount> {
        match self {
            AnyAccount::Savings(account) => Some(account),
            AnyAccount::Current(_) => None,
        }
    }

    pub fn as_current(&self) -> Option<&CurrentAccount> {
        match self {
            AnyAccount::Current(account) => Some(account),
            AnyAccount::Savings(_) => None,
        }
    }

    pub fn as_savings_mut(&mut self) -> Option<&mut SavingsAccount> {
        match self {
            AnyAccount::Savings(account) => Some(account),
            AnyAccount::Current(_) => None,
        }
    }

    pub fn as_current_mut(&mut self) -> Option<&mut CurrentAccount> {
        match self {
            AnyAccount::Current(account) => Some(account),
            AnyAccount::Savings(_) => None,
        }
    }
}

impl Account for AnyAccount {
    fn details(&self) -> &AccountDetails {
        match self {
            AnyAccount::Savings(account) => account.details(),
            AnyAccount::Current(account) => account.details(),
        }
    }

    fn details_mut(&mut self) -> &mut AccountDetails {
        match self {
            AnyAccount::Savings(account) => account.details_mut(),
            AnyAccount::Current(account) => account.details_mut(),
        }
    }

    fn kind(&self) -> AccountKind {
        match self {
            AnyAccount::Savings(_) => AccountKind::Savings,
            AnyAccount::Current(_) => AccountKind::Current,
        }
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), PolicyViolation> {
        match self {
            AnyAccount::Savings(account) => account.withdraw(amount),
            AnyAccount::Current(account) => account.withdraw(amount),
        }
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), PolicyViolation> {
        match self {
            AnyAccount::Savings(account) => account.deposit(amount),
            AnyAccount::Current(account) => account.deposit(amount),
        }
    }
}

impl From<SavingsAccount> for AnyAccount {
    fn from(account: SavingsAccount) -> Self {
        AnyAccount::Savings(account)
    }
}

impl From<CurrentAccount> for AnyAccount {
    fn from(account: CurrentAccount) -> Self {
        AnyAccount::Current(account)
    }
}

impl TryFrom<AnyAccount> for SavingsAccount {
    type Error = VariantMismatch;

    fn try_from(account: AnyAccount) -> Result<Self, Self::Error> {
        match account {
            AnyAccount::Savings(savings) => Ok(savings),
            other => Err(VariantMismatch::new(AccountKind::Savings, other.kind())),
        }
    }
}

impl TryFrom<AnyAccount> for CurrentAccount {
    type Error = VariantMismatch;

    fn try_from(account: AnyAccount) -> Result<Self, Self::Error> {
        match account {
            AnyAccount::Current(current) => Ok(current),
            other => Err(VariantMismatch::new(AccountKind::Current, other.kind())),
        }
    }
}

impl fmt::Display for AnyAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (holder: {}, balance: {})",
            self.account_type(),
            self.id(),
            self.holder(),
            self.balance_money()
        )
    }
}
