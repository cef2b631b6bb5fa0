//! Data an account contributes to its details report.

use crate::style::BalanceStyle;
use duobank_core::money::percent;
use duobank_core::{Account, AnyAccount, CurrentAccount, Money, SavingsAccount};

/// One `label: value` line of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    pub fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Trait for accounts that can be rendered as a details report
pub trait DetailsSource {
    /// Header line, without the trailing newline
    fn title(&self) -> String;

    /// Body rows in display order
    fn rows(&self, style: BalanceStyle) -> Vec<DetailRow>;
}

/// Rows every account shares: holder and balance
fn common_rows(account: &dyn Account, style: BalanceStyle) -> Vec<DetailRow> {
    vec![
        DetailRow::new("Holder", account.holder()),
        DetailRow::new("Balance", style.amount(&account.balance_money())),
    ]
}

fn variant_title(account: &dyn Account) -> String {
    format!("{} Details (ID: {}):", account.account_type(), account.id())
}

impl DetailsSource for SavingsAccount {
    fn title(&self) -> String {
        variant_title(self)
    }

    fn rows(&self, style: BalanceStyle) -> Vec<DetailRow> {
        let mut rows = common_rows(self, style);
        rows.push(DetailRow::new("Interest Rate", percent(self.interest_rate())));
        rows
    }
}

impl DetailsSource for CurrentAccount {
    fn title(&self) -> String {
        variant_title(self)
    }

    fn rows(&self, style: BalanceStyle) -> Vec<DetailRow> {
        let mut rows = common_rows(self, style);
        rows.push(DetailRow::new(
            "Overdraft Limit",
            style.amount(&Money::usd(self.overdraft_limit())),
        ));
        rows
    }
}

impl DetailsSource for AnyAccount {
    fn title(&self) -> String {
        match self {
            AnyAccount::Savings(account) => account.title(),
            AnyAccount::Current(account) => account.title(),
        }
    }

    fn rows(&self, style: BalanceStyle) -> Vec<DetailRow> {
        match self {
            AnyAccount::Savings(account) => account.rows(style),
            AnyAccount::Current(account) => account.rows(style),
        }
    }
}

/// Shared-fields view of any account, without variant-specific rows.
pub struct GenericDetails<'a>(pub &'a dyn Account);

impl DetailsSource for GenericDetails<'_> {
    fn title(&self) -> String {
        format!(
            "Account Details for {} (ID: {}):",
            self.0.account_type(),
            self.0.id()
        )
    }

    fn rows(&self, style: BalanceStyle) -> Vec<DetailRow> {
        common_rows(self.0, style)
    }
}
