//! # Duobank Reports
//!
//! Text rendering of account details.
//!
//! ## Sources
//!
//! - [`SavingsAccount`](duobank_core::SavingsAccount) - holder, balance, interest rate
//! - [`CurrentAccount`](duobank_core::CurrentAccount) - holder, balance, overdraft limit
//! - [`AnyAccount`](duobank_core::AnyAccount) - whichever variant it holds
//! - [`GenericDetails`] - any [`Account`](duobank_core::Account), shared fields only
//!
//! ## Example
//!
//! ```rust
//! use duobank_core::SavingsAccount;
//! use duobank_reports::{BalanceStyle, ReportExporter, TextExporter};
//! use rust_decimal::Decimal;
//!
//! let savings = SavingsAccount::new("S123", "John Doe", Decimal::from(1000), Decimal::new(2, 2));
//! let text = TextExporter::new(BalanceStyle::Legacy).export(&savings);
//! assert!(text.starts_with("Savings Account Details (ID: S123):\n"));
//! ```

pub mod details;
pub mod exporter;
pub mod style;

pub use details::{DetailRow, DetailsSource, GenericDetails};
pub use exporter::{ReportExporter, TextExporter};
pub use style::BalanceStyle;
