//! # Duobank Core
//!
//! Core domain types: money, the shared account capability, the savings and
//! current variants, and transfers between them.
//!
//! ## Example
//!
//! ```
//! use duobank_core::{transfer, Account, CurrentAccount, SavingsAccount};
//! use rust_decimal_macros::dec;
//!
//! let mut savings = SavingsAccount::new("S123", "John Doe", dec!(1000), dec!(0.02));
//! let mut current = CurrentAccount::new("C456", "Jane Doe", dec!(2000), dec!(500));
//!
//! transfer(dec!(300), &mut current, &mut savings).unwrap();
//! assert_eq!(savings.balance(), dec!(1300));
//! assert_eq!(current.balance(), dec!(1700));
//! ```

pub mod account;
pub mod current;
pub mod error;
pub mod money;
pub mod savings;
pub mod transfer;

pub use account::{Account, AccountDetails, AccountKind, AnyAccount};
pub use current::CurrentAccount;
pub use error::{PolicyViolation, TransferError, VariantMismatch};
pub use money::{Currency, Money};
pub use savings::{SavingsAccount, MINIMUM_BALANCE};
pub use transfer::{transfer, TransferReceipt, STANDARD_TRANSFER_AMOUNT};
