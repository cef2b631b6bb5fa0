//! # Transfer Module
//!
//! Moving funds between two accounts of any variant. The withdrawal runs
//! first; when the source refuses it, nothing is deposited.

use crate::account::{Account, AccountKind, AnyAccount};
use crate::error::{TransferError, VariantMismatch};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Amount moved by the driver's transfer step
pub const STANDARD_TRANSFER_AMOUNT: Decimal = dec!(300);

/// Outcome of a completed transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub from: String,
    pub to: String,
    pub amount: Decimal,
    /// Source balance after the transfer
    pub from_balance: Decimal,
    /// Recipient balance after the transfer
    pub to_balance: Decimal,
}

/// Withdraw `amount` from `from` and deposit it into `to`.
///
/// Either both balances move by `amount` or neither does.
pub fn transfer<F, T>(
    amount: Decimal,
    from: &mut F,
    to: &mut T,
) -> Result<TransferReceipt, TransferError>
where
    F: Account + ?Sized,
    T: Account + ?Sized,
{
    // A positive amount is always depositable, so only the withdrawal can fail.
    if amount <= Decimal::ZERO {
        return Err(TransferError::InvalidAmount(amount));
    }

    if let Err(violation) = from.withdraw(amount) {
        tracing::warn!(
            from = %from.id(),
            to = %to.id(),
            %amount,
            reason = %violation,
            "Transfer rejected"
        );
        return Err(TransferError::Withdrawal(violation));
    }

    to.deposit(amount).map_err(TransferError::Deposit)?;

    tracing::debug!(from = %from.id(), to = %to.id(), %amount, "Transfer completed");

    Ok(TransferReceipt {
        from: from.id().to_string(),
        to: to.id().to_string(),
        amount,
        from_balance: from.balance(),
        to_balance: to.balance(),
    })
}

impl AnyAccount {
    /// Transfer that requires both sides to be the same variant.
    ///
    /// The recipient's variant is checked before any balance moves. On
    /// success a savings initiator hands back itself, a current initiator
    /// hands back the recipient.
    pub fn transfer_typed<'a>(
        &'a mut self,
        to: &'a mut AnyAccount,
        amount: Decimal,
    ) -> Result<&'a mut AnyAccount, TransferError> {
        let expected = self.kind();
        let actual = to.kind();
        if expected != actual {
            tracing::error!(
                from = %self.id(),
                to = %to.id(),
                %expected,
                %actual,
                "Typed transfer between mismatched variants"
            );
            return Err(VariantMismatch::new(expected, actual).into());
        }

        transfer(amount, &mut *self, &mut *to)?;

        match expected {
            AccountKind::Savings => Ok(self),
            AccountKind::Current => Ok(to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolicyViolation;
    use crate::{CurrentAccount, SavingsAccount};

    fn savings(balance: Decimal) -> SavingsAccount {
        SavingsAccount::new("S123", "John Doe", balance, dec!(0.02))
    }

    fn current(balance: Decimal) -> CurrentAccount {
        CurrentAccount::new("C456", "Jane Doe", balance, dec!(500))
    }

    #[test]
    fn test_current_to_savings_moves_exactly_300() {
        let mut from = current(dec!(1000));
        let mut to = savings(dec!(1500));

        let receipt = transfer(STANDARD_TRANSFER_AMOUNT, &mut from, &mut to).unwrap();

        assert_eq!(from.balance(), dec!(700));
        assert_eq!(to.balance(), dec!(1800));
        assert_eq!(
            receipt,
            TransferReceipt {
                from: "C456".to_string(),
                to: "S123".to_string(),
                amount: dec!(300),
                from_balance: dec!(700),
                to_balance: dec!(1800),
            }
        );
    }

    #[test]
    fn test_rejected_withdrawal_skips_deposit() {
        let mut from = savings(dec!(350));
        let mut to = current(dec!(0));

        let err = transfer(STANDARD_TRANSFER_AMOUNT, &mut from, &mut to).unwrap_err();

        assert_eq!(
            err,
            TransferError::Withdrawal(PolicyViolation::MinimumBalance {
                requested: dec!(300),
                balance: dec!(350),
                floor: dec!(100),
            })
        );
        assert_eq!(from.balance(), dec!(350));
        assert_eq!(to.balance(), dec!(0));
    }

    #[test]
    fn test_non_positive_amount_is_rejected() {
        let mut from = current(dec!(1000));
        let mut to = savings(dec!(1000));

        for amount in [dec!(0), dec!(-300)] {
            let err = transfer(amount, &mut from, &mut to).unwrap_err();
            assert_eq!(err, TransferError::InvalidAmount(amount));
        }
        assert_eq!(from.balance(), dec!(1000));
        assert_eq!(to.balance(), dec!(1000));
    }

    #[test]
    fn test_transfer_through_trait_objects() {
        let mut from: Box<dyn Account> = Box::new(current(dec!(0)));
        let mut to: Box<dyn Account> = Box::new(savings(dec!(100)));

        transfer(dec!(500), from.as_mut(), to.as_mut()).unwrap();
        assert_eq!(from.balance(), dec!(-500));
        assert_eq!(to.balance(), dec!(600));

        let err = transfer(dec!(1), from.as_mut(), to.as_mut()).unwrap_err();
        assert_eq!(err.violation().map(|v| v.to_string()).as_deref(), Some("Overdraft Limit!"));
    }

    #[test]
    fn test_typed_transfer_current_into_savings_is_a_mismatch() {
        let mut from = AnyAccount::from(current(dec!(1000)));
        let mut to = AnyAccount::from(savings(dec!(1500)));

        let err = from
            .transfer_typed(&mut to, STANDARD_TRANSFER_AMOUNT)
            .unwrap_err();

        assert_eq!(
            err,
            TransferError::VariantMismatch(VariantMismatch::new(
                AccountKind::Current,
                AccountKind::Savings
            ))
        );
        assert_eq!(from.balance(), dec!(1000));
        assert_eq!(to.balance(), dec!(1500));
    }

    #[test]
    fn test_typed_transfer_savings_into_current_is_a_mismatch() {
        let mut from = AnyAccount::from(savings(dec!(1000)));
        let mut to = AnyAccount::from(current(dec!(0)));

        let err = from.transfer_typed(&mut to, dec!(300)).unwrap_err();
        assert!(err.is_variant_mismatch());
    }

    #[test]
    fn test_typed_transfer_return_sides() {
        let mut from = AnyAccount::from(savings(dec!(1000)));
        let mut to = AnyAccount::from(SavingsAccount::new("S2", "Ann Roe", dec!(0), dec!(0)));
        let returned = from.transfer_typed(&mut to, dec!(300)).unwrap();
        assert_eq!(returned.id(), "S123");

        let mut from = AnyAccount::from(current(dec!(1000)));
        let mut to = AnyAccount::from(CurrentAccount::new("C2", "Sam Poe", dec!(0), dec!(0)));
        let returned = from.transfer_typed(&mut to, dec!(300)).unwrap();
        assert_eq!(returned.id(), "C2");
        assert_eq!(returned.balance(), dec!(300));
    }
}
