//! # Money Module
//!
//! Currency and Money backed by `rust_decimal`, with the two amount
//! notations used by account reports.

use rust_decimal::Decimal;
use std::fmt;

/// A currency with its display symbol and number of minor digits.
///
/// # Examples
/// ```
/// use duobank_core::Currency;
///
/// let usd = Currency::new("usd", "US Dollar", 2, "$");
/// assert_eq!(usd.code, "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    /// ISO 4217 code
    pub code: String,
    pub name: String,
    /// Minor digits shown in fixed-point notation (USD=2)
    pub decimals: u32,
    pub symbol: String,
}

impl Currency {
    pub fn new(code: &str, name: &str, decimals: u32, symbol: &str) -> Self {
        Self {
            code: code.to_uppercase(),
            name: name.to_string(),
            decimals,
            symbol: symbol.to_string(),
        }
    }

    /// US Dollar (2 decimals)
    pub fn usd() -> Self {
        Self::new("USD", "US Dollar", 2, "$")
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::usd()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// An amount in a given currency.
///
/// # Examples
/// ```
/// use duobank_core::Money;
/// use rust_decimal_macros::dec;
///
/// let money = Money::usd(dec!(1500));
/// assert_eq!(money.to_legacy(), "$1500.00");
/// assert_eq!(Money::usd(dec!(12.5)).to_fixed(), "$12.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Shortcut for an amount in US dollars
    pub fn usd(amount: Decimal) -> Self {
        Self::new(amount, Currency::usd())
    }

    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Amount in its shortest decimal form: `1000`, `12.5`, `-300`.
    pub fn plain_amount(&self) -> String {
        self.amount.normalize().to_string()
    }

    /// Symbol, shortest amount, then a literal `.00`.
    ///
    /// The suffix is appended whatever the fractional part is, so `12.5`
    /// renders as `$12.5.00` and `-300` as `$-300.00`.
    pub fn to_legacy(&self) -> String {
        format!("{}{}.00", self.currency.symbol, self.plain_amount())
    }

    /// Genuine fixed point with the currency's minor digits: `$12.50`,
    /// `-$300.00`. Midpoints round to even (`Decimal::round_dp`).
    pub fn to_fixed(&self) -> String {
        let mut magnitude = self.amount.abs().round_dp(self.currency.decimals);
        magnitude.rescale(self.currency.decimals);
        let sign = if magnitude.is_zero() || !self.is_negative() {
            ""
        } else {
            "-"
        };
        format!("{}{}{}", sign, self.currency.symbol, magnitude)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.code)
    }
}

/// Renders a fraction as a percentage in shortest form: `0.02` -> `2%`.
pub fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_preset() {
        let usd = Currency::usd();
        assert_eq!(usd.code, "USD");
        assert_eq!(usd.decimals, 2);
        assert_eq!(usd.symbol, "$");
        assert_eq!(Currency::default(), usd);
    }

    #[test]
    fn test_plain_amount_strips_trailing_zeros() {
        assert_eq!(Money::usd(dec!(1000.00)).plain_amount(), "1000");
        assert_eq!(Money::usd(dec!(12.50)).plain_amount(), "12.5");
        assert_eq!(Money::usd(dec!(0.00)).plain_amount(), "0");
    }

    #[test]
    fn test_legacy_suffix_is_literal() {
        assert_eq!(Money::usd(dec!(2000)).to_legacy(), "$2000.00");
        assert_eq!(Money::usd(dec!(12.5)).to_legacy(), "$12.5.00");
        assert_eq!(Money::usd(dec!(-300)).to_legacy(), "$-300.00");
    }

    #[test]
    fn test_fixed_point() {
        assert_eq!(Money::usd(dec!(2000)).to_fixed(), "$2000.00");
        assert_eq!(Money::usd(dec!(12.5)).to_fixed(), "$12.50");
        assert_eq!(Money::usd(dec!(0.125)).to_fixed(), "$0.12");
        assert_eq!(Money::usd(dec!(-300)).to_fixed(), "-$300.00");
        assert_eq!(Money::usd(dec!(-0.001)).to_fixed(), "$0.00");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(dec!(0.02)), "2%");
        assert_eq!(percent(dec!(0.0125)), "1.25%");
    }

    #[test]
    fn test_money_display() {
        let money = Money::usd(dec!(1234.56));
        assert_eq!(format!("{}", money), "1234.56 USD");
        assert!(money.is_positive());
        assert!(!money.is_negative());
    }
}
