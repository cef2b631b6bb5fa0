//! Report exporters

use crate::details::DetailsSource;
use crate::style::BalanceStyle;

/// Trait for turning a details source into text
pub trait ReportExporter {
    fn export(&self, source: &dyn DetailsSource) -> String;
}

/// Indented plain-text exporter.
///
/// ```text
/// Savings Account Details (ID: S123):
///    Holder: John Doe
///    Balance: $1000.00
///    Interest Rate: 2%
/// ```
#[derive(Debug, Clone)]
pub struct TextExporter {
    style: BalanceStyle,
    indent: usize,
}

impl Default for TextExporter {
    fn default() -> Self {
        Self {
            style: BalanceStyle::default(),
            indent: 3,
        }
    }
}

impl TextExporter {
    pub fn new(style: BalanceStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn style(&self) -> BalanceStyle {
        self.style
    }
}

impl ReportExporter for TextExporter {
    fn export(&self, source: &dyn DetailsSource) -> String {
        let mut output = source.title();
        output.push('\n');

        let pad = " ".repeat(self.indent);
        for row in source.rows(self.style) {
            output.push_str(&format!("{}{}: {}\n", pad, row.label, row.value));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::GenericDetails;
    use duobank_core::{Account, CurrentAccount, SavingsAccount};
    use rust_decimal_macros::dec;

    #[test]
    fn test_savings_export() {
        let savings = SavingsAccount::new("S123", "John Doe", dec!(1000), dec!(0.02));
        let text = TextExporter::default().export(&savings);
        assert_eq!(
            text,
            "Savings Account Details (ID: S123):\n   Holder: John Doe\n   Balance: $1000.00\n   Interest Rate: 2%\n"
        );
    }

    #[test]
    fn test_current_export() {
        let current = CurrentAccount::new("C456", "Jane Doe", dec!(2000), dec!(500));
        let text = TextExporter::new(BalanceStyle::Legacy).export(&current);
        assert_eq!(
            text,
            "Current Account Details (ID: C456):\n   Holder: Jane Doe\n   Balance: $2000.00\n   Overdraft Limit: $500.00\n"
        );
    }

    #[test]
    fn test_generic_export() {
        let current = CurrentAccount::new("C456", "Jane Doe", dec!(700), dec!(500));
        let text = TextExporter::default().export(&GenericDetails(&current));
        assert_eq!(
            text,
            "Account Details for Current Account (ID: C456):\n   Holder: Jane Doe\n   Balance: $700.00\n"
        );
    }

    #[test]
    fn test_export_is_idempotent() {
        let mut savings = SavingsAccount::new("S123", "John Doe", dec!(1000), dec!(0.02));
        let exporter = TextExporter::new(BalanceStyle::Fixed);

        let first = exporter.export(&savings);
        assert_eq!(first, exporter.export(&savings));

        savings.deposit(dec!(0.5)).unwrap();
        assert_ne!(first, exporter.export(&savings));
    }

    #[test]
    fn test_custom_indent() {
        let savings = SavingsAccount::new("S1", "A", dec!(100), dec!(0));
        let text = TextExporter::default().with_indent(1).export(&savings);
        assert!(text.contains("\n Holder: A\n"));
        assert!(text.ends_with(" Interest Rate: 0%\n"));
    }
}
