use rust_decimal::Decimal;
use serde_derive::Serialize;

/// Result of running the balance checker over a set of voucher lines.
///
/// All figures are exact decimals; any display formatting (separators,
/// decimal marks) belongs to the presentation layer.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct BalanceReport {
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    /// `total_debit - total_credit`, signed.
    pub difference: Decimal,
    pub is_balanced: bool,
    /// Off-balance-sheet sums are tracked separately and never enter the
    /// on-balance totals or the balance determination.
    pub off_balance_debit: Decimal,
    pub off_balance_credit: Decimal,
}

impl BalanceReport {
    /// Report for an empty line set: all zeros, balanced.
    pub fn empty() -> Self {
        Self {
            total_debit: Decimal::ZERO,
            total_credit: Decimal::ZERO,
            difference: Decimal::ZERO,
            is_balanced: true,
            off_balance_debit: Decimal::ZERO,
            off_balance_credit: Decimal::ZERO,
        }
    }
}
