use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::entities::{AccountCode, BalanceReport, VoucherLine};

/// Maximum absolute debit/credit difference still considered balanced.
/// Fixed, not configurable per call.
pub const BALANCE_TOLERANCE: Decimal = dec!(0.01);

/// Computes debit/credit totals and balance status for a set of voucher
/// lines.
///
/// The off-balance classifier is injectable so the reserved-range rule can
/// change independently of the arithmetic; the default is the zero-prefixed
/// account class (see [`AccountCode::is_off_balance`]).
pub struct BalanceChecker {
    off_balance: fn(&AccountCode) -> bool,
}

impl BalanceChecker {
    pub fn new() -> Self {
        Self {
            off_balance: AccountCode::is_off_balance,
        }
    }

    pub fn with_classifier(off_balance: fn(&AccountCode) -> bool) -> Self {
        Self { off_balance }
    }

    /// Accumulates each line's amount into the debit total when its debit
    /// account is on-balance and into the credit total when its credit
    /// account is on-balance. A line with both accounts set contributes to
    /// both sides (a compound entry balances itself). Off-balance sides are
    /// summed separately and excluded from the balance determination.
    pub fn check(&self, lines: &[VoucherLine]) -> BalanceReport {
        let mut total_debit = Decimal::ZERO;
        let mut total_credit = Decimal::ZERO;
        let mut off_balance_debit = Decimal::ZERO;
        let mut off_balance_credit = Decimal::ZERO;

        for line in lines {
            let amount = line.amount.unwrap_or(Decimal::ZERO);
            if let Some(debit) = &line.debit_account {
                if (self.off_balance)(debit) {
                    off_balance_debit += amount;
                } else {
                    total_debit += amount;
                }
            }
            if let Some(credit) = &line.credit_account {
                if (self.off_balance)(credit) {
                    off_balance_credit += amount;
                } else {
                    total_credit += amount;
                }
            }
        }

        let difference = total_debit - total_credit;
        BalanceReport {
            total_debit,
            total_credit,
            difference,
            is_balanced: difference.abs() <= BALANCE_TOLERANCE,
            off_balance_debit,
            off_balance_credit,
        }
    }
}

impl Default for BalanceChecker {
    fn default() -> Self {
        Self::new()
    }
}
