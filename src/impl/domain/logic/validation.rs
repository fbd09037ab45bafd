use rust_decimal::Decimal;
use tracing::debug;

use super::{balance_checker::BalanceChecker, period_lock::is_date_locked};
use crate::entities::Voucher;

/// Runs every voucher check and collects all violations into one ordered
/// list of human-readable messages (empty list = valid).
///
/// There is no fail-fast short-circuiting: a single call surfaces every
/// problem at once, so the presentation layer can show the complete picture.
/// Messages are rendered verbatim downstream; no machine-parseable codes.
pub struct VoucherValidator {
    balance_checker: BalanceChecker,
}

impl VoucherValidator {
    pub fn new() -> Self {
        Self {
            balance_checker: BalanceChecker::new(),
        }
    }

    /// Validator using a non-default off-balance classification.
    pub fn with_balance_checker(balance_checker: BalanceChecker) -> Self {
        Self { balance_checker }
    }

    pub fn validate(&self, voucher: &Voucher, lock_until: Option<&str>) -> Vec<String> {
        let mut violations = Vec::new();

        // Required header fields.
        if voucher.doc_no.trim().is_empty() {
            violations.push("Document number is required.".to_string());
        }
        if voucher.doc_date.trim().is_empty() {
            violations.push("Document date is required.".to_string());
        }
        if voucher.description.trim().is_empty() {
            violations.push("Description is required.".to_string());
        }

        // Fiscal-period lock.
        if let (Some(post_date), Some(lock_until)) = (voucher.post_date.as_deref(), lock_until) {
            if is_date_locked(post_date, Some(lock_until)) {
                violations.push(format!(
                    "Posting date falls within a locked period (locked through {lock_until})."
                ));
            }
        }

        // Lines.
        if voucher.lines.is_empty() {
            violations.push("Voucher needs at least one line.".to_string());
        }
        for (i, line) in voucher.lines.iter().enumerate() {
            let n = i + 1;
            if !line.has_account() {
                violations.push(format!(
                    "Line {n}: either a debit or a credit account is required."
                ));
            }
            match line.amount {
                Some(amount) if amount > Decimal::ZERO => {}
                _ => violations.push(format!("Line {n}: amount must be greater than zero.")),
            }
        }

        // Double-entry balance.
        let report = self.balance_checker.check(&voucher.lines);
        if !report.is_balanced {
            violations.push(format!(
                "Voucher is not balanced (difference: {}).",
                report.difference
            ));
        }

        debug!(
            voucher_type = voucher.voucher_type.display_name(),
            doc_no = %voucher.doc_no,
            violations = violations.len(),
            "voucher validated"
        );
        violations
    }
}

impl Default for VoucherValidator {
    fn default() -> Self {
        Self::new()
    }
}
