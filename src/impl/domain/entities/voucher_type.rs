use std::{collections::HashMap, str::FromStr, sync::LazyLock};

use serde_derive::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Statutory voucher categories. The set is closed: every persisted voucher
/// carries exactly one of these.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum VoucherType {
    #[serde(rename = "GENERAL")]
    General,
    #[serde(rename = "CASH_IN")]
    CashReceipt,
    #[serde(rename = "CASH_OUT")]
    CashPayment,
    #[serde(rename = "BANK_IN")]
    BankReceipt,
    #[serde(rename = "BANK_OUT")]
    BankPayment,
    #[serde(rename = "PURCHASE")]
    Purchase,
    #[serde(rename = "SALE")]
    Sale,
    #[serde(rename = "CLOSING")]
    Closing,
    #[serde(rename = "ALLOCATION")]
    Allocation,
    #[serde(rename = "DEPRECIATION")]
    Depreciation,
    #[serde(rename = "REVALUATION")]
    Revaluation,
    #[serde(rename = "ADJUSTMENT")]
    Adjustment,
}

/// Prefix used when a type is somehow missing from the prefix table.
pub const FALLBACK_DOC_NO_PREFIX: &str = "CT";

/// Document-number prefix per voucher type. Read-only, built once.
pub static DOC_NO_PREFIXES: LazyLock<HashMap<VoucherType, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (VoucherType::General, "PKT"),
        (VoucherType::CashReceipt, "PT"),
        (VoucherType::CashPayment, "PC"),
        (VoucherType::BankReceipt, "BC"),
        (VoucherType::BankPayment, "BN"),
        (VoucherType::Purchase, "MH"),
        (VoucherType::Sale, "BH"),
        (VoucherType::Closing, "KC"),
        (VoucherType::Allocation, "PB"),
        (VoucherType::Depreciation, "KH"),
        (VoucherType::Revaluation, "DG"),
        (VoucherType::Adjustment, "DC"),
    ])
});

/// Human-readable name per voucher type. Read-only, built once.
pub static DISPLAY_NAMES: LazyLock<HashMap<VoucherType, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (VoucherType::General, "General ledger entry"),
        (VoucherType::CashReceipt, "Cash receipt"),
        (VoucherType::CashPayment, "Cash payment"),
        (VoucherType::BankReceipt, "Bank receipt"),
        (VoucherType::BankPayment, "Bank payment"),
        (VoucherType::Purchase, "Purchase"),
        (VoucherType::Sale, "Sale"),
        (VoucherType::Closing, "Closing entry"),
        (VoucherType::Allocation, "Allocation"),
        (VoucherType::Depreciation, "Depreciation"),
        (VoucherType::Revaluation, "Revaluation"),
        (VoucherType::Adjustment, "Adjustment"),
    ])
});

impl VoucherType {
    pub fn doc_no_prefix(&self) -> &'static str {
        DOC_NO_PREFIXES
            .get(self)
            .copied()
            .unwrap_or(FALLBACK_DOC_NO_PREFIX)
    }

    pub fn display_name(&self) -> &'static str {
        DISPLAY_NAMES.get(self).copied().unwrap_or("Voucher")
    }

    /// Stable wire name, matching the serde representation.
    pub fn wire_name(&self) -> &'static str {
        match self {
            VoucherType::General => "GENERAL",
            VoucherType::CashReceipt => "CASH_IN",
            VoucherType::CashPayment => "CASH_OUT",
            VoucherType::BankReceipt => "BANK_IN",
            VoucherType::BankPayment => "BANK_OUT",
            VoucherType::Purchase => "PURCHASE",
            VoucherType::Sale => "SALE",
            VoucherType::Closing => "CLOSING",
            VoucherType::Allocation => "ALLOCATION",
            VoucherType::Depreciation => "DEPRECIATION",
            VoucherType::Revaluation => "REVALUATION",
            VoucherType::Adjustment => "ADJUSTMENT",
        }
    }

    pub const ALL: [VoucherType; 12] = [
        VoucherType::General,
        VoucherType::CashReceipt,
        VoucherType::CashPayment,
        VoucherType::BankReceipt,
        VoucherType::BankPayment,
        VoucherType::Purchase,
        VoucherType::Sale,
        VoucherType::Closing,
        VoucherType::Allocation,
        VoucherType::Depreciation,
        VoucherType::Revaluation,
        VoucherType::Adjustment,
    ];
}

impl Default for VoucherType {
    fn default() -> Self {
        VoucherType::General
    }
}

impl std::fmt::Display for VoucherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl FromStr for VoucherType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VoucherType::ALL
            .into_iter()
            .find(|t| t.wire_name() == s)
            .ok_or_else(|| EngineError::UnknownVoucherType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_prefix_and_display_name() {
        for t in VoucherType::ALL {
            assert!(DOC_NO_PREFIXES.contains_key(&t), "missing prefix: {t}");
            assert!(DISPLAY_NAMES.contains_key(&t), "missing name: {t}");
        }
    }

    #[test]
    fn cash_receipt_prefix() {
        assert_eq!(VoucherType::CashReceipt.doc_no_prefix(), "PT");
    }

    #[test]
    fn wire_names_round_trip() {
        for t in VoucherType::ALL {
            assert_eq!(t.wire_name().parse::<VoucherType>().unwrap(), t);
        }
        assert!("JOURNAL".parse::<VoucherType>().is_err());
    }
}
