use iso_currency::Currency;
use rust_decimal::Decimal;
use serde_derive::{Deserialize, Serialize};

use super::account_code::AccountCode;

/// Analytic dimensions carried by a line: partner, project, contract, plus
/// five free classification slots whose meaning is configured outside the
/// engine.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LineDimensions {
    pub partner: Option<String>,
    pub project: Option<String>,
    pub contract: Option<String>,
    pub dim1: Option<String>,
    pub dim2: Option<String>,
    pub dim3: Option<String>,
    pub dim4: Option<String>,
    pub dim5: Option<String>,
}

/// One debit/credit entry of a voucher.
///
/// At least one of `debit_account` / `credit_account` must be set for the
/// line to validate; setting both makes the line a compound, self-contained
/// entry that contributes the same amount to both sides.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoucherLine {
    /// Absent until the line is persisted.
    pub id: Option<String>,
    pub description: String,
    pub debit_account: Option<AccountCode>,
    pub credit_account: Option<AccountCode>,
    /// Non-negative. Upstream collaborators may send it formatted (thousand
    /// separators, parenthesized negatives); those forms are normalized on
    /// deserialization.
    #[serde(
        deserialize_with = "crate::data::models::amount_model::deserialize_opt_amount"
    )]
    pub amount: Option<Decimal>,
    pub dimensions: LineDimensions,

    // Specialized-entry fields (inventory, foreign currency).
    pub product: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
    /// Carried on the wire as an ISO 4217 code.
    #[serde(
        serialize_with = "crate::data::models::currency_model::serialize_opt_currency",
        deserialize_with = "crate::data::models::currency_model::deserialize_opt_currency"
    )]
    pub currency: Option<Currency>,
    pub fx_rate: Option<Decimal>,
}

// Shorthand constructors.

impl VoucherLine {
    pub fn debit(account: impl Into<AccountCode>, amount: Decimal) -> Self {
        Self {
            debit_account: Some(account.into()),
            amount: Some(amount),
            ..Self::default()
        }
    }

    pub fn credit(account: impl Into<AccountCode>, amount: Decimal) -> Self {
        Self {
            credit_account: Some(account.into()),
            amount: Some(amount),
            ..Self::default()
        }
    }

    /// Compound entry hitting both sides at once. Balanced on its own.
    pub fn compound(
        debit_account: impl Into<AccountCode>,
        credit_account: impl Into<AccountCode>,
        amount: Decimal,
    ) -> Self {
        Self {
            debit_account: Some(debit_account.into()),
            credit_account: Some(credit_account.into()),
            amount: Some(amount),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn has_account(&self) -> bool {
        self.debit_account.is_some() || self.credit_account.is_some()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::account;

    #[test]
    fn constructors_set_the_expected_side() {
        let d = VoucherLine::debit(account("111"), dec!(10));
        assert_eq!(d.debit_account, Some(account("111")));
        assert_eq!(d.credit_account, None);

        let c = VoucherLine::credit(account("511"), dec!(10));
        assert_eq!(c.debit_account, None);
        assert_eq!(c.credit_account, Some(account("511")));

        let both = VoucherLine::compound(account("111"), account("511"), dec!(10));
        assert!(both.debit_account.is_some() && both.credit_account.is_some());
    }

    #[test]
    fn deserializes_formatted_amounts() {
        let line: VoucherLine = serde_json::from_str(
            r#"{"description":"opening stock","debit_account":"156","amount":"1,234,000.50"}"#,
        )
        .unwrap();
        assert_eq!(line.amount, Some(dec!(1234000.50)));
    }

    #[test]
    fn missing_amount_deserializes_to_none() {
        let line: VoucherLine =
            serde_json::from_str(r#"{"description":"memo only"}"#).unwrap();
        assert_eq!(line.amount, None);
        assert!(!line.has_account());
    }
}
