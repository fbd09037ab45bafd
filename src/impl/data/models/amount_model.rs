use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::EngineError;

/// Amount as it arrives from upstream collaborators: thousand separators
/// allowed, parentheses denote negation.
#[derive(Debug)]
pub(crate) struct AmountModel(pub(crate) Decimal);

impl FromStr for AmountModel {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(',', "");
        let trimmed = raw.trim();
        let is_negative = trimmed.starts_with('(') && trimmed.ends_with(')');
        let numeric_part = trimmed.trim_matches(|c| c == '(' || c == ')');
        let amount = Decimal::from_str(numeric_part)
            .map_err(|_| EngineError::InvalidAmount(s.to_string()))?;
        Ok(AmountModel(if is_negative { -amount } else { amount }))
    }
}

/// Serde bridge for optional amount fields: accepts plain numbers as well as
/// formatted strings; blank strings count as absent.
pub(crate) fn deserialize_opt_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde_derive::Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(Decimal),
        Text(String),
    }

    use serde::Deserialize as _;
    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(d)) => Ok(Some(d)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => AmountModel::from_str(&s)
            .map(|m| Some(m.0))
            .map_err(serde::de::Error::custom),
    }
}
