use std::str::FromStr;

use iso_currency::Currency;

use crate::errors::EngineError;

/// ISO 4217 currency code as it arrives from upstream collaborators.
#[derive(Debug)]
pub(crate) struct CurrencyCodeModel(pub(crate) Currency);

impl FromStr for CurrencyCodeModel {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s.trim())
            .map(CurrencyCodeModel)
            .ok_or_else(|| EngineError::InvalidCurrencyCode(s.to_string()))
    }
}

/// Serde bridges for optional currency fields, carried on the wire as ISO
/// 4217 codes.
pub(crate) fn serialize_opt_currency<S>(
    value: &Option<Currency>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(currency) => serializer.serialize_some(&currency.code()),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize_opt_currency<'de, D>(
    deserializer: D,
) -> Result<Option<Currency>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize as _;
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(code) if code.trim().is_empty() => Ok(None),
        Some(code) => CurrencyCodeModel::from_str(&code)
            .map(|m| Some(m.0))
            .map_err(serde::de::Error::custom),
    }
}
