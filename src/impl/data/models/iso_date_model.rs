use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::EngineError;

/// Strict ISO date as it arrives from upstream collaborators.
#[derive(Debug)]
pub(crate) struct IsoDateModel(pub(crate) NaiveDate);

impl FromStr for IsoDateModel {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| EngineError::InvalidIsoDate(s.to_string()))?;
        Ok(IsoDateModel(d))
    }
}
