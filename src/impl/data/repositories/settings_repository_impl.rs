use async_trait::async_trait;
use serde_derive::Deserialize;
use tracing::trace;

use crate::{
    domain::repositories::settings_repository::SettingsRepository, errors::EngineError,
};

/// Posting-control section of the persisted settings record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountingSettingsModel {
    /// Inclusive end of the closed fiscal period, zero-padded ISO form.
    /// Blank means no period is locked.
    pub lock_until: Option<String>,
}

/// In-memory settings source backed by a deserialized settings record.
///
/// Production deployments implement [`SettingsRepository`] over their own
/// storage; this impl serves embedded use and tests.
pub struct SettingsRepositoryImpl {
    settings: AccountingSettingsModel,
}

impl SettingsRepositoryImpl {
    pub fn new(settings: AccountingSettingsModel) -> Self {
        Self { settings }
    }

    /// Repository with no active period lock.
    pub fn unlocked() -> Self {
        Self::new(AccountingSettingsModel::default())
    }

    /// Reads the settings record from its JSON form, e.g.
    /// `{"lock_until": "2024-01-31"}`.
    pub fn from_json(record: &str) -> Result<Self, EngineError> {
        let settings = serde_json::from_str(record)
            .map_err(|e| EngineError::InvalidSettings(e.to_string()))?;
        Ok(Self::new(settings))
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryImpl {
    async fn lock_until_date(&self) -> Result<Option<String>, EngineError> {
        let lock = self
            .settings
            .lock_until
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);
        trace!(?lock, "resolved active period lock");
        Ok(lock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_the_lock_date_from_a_json_record() {
        let repo = SettingsRepositoryImpl::from_json(r#"{"lock_until": "2024-01-31"}"#).unwrap();
        assert_eq!(
            repo.lock_until_date().await.unwrap().as_deref(),
            Some("2024-01-31")
        );
    }

    #[tokio::test]
    async fn blank_or_missing_lock_means_no_lock() {
        let repo = SettingsRepositoryImpl::from_json(r#"{"lock_until": "  "}"#).unwrap();
        assert_eq!(repo.lock_until_date().await.unwrap(), None);

        let repo = SettingsRepositoryImpl::from_json("{}").unwrap();
        assert_eq!(repo.lock_until_date().await.unwrap(), None);

        let repo = SettingsRepositoryImpl::unlocked();
        assert_eq!(repo.lock_until_date().await.unwrap(), None);
    }

    #[test]
    fn malformed_record_is_an_error() {
        assert!(SettingsRepositoryImpl::from_json("not json").is_err());
    }
}
