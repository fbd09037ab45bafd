use async_trait::async_trait;

use crate::errors::EngineError;

/// Seam through which the persistence layer supplies posting-control
/// settings.
///
/// The same layer also owns the responsibilities this engine delegates
/// outward: enforcing `doc_no` uniqueness (unique index plus regeneration on
/// conflict) and atomic, exactly-once status transitions. The engine only
/// reads from it.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Inclusive end of the closed fiscal period, as a zero-padded ISO date
    /// string, or `None` when no period is locked.
    async fn lock_until_date(&self) -> Result<Option<String>, EngineError>;
}
