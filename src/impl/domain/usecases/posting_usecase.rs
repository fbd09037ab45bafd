use std::str::FromStr;

use async_trait::async_trait;
use tracing::debug;

use crate::{
    data::{
        models::iso_date_model::IsoDateModel,
        repositories::settings_repository_impl::SettingsRepositoryImpl,
    },
    domain::{
        logic::{doc_numbering::generate_doc_no, duplication, validation::VoucherValidator},
        repositories::settings_repository::SettingsRepository,
    },
    entities::Voucher,
    errors::EngineError,
};

#[async_trait]
pub trait PostingUsecase: Send + Sync {
    /// Full pre-save / pre-post validation against the active period lock.
    /// Empty list = accept; otherwise the messages are surfaced verbatim in
    /// the caller's error response.
    async fn validate_voucher(&self, voucher: &Voucher) -> Result<Vec<String>, EngineError>;

    /// Advisory doc_no candidate for the voucher's type and document date
    /// (today when the document date is absent or unparsable). Uniqueness is
    /// the persistence layer's concern.
    async fn suggest_doc_no(&self, voucher: &Voucher) -> Result<String, EngineError>;

    /// Independent draft copy with fresh identifiers, dates and doc_no.
    async fn duplicate_voucher(&self, voucher: &Voucher) -> Result<Voucher, EngineError>;
}

pub(crate) struct PostingUsecaseImpl<
    R = SettingsRepositoryImpl, // Default.
> where
    R: SettingsRepository,
{
    settings_repository: R,
    validator: VoucherValidator,
}

#[async_trait]
impl<R> PostingUsecase for PostingUsecaseImpl<R>
where
    R: SettingsRepository,
{
    async fn validate_voucher(&self, voucher: &Voucher) -> Result<Vec<String>, EngineError> {
        let lock_until = self.settings_repository.lock_until_date().await?;
        let violations = self.validator.validate(voucher, lock_until.as_deref());
        debug!(
            doc_no = %voucher.doc_no,
            violations = violations.len(),
            "posting validation finished"
        );
        Ok(violations)
    }

    async fn suggest_doc_no(&self, voucher: &Voucher) -> Result<String, EngineError> {
        let date = IsoDateModel::from_str(&voucher.doc_date).ok().map(|m| m.0);
        Ok(generate_doc_no(voucher.voucher_type, date))
    }

    async fn duplicate_voucher(&self, voucher: &Voucher) -> Result<Voucher, EngineError> {
        Ok(duplication::duplicate(voucher))
    }
}

impl PostingUsecaseImpl<SettingsRepositoryImpl> {
    pub(crate) fn new() -> Self {
        Self::with_repository(SettingsRepositoryImpl::unlocked())
    }
}

impl<R> PostingUsecaseImpl<R>
where
    R: SettingsRepository,
{
    pub(crate) fn with_repository(settings_repository: R) -> Self {
        Self {
            settings_repository,
            validator: VoucherValidator::new(),
        }
    }
}
