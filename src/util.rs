use crate::{
    data::repositories::settings_repository_impl::SettingsRepositoryImpl,
    domain::{
        repositories::settings_repository::SettingsRepository,
        usecases::posting_usecase::{PostingUsecase as _, PostingUsecaseImpl},
    },
    entities::Voucher,
    errors::EngineError,
};

/// One-stop wiring of the voucher engine.
///
/// All operations are pure computations over in-memory values; the engine is
/// safe to share across any number of concurrent tasks. Two responsibilities
/// are deliberately delegated to the persistence layer behind
/// [`SettingsRepository`]: `doc_no` uniqueness (unique index plus retry on
/// conflict, since suggested numbers are advisory) and exactly-once posting
/// (transactional check-and-set on the status column).
pub struct VoucherEngineUtil<R = SettingsRepositoryImpl>
where
    R: SettingsRepository,
{
    posting_usecase: PostingUsecaseImpl<R>,
}

impl VoucherEngineUtil<SettingsRepositoryImpl> {
    /// Engine with no active period lock.
    pub fn new() -> Self {
        Self {
            posting_usecase: PostingUsecaseImpl::new(),
        }
    }

    /// Engine reading its settings from a JSON settings record, e.g.
    /// `{"lock_until": "2024-01-31"}`.
    pub fn with_settings_json(record: &str) -> Result<Self, EngineError> {
        Ok(Self {
            posting_usecase: PostingUsecaseImpl::with_repository(
                SettingsRepositoryImpl::from_json(record)?,
            ),
        })
    }
}

impl Default for VoucherEngineUtil<SettingsRepositoryImpl> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> VoucherEngineUtil<R>
where
    R: SettingsRepository,
{
    /// Engine backed by a caller-supplied settings source.
    pub fn with_repository(settings_repository: R) -> Self {
        Self {
            posting_usecase: PostingUsecaseImpl::with_repository(settings_repository),
        }
    }

    /// Validates a voucher for save/post. Empty list = valid; otherwise an
    /// ordered list of human-readable violation messages, all collected in
    /// one pass.
    pub async fn validate(&self, voucher: &Voucher) -> Result<Vec<String>, EngineError> {
        self.posting_usecase.validate_voucher(voucher).await
    }

    /// Proposes an advisory document number for the voucher.
    pub async fn suggest_doc_no(&self, voucher: &Voucher) -> Result<String, EngineError> {
        self.posting_usecase.suggest_doc_no(voucher).await
    }

    /// Duplicates a voucher of any status into an independent new draft.
    pub async fn duplicate(&self, voucher: &Voucher) -> Result<Voucher, EngineError> {
        self.posting_usecase.duplicate_voucher(voucher).await
    }
}
