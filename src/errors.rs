use thiserror::Error;

/// Errors raised at the engine's boundaries (parsing collaborator-supplied
/// values, reading settings).
///
/// Business-rule violations are deliberately *not* errors: the validation
/// pipeline always completes and reports them as a list of human-readable
/// messages.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid ISO date: '{0}'.")]
    InvalidIsoDate(String),

    #[error("Invalid amount: '{0}'.")]
    InvalidAmount(String),

    #[error("Invalid ISO currency code: '{0}'.")]
    InvalidCurrencyCode(String),

    #[error("Unknown voucher type: '{0}'.")]
    UnknownVoucherType(String),

    #[error("Invalid settings record: {0}.")]
    InvalidSettings(String),

    #[error("Settings unavailable: {0}.")]
    SettingsUnavailable(String),
}
