use serde_derive::{Deserialize, Serialize};

/// Chart-of-accounts code attached to the debit or credit side of a voucher
/// line.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountCode(pub(crate) String);

impl AccountCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Off-balance-sheet accounts live in the reserved zero-prefixed class
    /// (custodial and contingent items). Codes matching no known off-balance
    /// pattern are treated as on-balance, so they participate in the
    /// double-entry equality check.
    pub fn is_off_balance(&self) -> bool {
        self.0.starts_with('0')
    }
}

// Shorthand constructor.

pub fn account(code: impl Into<String>) -> AccountCode {
    AccountCode(code.into())
}

impl From<&str> for AccountCode {
    fn from(code: &str) -> Self {
        AccountCode(code.to_string())
    }
}

impl std::fmt::Display for AccountCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
