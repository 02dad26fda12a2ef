//! Error types for wallet operations
//!
//! Validation and exact-lookup failures are hard errors. Search-style
//! queries report absence through `Option` and never reach this type.

use thiserror::Error;

/// Core error type for wallet operations
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum OpsError {
    /// Account identifier is missing or does not match `<uuid>-<index>`
    #[error("Invalid account id {value:?}: {reason}")]
    Validation { value: String, reason: String },

    /// Wallet id that is not a UUID
    #[error("Invalid wallet id: {0}")]
    InvalidWalletId(String),

    /// No wallet in the collection has the requested id
    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    /// A lookup needs a blockchain and the configuration names none
    #[error("Blockchain is not configured")]
    MissingChain,

    /// Blockchain name or code that does not parse
    #[error("Invalid blockchain: {0}")]
    InvalidChain(String),
}

impl OpsError {
    /// Create a validation error for an account identifier
    pub fn validation(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a wallet not found error
    pub fn wallet_not_found(id: impl Into<String>) -> Self {
        Self::WalletNotFound(id.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::WalletNotFound(_))
    }
}
