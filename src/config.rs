//! Operations configuration from environment variables
//!
//! Supplies the default blockchain for address lookups that are not given
//! one explicitly.

use std::env;

use crate::error::OpsError;
use crate::types::Blockchain;

/// Environment variable naming the default blockchain
pub const CHAIN_ENV: &str = "VAULT_CHAIN";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpsConfig {
    /// Blockchain used by config-driven lookups
    pub chain: Option<Blockchain>,
}

impl OpsConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `VAULT_CHAIN`: chain name (`eth`, `etc`, `morden`, `kovan`) or
    ///   numeric blockchain code. Unset means no default chain.
    pub fn from_env() -> Self {
        let value = env::var(CHAIN_ENV).unwrap_or_default();
        Self {
            chain: Self::parse_chain(&value),
        }
    }

    fn parse_chain(value: &str) -> Option<Blockchain> {
        if value.trim().is_empty() {
            return None;
        }
        match value.parse::<Blockchain>() {
            Ok(chain) => {
                log::info!("Using blockchain {} from {}", chain, CHAIN_ENV);
                Some(chain)
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", CHAIN_ENV, e);
                None
            }
        }
    }

    pub fn with_chain(mut self, chain: Blockchain) -> Self {
        self.chain = Some(chain);
        self
    }

    /// Configured blockchain, or [`OpsError::MissingChain`]
    pub fn blockchain(&self) -> Result<Blockchain, OpsError> {
        self.chain.ok_or(OpsError::MissingChain)
    }
}
