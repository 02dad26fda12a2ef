//! Wallet and account records
//!
//! Plain data as supplied by the surrounding application. JSON keys follow
//! the host's camelCase naming (`hdPath`, `seedId`, `keyId`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::account_id::AccountIdOp;
use crate::error::OpsError;

/// A wallet: a named container of accounts, identified by a UUID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: WalletId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub accounts: Vec<Account>,
}

/// Wallet UUID together with the exact text it was supplied as
///
/// Lookups compare the text, so an id is found by the same string the host
/// used for it, whatever its letter case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletId {
    value: String,
    uuid: Uuid,
}

impl WalletId {
    pub fn parse(value: &str) -> Result<Self, OpsError> {
        let uuid = Uuid::parse_str(value)
            .map_err(|e| OpsError::InvalidWalletId(format!("{}: {}", value, e)))?;
        Ok(Self {
            value: value.to_string(),
            uuid,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

impl From<Uuid> for WalletId {
    fn from(uuid: Uuid) -> Self {
        Self {
            value: uuid.hyphenated().to_string(),
            uuid,
        }
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for WalletId {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for WalletId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for WalletId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

/// A single key-backed entry within a wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Composite `<wallet-uuid>-<index>` id, unvalidated
    pub id: String,
    pub blockchain: Blockchain,
    pub address: String,
    pub key: AccountKey,
}

impl Account {
    /// Validate the raw id into an [`AccountIdOp`]
    pub fn account_id(&self) -> Result<AccountIdOp, OpsError> {
        AccountIdOp::of(&self.id)
    }

    pub fn is_hd(&self) -> bool {
        matches!(self.key, AccountKey::SeedHd { .. })
    }

    /// Seed backing this account, for `seed-hd` keys
    pub fn seed_id(&self) -> Option<Uuid> {
        match &self.key {
            AccountKey::SeedHd { seed_id, .. } => Some(*seed_id),
            _ => None,
        }
    }

    /// Address comparison; hex addresses are case-insensitive
    pub fn has_address(&self, address: &str) -> bool {
        self.address.eq_ignore_ascii_case(address)
    }
}

/// Reference to the key material behind an account
///
/// Only the reference is carried here. Key storage and derivation belong
/// to the key-management subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AccountKey {
    /// Derived from a stored seed at `hd_path`
    #[serde(rename = "seed-hd", rename_all = "camelCase")]
    SeedHd { hd_path: String, seed_id: Uuid },

    /// Standalone private key held by the key store
    #[serde(rename = "pk", rename_all = "camelCase")]
    PrivateKey { key_id: Uuid },

    /// Any key type this layer does not interpret
    #[serde(other)]
    Unknown,
}

/// Blockchain integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blockchain(pub u32);

impl Blockchain {
    pub const ETHEREUM: Blockchain = Blockchain(100);
    pub const ETHEREUM_CLASSIC: Blockchain = Blockchain(101);
    pub const TESTNET_MORDEN: Blockchain = Blockchain(10001);
    pub const TESTNET_KOVAN: Blockchain = Blockchain(10002);

    pub fn code(&self) -> u32 {
        self.0
    }

    /// Whether the code is one of the Ethereum-family chains
    pub fn is_ethereum_family(&self) -> bool {
        matches!(
            *self,
            Self::ETHEREUM | Self::ETHEREUM_CLASSIC | Self::TESTNET_MORDEN | Self::TESTNET_KOVAN
        )
    }
}

impl From<u32> for Blockchain {
    fn from(code: u32) -> Self {
        Blockchain(code)
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Blockchain {
    type Err = OpsError;

    /// Accepts a decimal code or a chain name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if let Ok(code) = value.parse::<u32>() {
            return Ok(Blockchain(code));
        }
        match value.to_lowercase().as_str() {
            "eth" | "ethereum" => Ok(Self::ETHEREUM),
            "etc" | "ethereum-classic" | "ethereum_classic" => Ok(Self::ETHEREUM_CLASSIC),
            "morden" => Ok(Self::TESTNET_MORDEN),
            "kovan" => Ok(Self::TESTNET_KOVAN),
            _ => Err(OpsError::InvalidChain(s.to_string())),
        }
    }
}
