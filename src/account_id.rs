//! Composite account identifiers
//!
//! An account id is the owning wallet's UUID, a `-` separator and a
//! non-negative decimal index: `d0659bdd-8090-4b08-90a2-3b951cb98b37-0`.
//! The whole string is matched by one anchored pattern, so trailing
//! garbage such as `...-foobar` never slips through a split.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::error::OpsError;
use crate::input::OpInput;
use crate::types::WalletId;

static ACCOUNT_ID_PATTERN: OnceLock<Regex> = OnceLock::new();

fn account_id_pattern() -> &'static Regex {
    ACCOUNT_ID_PATTERN.get_or_init(|| {
        Regex::new(
            r"^([0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12})-([0-9]+)$",
        )
        .expect("account id pattern is valid")
    })
}

/// Validated `<wallet-uuid>-<index>` account identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountIdOp {
    value: String,
    wallet_id: Uuid,
    index: u64,
}

impl AccountIdOp {
    /// Parse and validate an account id
    pub fn of(value: &str) -> Result<Self, OpsError> {
        let captures = match account_id_pattern().captures(value) {
            Some(captures) => captures,
            None => return Err(OpsError::validation(value, Self::rejection_reason(value))),
        };

        let wallet_id = Uuid::parse_str(&captures[1])
            .map_err(|e| OpsError::validation(value, format!("malformed wallet id: {}", e)))?;
        let index = captures[2]
            .parse::<u64>()
            .map_err(|_| OpsError::validation(value, "index is out of range"))?;

        Ok(Self {
            value: value.to_string(),
            wallet_id,
            index,
        })
    }

    /// Build an id from its parts, keeping the wallet id's text
    pub fn create(wallet_id: &WalletId, index: u64) -> Self {
        Self {
            value: format!("{}-{}", wallet_id, index),
            wallet_id: wallet_id.uuid(),
            index,
        }
    }

    /// True only for an already validated [`AccountIdOp`]; plain strings are
    /// not ops even when well-formed
    pub fn is_op<'v>(value: impl Into<OpInput<'v>>) -> bool {
        matches!(value.into(), OpInput::AccountId(_))
    }

    /// Id of the wallet that owns this account
    pub fn wallet_id(&self) -> Uuid {
        self.wallet_id
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether this id names an account of the given wallet
    pub fn belongs_to(&self, wallet_id: &Uuid) -> bool {
        self.wallet_id == *wallet_id
    }

    fn rejection_reason(value: &str) -> &'static str {
        if value.is_empty() {
            "value is empty"
        } else if Uuid::parse_str(value).is_ok() {
            "missing account index"
        } else {
            "expected <wallet-uuid>-<index>"
        }
    }
}

impl fmt::Display for AccountIdOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for AccountIdOp {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for AccountIdOp {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl TryFrom<&str> for AccountIdOp {
    type Error = OpsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl TryFrom<Option<&str>> for AccountIdOp {
    type Error = OpsError;

    fn try_from(value: Option<&str>) -> Result<Self, Self::Error> {
        match value {
            Some(value) => Self::of(value),
            None => Err(OpsError::validation("", "account id is missing")),
        }
    }
}

impl Serialize for AccountIdOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for AccountIdOp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::of(&value).map_err(serde::de::Error::custom)
    }
}
