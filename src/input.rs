//! Values handed to the `is_op` predicates
//!
//! Callers at the host boundary may pass anything: a raw record, an
//! already-wrapped op, a bare string, an unrelated JSON object or nothing
//! at all. `OpInput` names each of those shapes so that capability checks
//! are a plain match on the variant.

use crate::account_id::AccountIdOp;
use crate::types::Wallet;
use crate::wallet_op::WalletOp;
use crate::wallets_op::WalletsOp;

#[derive(Debug, Clone, Copy)]
pub enum OpInput<'a> {
    /// `null` / `undefined`
    Missing,
    Text(&'a str),
    /// Any other host object, e.g. `{}`
    Json(&'a serde_json::Value),
    Wallet(&'a Wallet),
    Wallets(&'a [Wallet]),
    WalletOp(WalletOp<'a>),
    WalletsOp(WalletsOp<'a>),
    AccountId(&'a AccountIdOp),
}

impl<'a> From<&'a str> for OpInput<'a> {
    fn from(value: &'a str) -> Self {
        OpInput::Text(value)
    }
}

impl<'a> From<&'a String> for OpInput<'a> {
    fn from(value: &'a String) -> Self {
        OpInput::Text(value.as_str())
    }
}

impl<'a> From<&'a serde_json::Value> for OpInput<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => OpInput::Missing,
            serde_json::Value::String(s) => OpInput::Text(s.as_str()),
            other => OpInput::Json(other),
        }
    }
}

impl<'a> From<&'a Wallet> for OpInput<'a> {
    fn from(value: &'a Wallet) -> Self {
        OpInput::Wallet(value)
    }
}

impl<'a> From<&'a [Wallet]> for OpInput<'a> {
    fn from(value: &'a [Wallet]) -> Self {
        OpInput::Wallets(value)
    }
}

impl<'a> From<&'a Vec<Wallet>> for OpInput<'a> {
    fn from(value: &'a Vec<Wallet>) -> Self {
        OpInput::Wallets(value.as_slice())
    }
}

impl<'a> From<WalletOp<'a>> for OpInput<'a> {
    fn from(value: WalletOp<'a>) -> Self {
        OpInput::WalletOp(value)
    }
}

impl<'a> From<&WalletOp<'a>> for OpInput<'a> {
    fn from(value: &WalletOp<'a>) -> Self {
        OpInput::WalletOp(*value)
    }
}

impl<'a> From<WalletsOp<'a>> for OpInput<'a> {
    fn from(value: WalletsOp<'a>) -> Self {
        OpInput::WalletsOp(value)
    }
}

impl<'a> From<&WalletsOp<'a>> for OpInput<'a> {
    fn from(value: &WalletsOp<'a>) -> Self {
        OpInput::WalletsOp(*value)
    }
}

impl<'a> From<&'a AccountIdOp> for OpInput<'a> {
    fn from(value: &'a AccountIdOp) -> Self {
        OpInput::AccountId(value)
    }
}

impl<'a, T: Into<OpInput<'a>>> From<Option<T>> for OpInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(OpInput::Missing, Into::into)
    }
}
