//! Single wallet operations
//!
//! `WalletOp` is a borrowed view over a [`Wallet`] record. Wrapping never
//! copies the record and nothing here mutates it.

use uuid::Uuid;

use crate::account_id::AccountIdOp;
use crate::input::OpInput;
use crate::types::{Account, Blockchain, Wallet, WalletId};

/// Read-only operations over one wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletOp<'a> {
    value: &'a Wallet,
}

/// Either a raw wallet record or an existing op
#[derive(Debug, Clone, Copy)]
pub enum WalletSource<'a> {
    Raw(&'a Wallet),
    Op(WalletOp<'a>),
}

impl<'a> From<&'a Wallet> for WalletSource<'a> {
    fn from(value: &'a Wallet) -> Self {
        WalletSource::Raw(value)
    }
}

impl<'a> From<WalletOp<'a>> for WalletSource<'a> {
    fn from(value: WalletOp<'a>) -> Self {
        WalletSource::Op(value)
    }
}

impl<'a> From<&WalletOp<'a>> for WalletSource<'a> {
    fn from(value: &WalletOp<'a>) -> Self {
        WalletSource::Op(*value)
    }
}

impl<'a> WalletOp<'a> {
    pub fn of(value: &'a Wallet) -> Self {
        Self { value }
    }

    /// True only for values that are already a `WalletOp`
    pub fn is_op<'v>(value: impl Into<OpInput<'v>>) -> bool {
        matches!(value.into(), OpInput::WalletOp(_))
    }

    /// Wrap a raw wallet, or return an existing op unchanged
    pub fn as_op(value: impl Into<WalletSource<'a>>) -> Self {
        match value.into() {
            WalletSource::Raw(wallet) => Self::of(wallet),
            WalletSource::Op(op) => op,
        }
    }

    /// Underlying record
    pub fn value(&self) -> &'a Wallet {
        self.value
    }

    pub fn id(&self) -> &'a WalletId {
        &self.value.id
    }

    pub fn name(&self) -> Option<&'a str> {
        self.value.name.as_deref()
    }

    pub fn accounts(&self) -> &'a [Account] {
        &self.value.accounts
    }

    /// Account with exactly this id
    pub fn get_account(&self, account_id: &str) -> Option<&'a Account> {
        self.value.accounts.iter().find(|a| a.id == account_id)
    }

    pub fn contains_account(&self, account_id: &str) -> bool {
        self.get_account(account_id).is_some()
    }

    /// First account holding `address`, optionally restricted to one blockchain
    pub fn find_account_by_address(
        &self,
        address: &str,
        blockchain: Option<Blockchain>,
    ) -> Option<&'a Account> {
        self.value.accounts.iter().find(|a| {
            let chain_match = blockchain.map_or(true, |b| a.blockchain == b);
            chain_match && a.has_address(address)
        })
    }

    pub fn ethereum_accounts(&self) -> Vec<&'a Account> {
        self.value
            .accounts
            .iter()
            .filter(|a| a.blockchain.is_ethereum_family())
            .collect()
    }

    /// Accounts derived from a seed
    pub fn hd_accounts(&self) -> Vec<&'a Account> {
        self.value.accounts.iter().filter(|a| a.is_hd()).collect()
    }

    pub fn accounts_with_seed(&self, seed_id: Uuid) -> Vec<&'a Account> {
        self.value
            .accounts
            .iter()
            .filter(|a| a.seed_id() == Some(seed_id))
            .collect()
    }

    /// Index following the highest index among this wallet's own account ids
    ///
    /// Malformed ids and ids naming another wallet are skipped.
    pub fn next_account_index(&self) -> u64 {
        let wallet_id = self.value.id.uuid();
        self.value
            .accounts
            .iter()
            .filter_map(|a| match a.account_id() {
                Ok(id) if id.belongs_to(&wallet_id) => Some(id.index()),
                Ok(id) => {
                    log::debug!("Account {} does not belong to wallet {}", id, wallet_id);
                    None
                }
                Err(e) => {
                    log::debug!("Skipping account in wallet {}: {}", wallet_id, e);
                    None
                }
            })
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }

    pub fn next_account_id(&self) -> AccountIdOp {
        AccountIdOp::create(&self.value.id, self.next_account_index())
    }
}

impl AsRef<Wallet> for WalletOp<'_> {
    fn as_ref(&self) -> &Wallet {
        self.value
    }
}
