//! Operations over an ordered collection of wallets
//!
//! Two lookup styles live here. `get_wallet` is an exact lookup and a miss
//! is an error. `find_wallet_by_account` and `find_wallet_by_address` are
//! searches and a miss is `None`.

use crate::config::OpsConfig;
use crate::error::OpsError;
use crate::input::OpInput;
use crate::types::{Account, Blockchain, Wallet};
use crate::wallet_op::WalletOp;

/// Read-only operations over a wallet collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletsOp<'a> {
    value: &'a [Wallet],
}

/// Either a raw wallet sequence or an existing op
#[derive(Debug, Clone, Copy)]
pub enum WalletsSource<'a> {
    Raw(&'a [Wallet]),
    Op(WalletsOp<'a>),
}

impl<'a> From<&'a [Wallet]> for WalletsSource<'a> {
    fn from(value: &'a [Wallet]) -> Self {
        WalletsSource::Raw(value)
    }
}

impl<'a> From<&'a Vec<Wallet>> for WalletsSource<'a> {
    fn from(value: &'a Vec<Wallet>) -> Self {
        WalletsSource::Raw(value.as_slice())
    }
}

impl<'a> From<WalletsOp<'a>> for WalletsSource<'a> {
    fn from(value: WalletsOp<'a>) -> Self {
        WalletsSource::Op(value)
    }
}

impl<'a> From<&WalletsOp<'a>> for WalletsSource<'a> {
    fn from(value: &WalletsOp<'a>) -> Self {
        WalletsSource::Op(*value)
    }
}

impl<'a> WalletsOp<'a> {
    pub fn of(value: &'a [Wallet]) -> Self {
        Self { value }
    }

    /// True only for values that are already a `WalletsOp`
    ///
    /// A single wallet, wrapped or not, is never a collection op.
    pub fn is_op<'v>(value: impl Into<OpInput<'v>>) -> bool {
        matches!(value.into(), OpInput::WalletsOp(_))
    }

    /// Wrap a raw sequence, or return an existing op unchanged
    pub fn as_op(value: impl Into<WalletsSource<'a>>) -> Self {
        match value.into() {
            WalletsSource::Raw(wallets) => Self::of(wallets),
            WalletsSource::Op(op) => op,
        }
    }

    /// Underlying records
    pub fn value(&self) -> &'a [Wallet] {
        self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// All wallets, wrapped, in the order they were supplied
    pub fn get_wallets(&self) -> Vec<WalletOp<'a>> {
        self.value.iter().map(WalletOp::of).collect()
    }

    /// Wallet whose id text is exactly `id`
    ///
    /// Fails with [`OpsError::WalletNotFound`] when no wallet matches.
    pub fn get_wallet(&self, id: &str) -> Result<WalletOp<'a>, OpsError> {
        match self.value.iter().find(|w| w.id.as_str() == id) {
            Some(wallet) => Ok(WalletOp::of(wallet)),
            None => {
                log::debug!("Wallet {} not found among {} wallets", id, self.value.len());
                Err(OpsError::wallet_not_found(id))
            }
        }
    }

    /// Wallet that holds an account whose id is exactly `account_id`
    ///
    /// Every wallet is scanned; the wallet part embedded in the id is not
    /// used as a shortcut. `None` covers both an unknown wallet and a known
    /// wallet without that account.
    pub fn find_wallet_by_account(&self, account_id: &str) -> Option<WalletOp<'a>> {
        log::trace!("Searching {} wallets for account {}", self.value.len(), account_id);
        let found = self
            .value
            .iter()
            .find(|w| w.accounts.iter().any(|a| a.id == account_id))
            .map(WalletOp::of);
        if found.is_none() {
            log::debug!("No wallet holds account {}", account_id);
        }
        found
    }

    /// Every account across the collection, in wallet order
    pub fn get_accounts(&self) -> Vec<&'a Account> {
        self.value.iter().flat_map(|w| w.accounts.iter()).collect()
    }

    /// First wallet holding an account with `address`, optionally on one blockchain
    pub fn find_wallet_by_address(
        &self,
        address: &str,
        blockchain: Option<Blockchain>,
    ) -> Option<WalletOp<'a>> {
        self.value
            .iter()
            .map(WalletOp::of)
            .find(|w| w.find_account_by_address(address, blockchain).is_some())
    }

    /// Same as [`find_wallet_by_address`](Self::find_wallet_by_address) on the configured chain
    pub fn find_wallet_by_address_in(
        &self,
        address: &str,
        config: &OpsConfig,
    ) -> Result<Option<WalletOp<'a>>, OpsError> {
        let blockchain = config.blockchain()?;
        Ok(self.find_wallet_by_address(address, Some(blockchain)))
    }
}

impl AsRef<[Wallet]> for WalletsOp<'_> {
    fn as_ref(&self) -> &[Wallet] {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountKey, WalletId};
    use serde_json::json;

    const FIRST: &str = "9ce1f45b-4a8e-46ee-b81f-1efd034feaea";
    const SECOND: &str = "6a79d3ff-7d96-42f8-bcff-000325f5e900";
    const ADDRESS: &str = "0x343d1de24ac7a891575857855c5579f9de19b427";

    fn wallet(id: &str, accounts: Vec<Account>) -> Wallet {
        Wallet {
            id: WalletId::parse(id).unwrap(),
            name: None,
            accounts,
        }
    }

    fn eth_account(id: &str) -> Account {
        Account {
            id: id.to_string(),
            blockchain: Blockchain::ETHEREUM,
            address: ADDRESS.to_string(),
            key: AccountKey::Unknown,
        }
    }

    fn test_wallets() -> Vec<Wallet> {
        vec![
            wallet(FIRST, vec![eth_account(&format!("{}-1", FIRST))]),
            wallet(SECOND, vec![]),
        ]
    }

    #[test]
    fn test_typeof() {
        let data = test_wallets();
        let wallets = WalletsOp::of(&data);

        assert!(!WalletsOp::is_op(&data));
        assert!(WalletsOp::is_op(wallets));
        assert!(!WalletsOp::is_op(wallets.get_wallets()[0]));
        assert!(!WalletsOp::is_op(&data[0]));
        assert!(!WalletsOp::is_op(&json!({})));
        assert!(!WalletsOp::is_op(&json!([])));
        assert!(!WalletsOp::is_op(None::<&Wallet>));
    }

    #[test]
    fn test_convert_to_op() {
        let data = test_wallets();
        let wallets = WalletsOp::of(&data);

        assert!(WalletsOp::is_op(WalletsOp::as_op(wallets)));
        assert!(WalletsOp::is_op(WalletsOp::as_op(&data)));
        assert_eq!(WalletsOp::as_op(WalletsOp::as_op(&data)), wallets);
    }

    #[test]
    fn test_get_wallets_keeps_order() {
        let data = test_wallets();
        let wallets = WalletsOp::of(&data);
        let ids: Vec<&WalletId> = wallets.get_wallets().iter().map(|w| w.id()).collect();
        assert_eq!(ids, vec![&data[0].id, &data[1].id]);
        assert_eq!(wallets.len(), 2);
        assert!(!wallets.is_empty());
    }

    #[test]
    fn test_get_wallet() {
        let data = test_wallets();
        let wallets = WalletsOp::of(&data);

        assert_eq!(wallets.get_wallet(SECOND).unwrap().id(), &data[1].id);

        let err = wallets
            .get_wallet("8be53925-534f-4ead-a8ae-170b04d54d8c")
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_get_wallet_is_exact() {
        let data = test_wallets();
        let wallets = WalletsOp::of(&data);

        assert!(wallets.get_wallet(&SECOND.to_uppercase()).is_err());
        assert!(wallets.get_wallet(&SECOND[..8]).is_err());
        assert!(wallets.get_wallet("").is_err());
    }

    #[test]
    fn test_get_wallet_uses_supplied_id_text() {
        let upper = FIRST.to_uppercase();
        let data: Vec<Wallet> =
            serde_json::from_value(json!([{ "id": upper, "accounts": [] }])).unwrap();
        let wallets = WalletsOp::of(&data);

        let found = wallets.get_wallet(&upper).unwrap();
        assert_eq!(found.id().as_str(), upper);
        // Same UUID in another case is a different string
        assert!(wallets.get_wallet(FIRST).unwrap_err().is_not_found());
    }

    #[test]
    fn test_get_wallet_first_match_wins() {
        let mut data = test_wallets();
        data.push(wallet(FIRST, vec![]));
        let wallets = WalletsOp::of(&data);
        assert_eq!(wallets.get_wallet(FIRST).unwrap().accounts().len(), 1);
    }

    #[test]
    fn test_find_wallet_by_account() {
        let data = test_wallets();
        let wallets = WalletsOp::of(&data);

        let found = wallets.find_wallet_by_account(&format!("{}-1", FIRST)).unwrap();
        assert_eq!(found.id().to_string(), FIRST);

        // Wallet exists, account doesn't
        assert!(wallets.find_wallet_by_account(&format!("{}-2", FIRST)).is_none());
        // Wallet doesn't exist
        assert!(wallets
            .find_wallet_by_account("d0659bdd-8090-4b08-90a2-3b951cb98b37-0")
            .is_none());
    }

    #[test]
    fn test_find_wallet_by_account_ignores_embedded_wallet_id() {
        // An account filed under a wallet other than the one its id names is
        // still found by the full scan
        let stray = format!("{}-5", FIRST);
        let data = vec![wallet(FIRST, vec![]), wallet(SECOND, vec![eth_account(&stray)])];
        let wallets = WalletsOp::of(&data);

        let found = wallets.find_wallet_by_account(&stray).unwrap();
        assert_eq!(found.id(), &data[1].id);
        assert!(wallets.find_wallet_by_account(&format!("{}-5", FIRST.to_uppercase())).is_none());
        assert!(wallets.find_wallet_by_account(FIRST).is_none());
    }

    #[test]
    fn test_get_accounts() {
        let data = vec![
            wallet(FIRST, vec![eth_account(&format!("{}-0", FIRST))]),
            wallet(
                SECOND,
                vec![
                    eth_account(&format!("{}-0", SECOND)),
                    eth_account(&format!("{}-1", SECOND)),
                ],
            ),
        ];
        let accounts = WalletsOp::of(&data).get_accounts();
        let ids: Vec<&str> = accounts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                format!("{}-0", FIRST),
                format!("{}-0", SECOND),
                format!("{}-1", SECOND)
            ]
        );
    }

    #[test]
    fn test_find_wallet_by_address() {
        let data = test_wallets();
        let wallets = WalletsOp::of(&data);

        let found = wallets.find_wallet_by_address(ADDRESS, None).unwrap();
        assert_eq!(found.id(), &data[0].id);
        assert!(wallets
            .find_wallet_by_address(ADDRESS, Some(Blockchain::ETHEREUM_CLASSIC))
            .is_none());
        assert!(wallets.find_wallet_by_address("0xdead", None).is_none());
    }

    #[test]
    fn test_find_wallet_by_address_in_config() {
        let data = test_wallets();
        let wallets = WalletsOp::of(&data);

        let err = wallets
            .find_wallet_by_address_in(ADDRESS, &OpsConfig::default())
            .unwrap_err();
        assert_eq!(err, OpsError::MissingChain);

        let config = OpsConfig::default().with_chain(Blockchain::ETHEREUM);
        let found = wallets.find_wallet_by_address_in(ADDRESS, &config).unwrap();
        assert_eq!(found.map(|w| w.id()), Some(&data[0].id));
    }

    #[test]
    fn test_empty_collection() {
        let data: Vec<Wallet> = vec![];
        let wallets = WalletsOp::of(&data);
        assert!(wallets.is_empty());
        assert!(wallets.get_wallets().is_empty());
        assert!(wallets.get_wallet(FIRST).is_err());
        assert!(wallets.find_wallet_by_account(&format!("{}-0", FIRST)).is_none());
    }
}
