//! Vault Ops: Typed Queries over Wallet Records
//!
//! This crate turns plain wallet and account records, as handed over by a
//! wallet store or host application, into read-only operation facades with
//! validated account identifiers and safe lookups.
//!
//! # Architecture
//!
//! - **AccountIdOp**: validated `<wallet-uuid>-<index>` account identifier
//! - **WalletOp**: borrowed view over a single wallet
//! - **WalletsOp**: borrowed view over an ordered wallet collection, with
//!   exact lookup by wallet id and account-to-wallet resolution
//!
//! Facades borrow the records they wrap. Nothing in this crate mutates,
//! persists or signs anything.
//!
//! # Example
//!
//! ```ignore
//! use vault_ops::{AccountIdOp, Wallet, WalletsOp};
//!
//! let data: Vec<Wallet> = serde_json::from_str(json)?;
//! let wallets = WalletsOp::of(&data);
//!
//! // Hard lookup: unknown id is an error
//! let wallet = wallets.get_wallet("9ce1f45b-4a8e-46ee-b81f-1efd034feaea")?;
//!
//! // Search: unknown account is None
//! let owner = wallets.find_wallet_by_account("9ce1f45b-4a8e-46ee-b81f-1efd034feaea-1");
//!
//! let id = AccountIdOp::of("9ce1f45b-4a8e-46ee-b81f-1efd034feaea-1")?;
//! assert_eq!(id.wallet_id(), wallet.id().uuid());
//! ```

// Public modules
pub mod account_id;
pub mod config;
pub mod error;
pub mod input;
pub mod types;
pub mod wallet_op;
pub mod wallets_op;

// Re-exports for convenience
pub use account_id::AccountIdOp;
pub use config::OpsConfig;
pub use error::OpsError;
pub use input::OpInput;
pub use types::{Account, AccountKey, Blockchain, Wallet, WalletId};
pub use wallet_op::{WalletOp, WalletSource};
pub use wallets_op::{WalletsOp, WalletsSource};

// Common result type
pub type Result<T> = std::result::Result<T, OpsError>;
