pub mod contracts;
pub mod wallet;

pub use contracts::core::artifact::ArtifactStore;
pub use contracts::implementations::diamond_cut_contract::DiamondCutContract;
pub use wallet::{Wallet, WalletError, WalletProvider};
