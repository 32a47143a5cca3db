use alloy::network::EthereumWallet;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::{LocalSignerError, PrivateKeySigner};
use alloy::transports::TransportError;
use thiserror::Error;
use url::Url;

/// Filled, signing provider used for every transaction sent by the wallet.
pub type WalletProvider = DynProvider;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Invalid private key: {0}")]
    InvalidKey(#[from] LocalSignerError),

    #[error("RPC request failed: {0}")]
    Rpc(#[from] TransportError),
}

pub struct Wallet {
    pub signer: PrivateKeySigner,
    pub provider: WalletProvider,
}

impl Wallet {
    pub fn new(private_key: &str, provider_url: Url) -> Result<Self, WalletError> {
        let signer: PrivateKeySigner = private_key.trim().parse()?;
        let wallet = EthereumWallet::from(signer.clone());

        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(provider_url)
            .erased();

        Ok(Self {
            signer,
            provider,
        })
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn provider(&self) -> WalletProvider {
        self.provider.clone()
    }

    pub async fn get_balance(&self) -> Result<U256, WalletError> {
        let balance = self.provider.get_balance(self.address()).await?;
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    // First default anvil/hardhat account.
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_wallet_address_from_key() {
        let wallet = Wallet::new(DEV_KEY, Url::parse("http://localhost:8545").unwrap()).unwrap();

        assert_eq!(
            wallet.address(),
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let result = Wallet::new("not-a-key", Url::parse("http://localhost:8545").unwrap());

        assert!(matches!(result, Err(WalletError::InvalidKey(_))));
    }
}
