use crate::diamond::cut::FacetCut;
use crate::diamond::error::RemovalError;
use crate::diamond::remove::{CutExecutor, CutReceipt, SubmittedCut};
use alloy::network::{Ethereum, ReceiptResponse};
use alloy::primitives::{Address, Bytes};
use alloy::providers::PendingTransactionBuilder;
use alloy::sol;
use alloy_provider::Provider;
use async_trait::async_trait;
use log::{debug, warn};

sol! {
    #[sol(rpc)]
    interface IDiamondCut {
        // `action` is the FacetCutAction enum, which the ABI encodes as uint8.
        struct FacetCut {
            address facetAddress;
            uint8 action;
            bytes4[] functionSelectors;
        }

        function diamondCut(FacetCut[] calldata _diamondCut, address _init, bytes calldata _calldata) external;
    }
}

impl From<FacetCut> for IDiamondCut::FacetCut {
    fn from(cut: FacetCut) -> Self {
        Self {
            facetAddress: cut.facet_address,
            action: cut.action.as_u8(),
            functionSelectors: cut.function_selectors,
        }
    }
}

/// Sends `diamondCut` transactions through a signing provider.
#[derive(Clone)]
pub struct DiamondCutContract<P: Provider> {
    provider: P,
}

impl<P: Provider> DiamondCutContract<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: Provider> CutExecutor for DiamondCutContract<P> {
    type Pending = PendingTransactionBuilder<Ethereum>;

    async fn submit_cut(
        &self,
        proxy_address: Address,
        cuts: Vec<FacetCut>,
        init: Address,
        calldata: Bytes,
        gas_limit: u64,
    ) -> Result<SubmittedCut<Self::Pending>, RemovalError> {
        let diamond: IDiamondCut::IDiamondCutInstance<&P, Ethereum> =
            IDiamondCut::new(proxy_address, &self.provider);
        let cuts: Vec<IDiamondCut::FacetCut> = cuts.into_iter().map(Into::into).collect();

        debug!(
            "Sending diamondCut with {} cut(s) to {} (gas limit {})",
            cuts.len(),
            proxy_address,
            gas_limit
        );
        let pending = diamond
            .diamondCut(cuts, init, calldata)
            .gas(gas_limit)
            .send()
            .await
            .map_err(|e| {
                warn!("diamondCut submission failed: {e}");
                RemovalError::Submission(e.to_string())
            })?;

        Ok(SubmittedCut {
            tx_hash: *pending.tx_hash(),
            handle: pending,
        })
    }

    async fn confirm(
        &self,
        submitted: SubmittedCut<Self::Pending>,
    ) -> Result<CutReceipt, RemovalError> {
        let SubmittedCut { tx_hash, handle } = submitted;
        debug!("Waiting for receipt of {tx_hash}");

        let receipt = handle
            .get_receipt()
            .await
            .map_err(|e| RemovalError::Confirmation {
                tx_hash,
                reason: e.to_string(),
            })?;

        Ok(CutReceipt {
            tx_hash: receipt.transaction_hash(),
            status: receipt.status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::fixed_bytes;
    use alloy::sol_types::SolCall;

    #[test]
    fn test_diamond_cut_signature() {
        assert_eq!(
            IDiamondCut::diamondCutCall::SIGNATURE,
            "diamondCut((address,uint8,bytes4[])[],address,bytes)"
        );
        assert_eq!(IDiamondCut::diamondCutCall::SELECTOR, [0x1f, 0x93, 0x1c, 0x1c]);
    }

    #[test]
    fn test_remove_cut_conversion() {
        let selectors = vec![fixed_bytes!("a9059cbb"), fixed_bytes!("095ea7b3")];
        let cut: IDiamondCut::FacetCut = FacetCut::remove(selectors.clone()).into();

        assert_eq!(cut.facetAddress, Address::ZERO);
        assert_eq!(cut.action, 2);
        assert_eq!(cut.functionSelectors, selectors);
    }

    #[test]
    fn test_call_encoding_layout() {
        let call = IDiamondCut::diamondCutCall {
            _diamondCut: vec![FacetCut::remove(vec![fixed_bytes!("a9059cbb")]).into()],
            _init: Address::ZERO,
            _calldata: Bytes::new(),
        };

        let encoded = call.abi_encode();

        assert_eq!(&encoded[..4], &IDiamondCut::diamondCutCall::SELECTOR);
        // selector + 3 head words + array length + tuple offset
        // + tuple (address, uint8, offset, len, selector) + empty bytes length
        assert_eq!(encoded.len(), 4 + 32 * 11);
    }
}
