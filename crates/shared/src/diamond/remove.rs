use alloy::primitives::{Address, Bytes, Selector, TxHash};
use async_trait::async_trait;
use log::{debug, error, info};

use crate::diamond::cut::FacetCut;
use crate::diamond::error::RemovalError;
use crate::web3::contracts::constants::addresses::DEFAULT_DIAMOND_ADDRESS;
use crate::web3::contracts::core::error::ArtifactError;

pub const DEFAULT_GAS_LIMIT: u64 = 800_000;
pub const DEFAULT_FACET_NAME: &str = "TrainFacet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalConfig {
    pub proxy_address: Address,
    pub gas_limit: u64,
    pub facet_name: String,
    /// Signatures that stay routed on the diamond even though the facet declares them.
    pub excluded_signatures: Vec<String>,
}

impl Default for RemovalConfig {
    fn default() -> Self {
        Self {
            proxy_address: DEFAULT_DIAMOND_ADDRESS,
            gas_limit: DEFAULT_GAS_LIMIT,
            facet_name: DEFAULT_FACET_NAME.to_string(),
            excluded_signatures: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutReceipt {
    pub tx_hash: TxHash,
    pub status: bool,
}

/// A cut that has been accepted by the node but not yet mined.
#[derive(Debug)]
pub struct SubmittedCut<T> {
    pub tx_hash: TxHash,
    pub handle: T,
}

/// Resolves a facet contract name to the selectors of its functions, in ABI order.
pub trait SelectorSource {
    fn selectors(
        &self,
        facet_name: &str,
        excluded_signatures: &[String],
    ) -> Result<Vec<Selector>, ArtifactError>;
}

/// Chain client able to send `diamondCut` transactions and wait for them.
#[async_trait]
pub trait CutExecutor: Send + Sync {
    type Pending: Send;

    async fn submit_cut(
        &self,
        proxy_address: Address,
        cuts: Vec<FacetCut>,
        init: Address,
        calldata: Bytes,
        gas_limit: u64,
    ) -> Result<SubmittedCut<Self::Pending>, RemovalError>;

    async fn confirm(
        &self,
        submitted: SubmittedCut<Self::Pending>,
    ) -> Result<CutReceipt, RemovalError>;
}

/// Builds the single Remove cut for already resolved selectors.
/// A facet without selectors is rejected so that an empty cut is never sent.
pub fn removal_cut(
    config: &RemovalConfig,
    selectors: Vec<Selector>,
) -> Result<FacetCut, RemovalError> {
    if selectors.is_empty() {
        return Err(RemovalError::Resolution {
            facet: config.facet_name.clone(),
            reason: "no function selectors to remove".to_string(),
        });
    }

    Ok(FacetCut::remove(selectors))
}

/// Resolves the facet's selectors and builds the Remove cut for them.
pub fn plan_removal<S>(source: &S, config: &RemovalConfig) -> Result<FacetCut, RemovalError>
where
    S: SelectorSource + ?Sized,
{
    let selectors = source
        .selectors(&config.facet_name, &config.excluded_signatures)
        .map_err(|e| RemovalError::Resolution {
            facet: config.facet_name.clone(),
            reason: e.to_string(),
        })?;

    removal_cut(config, selectors)
}

pub async fn remove_facet<C, S>(
    client: &C,
    source: &S,
    config: &RemovalConfig,
) -> Result<CutReceipt, RemovalError>
where
    C: CutExecutor + ?Sized,
    S: SelectorSource + ?Sized,
{
    debug!("Removing facet {} from {}", config.facet_name, config.proxy_address);

    let cut = plan_removal(source, config)?;
    info!(
        "Selectors resolved: {} of {}",
        cut.function_selectors.len(),
        config.facet_name
    );
    for selector in &cut.function_selectors {
        debug!("  {selector}");
    }

    let submitted = client
        .submit_cut(
            config.proxy_address,
            vec![cut],
            Address::ZERO,
            Bytes::new(),
            config.gas_limit,
        )
        .await?;
    info!(
        "Diamond cut submitted to {}: {}",
        config.proxy_address, submitted.tx_hash
    );

    let receipt = client.confirm(submitted).await?;
    debug!("Receipt for {} received", receipt.tx_hash);

    if !receipt.status {
        error!("Diamond cut {} reverted", receipt.tx_hash);
        return Err(RemovalError::OnChainRevert {
            tx_hash: receipt.tx_hash,
        });
    }

    info!("Diamond cut {} confirmed", receipt.tx_hash);
    Ok(receipt)
}
