use eyre::{Context, Result};
use log::{info, warn};
use shared::diamond::{remove_facet, removal_cut, CutReceipt, RemovalConfig, RemovalError};
use shared::web3::contracts::helpers::utils::facet_selectors;
use shared::web3::{ArtifactStore, DiamondCutContract, Wallet};
use url::Url;

use crate::config::Config;
use crate::secure_key::get_private_key;

pub(crate) const SUCCESS_MESSAGE: &str = "Diamond remove success";

pub(crate) async fn handle_remove(
    config: &Config,
    key: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let removal = config.removal_config()?;
    let store = ArtifactStore::new(config.artifacts_dir());
    info!(
        "Removing {} from diamond {} (artifacts: {})",
        removal.facet_name,
        removal.proxy_address,
        store.root().display()
    );

    if dry_run {
        return print_plan(&store, &removal);
    }

    let private_key = get_private_key(key)?;
    let rpc_url = config.get_rpc_url()?;
    let url = Url::parse(&rpc_url).wrap_err_with(|| format!("Invalid RPC URL: {rpc_url}"))?;
    let wallet = Wallet::new(&private_key, url)?;

    match wallet.get_balance().await {
        Ok(balance) => info!("Sender {} balance: {} wei", wallet.address(), balance),
        Err(e) => warn!("Could not fetch balance of {}: {}", wallet.address(), e),
    }

    let client = DiamondCutContract::new(wallet.provider());
    let message = report(remove_facet(&client, &store, &removal).await)?;
    println!("{message}");
    Ok(())
}

/// Final line of a run: the success message, or the error that ends the run.
pub(crate) fn report(outcome: Result<CutReceipt, RemovalError>) -> Result<&'static str> {
    outcome?;
    Ok(SUCCESS_MESSAGE)
}

fn print_plan(store: &ArtifactStore, removal: &RemovalConfig) -> Result<()> {
    let functions = store
        .functions(&removal.facet_name)
        .wrap_err_with(|| format!("Failed to resolve facet {}", removal.facet_name))?;
    let cut = removal_cut(
        removal,
        facet_selectors(&functions, &removal.excluded_signatures),
    )?;

    println!(
        "Dry run: {} cut on {} with {} selector(s), gas limit {}",
        cut.action,
        removal.proxy_address,
        cut.function_selectors.len(),
        removal.gas_limit
    );
    for function in functions
        .iter()
        .filter(|f| cut.function_selectors.contains(&f.selector()))
    {
        println!("  {} {}", function.selector(), function.signature());
    }
    Ok(())
}
