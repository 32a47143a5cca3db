use clap::Parser;
use eyre::Result;
use log::LevelFilter;

mod command;
mod config;
mod secure_key;

use config::Config;

#[derive(Parser)]
#[command(name = "remove-facet")]
#[command(about = "Remove every selector of a facet from a diamond proxy")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(long)]
    config: Option<String>,

    /// Environment file path
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// RPC URL (overrides config)
    #[arg(short = 'r', long)]
    rpc_url: Option<String>,

    /// Diamond proxy address
    #[arg(short = 'd', long)]
    proxy_address: Option<String>,

    /// Name of the facet contract whose selectors are removed
    #[arg(short = 'f', long)]
    facet_name: Option<String>,

    /// Gas limit for the diamondCut transaction
    #[arg(short = 'g', long)]
    gas_limit: Option<u64>,

    /// Directory holding compiled contract artifacts
    #[arg(short = 'a', long)]
    artifacts_dir: Option<String>,

    /// Function signature to leave on the diamond, e.g. "owner()"
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Private key source (env:VAR_NAME, file:/path, or interactive)
    #[arg(short = 'k', long)]
    key: Option<String>,

    /// Resolve and print the cut without sending it
    #[arg(long)]
    dry_run: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = match cli.log_level.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => eyre::bail!("invalid log level: {}", cli.log_level),
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    let config = Config::load(&cli.config, &cli.env_file)?
        .with_rpc_url(cli.rpc_url)
        .with_proxy_address(cli.proxy_address)
        .with_facet_name(cli.facet_name)
        .with_gas_limit(cli.gas_limit)
        .with_artifacts_dir(cli.artifacts_dir)
        .with_exclusions(cli.exclude);

    command::handle_remove(&config, cli.key, cli.dry_run).await
}
