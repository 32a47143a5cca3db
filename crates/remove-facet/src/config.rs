use alloy::primitives::Address;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use shared::diamond::RemovalConfig;
use shared::web3::contracts::core::artifact::DEFAULT_ARTIFACTS_DIR;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) rpc_url: Option<String>,
    pub(crate) proxy_address: Option<String>,
    pub(crate) facet_name: Option<String>,
    pub(crate) gas_limit: Option<u64>,
    pub(crate) artifacts_dir: Option<String>,
    pub(crate) exclude: Vec<String>,
}

impl Config {
    pub(crate) fn load(config_path: &Option<String>, env_file: &str) -> Result<Self> {
        dotenv::from_filename(env_file).ok();

        let mut config = if let Some(path) = config_path {
            Self::load_from_file(path)?
        } else {
            Self::default()
        };

        config.load_from_env()?;
        Ok(config)
    }

    pub(crate) fn load_from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {path}"))?;

        Ok(config)
    }

    pub(crate) fn load_from_env(&mut self) -> Result<()> {
        if let Ok(rpc_url) = std::env::var("RPC_URL") {
            self.rpc_url = Some(rpc_url);
        }
        if let Ok(address) = std::env::var("DIAMOND_ADDRESS") {
            self.proxy_address = Some(address);
        }
        if let Ok(name) = std::env::var("FACET_NAME") {
            self.facet_name = Some(name);
        }
        if let Ok(dir) = std::env::var("ARTIFACTS_DIR") {
            self.artifacts_dir = Some(dir);
        }
        if let Ok(gas_limit) = std::env::var("GAS_LIMIT") {
            let gas_limit = gas_limit
                .parse()
                .with_context(|| format!("Invalid GAS_LIMIT: {gas_limit}"))?;
            self.gas_limit = Some(gas_limit);
        }

        Ok(())
    }

    pub(crate) fn with_rpc_url(mut self, rpc_url: Option<String>) -> Self {
        if rpc_url.is_some() {
            self.rpc_url = rpc_url;
        }
        self
    }

    pub(crate) fn with_proxy_address(mut self, proxy_address: Option<String>) -> Self {
        if proxy_address.is_some() {
            self.proxy_address = proxy_address;
        }
        self
    }

    pub(crate) fn with_facet_name(mut self, facet_name: Option<String>) -> Self {
        if facet_name.is_some() {
            self.facet_name = facet_name;
        }
        self
    }

    pub(crate) fn with_gas_limit(mut self, gas_limit: Option<u64>) -> Self {
        if gas_limit.is_some() {
            self.gas_limit = gas_limit;
        }
        self
    }

    pub(crate) fn with_artifacts_dir(mut self, artifacts_dir: Option<String>) -> Self {
        if artifacts_dir.is_some() {
            self.artifacts_dir = artifacts_dir;
        }
        self
    }

    pub(crate) fn with_exclusions(mut self, exclude: Vec<String>) -> Self {
        self.exclude.extend(exclude);
        self
    }

    pub(crate) fn get_rpc_url(&self) -> Result<String> {
        self.rpc_url.clone().ok_or_else(|| {
            eyre::eyre!("RPC URL not configured. Set RPC_URL environment variable or use --rpc-url")
        })
    }

    pub(crate) fn artifacts_dir(&self) -> PathBuf {
        PathBuf::from(
            self.artifacts_dir
                .as_deref()
                .unwrap_or(DEFAULT_ARTIFACTS_DIR),
        )
    }

    /// Unset fields fall back to the built-in removal target.
    pub(crate) fn removal_config(&self) -> Result<RemovalConfig> {
        let defaults = RemovalConfig::default();

        let proxy_address = match &self.proxy_address {
            Some(address) => Address::from_str(address)
                .with_context(|| format!("Invalid proxy address: {address}"))?,
            None => defaults.proxy_address,
        };

        let gas_limit = self.gas_limit.unwrap_or(defaults.gas_limit);
        if gas_limit == 0 {
            eyre::bail!("Gas limit must be greater than zero");
        }

        Ok(RemovalConfig {
            proxy_address,
            gas_limit,
            facet_name: self.facet_name.clone().unwrap_or(defaults.facet_name),
            excluded_signatures: self.exclude.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::web3::contracts::constants::addresses::DEFAULT_DIAMOND_ADDRESS;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_builtin_target() {
        let removal = Config::default().removal_config().unwrap();

        assert_eq!(removal.proxy_address, DEFAULT_DIAMOND_ADDRESS);
        assert_eq!(removal.gas_limit, 800_000);
        assert_eq!(removal.facet_name, "TrainFacet");
        assert!(removal.excluded_signatures.is_empty());
        assert_eq!(Config::default().artifacts_dir(), PathBuf::from("artifacts"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("remove.toml");
        std::fs::write(
            &path,
            r#"
rpc_url = "http://localhost:8545"
proxy_address = "0x0A31e14967aA2CFD76DB8eF599e4eb032544e8AB"
facet_name = "LegacyFacet"
gas_limit = 1000000
exclude = ["owner()"]
"#,
        )
        .unwrap();

        let config = Config::load_from_file(path.to_str().unwrap()).unwrap();
        let removal = config.removal_config().unwrap();

        assert_eq!(config.get_rpc_url().unwrap(), "http://localhost:8545");
        assert_eq!(
            removal.proxy_address,
            Address::from_str("0x0A31e14967aA2CFD76DB8eF599e4eb032544e8AB").unwrap()
        );
        assert_eq!(removal.facet_name, "LegacyFacet");
        assert_eq!(removal.gas_limit, 1_000_000);
        assert_eq!(removal.excluded_signatures, vec!["owner()".to_string()]);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load_from_file("/nonexistent/remove.toml").unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let config = Config {
            facet_name: Some("LegacyFacet".to_string()),
            gas_limit: Some(500_000),
            exclude: vec!["owner()".to_string()],
            ..Default::default()
        }
        .with_facet_name(Some("TrainFacet".to_string()))
        .with_gas_limit(None)
        .with_exclusions(vec!["paused()".to_string()]);

        let removal = config.removal_config().unwrap();

        assert_eq!(removal.facet_name, "TrainFacet");
        assert_eq!(removal.gas_limit, 500_000);
        assert_eq!(
            removal.excluded_signatures,
            vec!["owner()".to_string(), "paused()".to_string()]
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_address = Config::default().with_proxy_address(Some("0x1234".to_string()));
        assert!(bad_address.removal_config().is_err());

        let zero_gas = Config::default().with_gas_limit(Some(0));
        assert!(zero_gas.removal_config().is_err());

        assert!(Config::default().get_rpc_url().is_err());
    }
}
