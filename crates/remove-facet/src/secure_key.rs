use eyre::{Context, Result};
use log::warn;
use std::env;
use std::io::{self, Write};

pub(crate) const DEFAULT_KEY_VAR: &str = "PRIVATE_KEY";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum KeySource {
    Environment(String),
    File(String),
    Interactive,
}

impl KeySource {
    pub(crate) fn from_arg(key_arg: Option<String>) -> Self {
        match key_arg {
            Some(key) => {
                if let Some(var_name) = key.strip_prefix("env:") {
                    Self::Environment(var_name.to_string())
                } else if let Some(path) = key.strip_prefix("file:") {
                    Self::File(path.to_string())
                } else {
                    warn!("Direct private key arguments are not accepted.");
                    warn!("Use 'env:VAR_NAME' or 'file:/path/to/key' instead.");
                    Self::Interactive
                }
            }
            None if env::var(DEFAULT_KEY_VAR).is_ok() => {
                Self::Environment(DEFAULT_KEY_VAR.to_string())
            }
            None => Self::Interactive,
        }
    }

    pub(crate) fn resolve(&self) -> Result<String> {
        match self {
            Self::Environment(var_name) => env::var(var_name)
                .with_context(|| format!("Environment variable {var_name} not found")),
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read private key from file: {path}"))
                .map(|s| s.trim().to_string()),
            Self::Interactive => {
                print!("Enter private key (hidden): ");
                io::stdout().flush().context("Failed to flush stdout")?;
                rpassword::read_password().context("Failed to read private key")
            }
        }
    }
}

pub(crate) fn get_private_key(key_arg: Option<String>) -> Result<String> {
    KeySource::from_arg(key_arg).resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_prefixed_sources() {
        assert_eq!(
            KeySource::from_arg(Some("env:DEPLOYER_KEY".to_string())),
            KeySource::Environment("DEPLOYER_KEY".to_string())
        );
        assert_eq!(
            KeySource::from_arg(Some("file:/run/secrets/key".to_string())),
            KeySource::File("/run/secrets/key".to_string())
        );
    }

    #[test]
    fn test_raw_key_falls_back_to_prompt() {
        assert_eq!(
            KeySource::from_arg(Some("0xdeadbeef".to_string())),
            KeySource::Interactive
        );
    }

    #[test]
    fn test_file_key_is_trimmed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("key");
        std::fs::write(&path, "0xabc\n").unwrap();

        let key = KeySource::File(path.to_str().unwrap().to_string())
            .resolve()
            .unwrap();

        assert_eq!(key, "0xabc");
    }

    #[test]
    fn test_missing_env_var() {
        let source = KeySource::Environment("REMOVE_FACET_TEST_UNSET_KEY".to_string());

        assert!(source.resolve().is_err());
    }
}
