use alloy::json_abi::Function;
use alloy::primitives::Selector;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::diamond::remove::SelectorSource;
use crate::web3::contracts::core::error::ArtifactError;
use crate::web3::contracts::helpers::utils::facet_selectors;

pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Compiled contract artifacts on disk, looked up by contract name.
///
/// Accepts Hardhat's `artifacts/contracts/<File>.sol/<Name>.json` layout as
/// well as flat directories of bare ABI arrays.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the single `<name>.json` below the root. A name that matches
    /// several artifacts is rejected rather than guessed.
    pub fn find(&self, name: &str) -> Result<PathBuf, ArtifactError> {
        if !self.root.is_dir() {
            return Err(ArtifactError::NotFound {
                name: name.to_string(),
                root: self.root.clone(),
            });
        }

        let file_name = format!("{name}.json");
        let mut matches = Vec::new();
        find_files(&self.root, &file_name, &mut matches).map_err(|source| ArtifactError::Io {
            path: self.root.clone(),
            source,
        })?;
        matches.sort();

        match matches.len() {
            0 => Err(ArtifactError::NotFound {
                name: name.to_string(),
                root: self.root.clone(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(ArtifactError::Ambiguous {
                name: name.to_string(),
                paths: matches,
            }),
        }
    }

    /// Functions declared by the contract, in the order the ABI lists them.
    pub fn functions(&self, name: &str) -> Result<Vec<Function>, ArtifactError> {
        let path = self.find(name)?;
        debug!("Loading ABI for {} from {}", name, path.display());

        let content = fs::read(&path).map_err(|source| ArtifactError::Io {
            path: path.clone(),
            source,
        })?;
        parse_functions(&content, &path)
    }
}

impl SelectorSource for ArtifactStore {
    fn selectors(
        &self,
        facet_name: &str,
        excluded_signatures: &[String],
    ) -> Result<Vec<Selector>, ArtifactError> {
        let functions = self.functions(facet_name)?;
        Ok(facet_selectors(&functions, excluded_signatures))
    }
}

fn parse_functions(content: &[u8], path: &Path) -> Result<Vec<Function>, ArtifactError> {
    let json_error = |source: serde_json::Error| ArtifactError::Json {
        path: path.to_path_buf(),
        source,
    };

    let artifact: serde_json::Value = serde_json::from_slice(content).map_err(json_error)?;
    let items = match artifact {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut fields) => match fields.remove("abi") {
            Some(serde_json::Value::Array(items)) => items,
            _ => {
                return Err(ArtifactError::MissingAbi {
                    path: path.to_path_buf(),
                })
            }
        },
        _ => {
            return Err(ArtifactError::MissingAbi {
                path: path.to_path_buf(),
            })
        }
    };

    items
        .into_iter()
        .filter(|item| item.get("type").and_then(|t| t.as_str()) == Some("function"))
        .map(|item| serde_json::from_value::<Function>(item).map_err(json_error))
        .collect()
}

fn find_files(dir: &Path, file_name: &str, found: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // Symlinked directories are not followed.
        if entry.file_type()?.is_dir() {
            find_files(&path, file_name, found)?;
        } else if path.is_file() && entry.file_name() == file_name {
            found.push(path);
        }
    }
    Ok(())
}
