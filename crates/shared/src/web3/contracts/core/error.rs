use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("No artifact named {name}.json found under {}", root.display())]
    NotFound { name: String, root: PathBuf },

    #[error(
        "Several artifacts named {name}.json: {}",
        paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
    )]
    Ambiguous { name: String, paths: Vec<PathBuf> },

    #[error("Failed to read artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse artifact {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Artifact {} has no ABI", path.display())]
    MissingAbi { path: PathBuf },
}
