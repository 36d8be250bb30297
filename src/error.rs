//! Error types for bootstrap runs.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal bootstrap errors. Neither kind is recovered from.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// `firebase.json` exists but could not be read or is not valid JSON.
    #[error("existing configuration at {} is unreadable", path.display())]
    ExistingConfigUnreadable {
        path: PathBuf,
        #[source]
        source: ManifestReadError,
    },

    /// A file could not be written while generating the configuration.
    #[error("failed to write {}", path.display())]
    GenerationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why an existing manifest could not be loaded.
#[derive(Debug, Error)]
pub enum ManifestReadError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
