//! Check-then-generate logic for the emulator config directory.
//!
//! The presence of `firebase.json` alone decides the branch. Rules files are
//! never checked on their own: they are written together with the manifest or
//! not at all.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{BootstrapError, ManifestReadError};
use crate::models::*;
use crate::settings::EmulatorSettings;

/// Directory the emulator container mounts its configuration from.
pub const DEFAULT_CONFIG_DIR: &str = "/firebase";

/// What a bootstrap run did.
#[derive(Debug, Clone, PartialEq)]
pub enum Bootstrap {
    /// A manifest was already present; its parsed contents.
    Existing(Value),
    /// No manifest was present; the one that was written.
    Generated(FirebaseConfig),
}

/// Use the existing manifest in `config_dir`, or generate one from the
/// process environment.
pub fn ensure_config(config_dir: &Path) -> Result<Bootstrap, BootstrapError> {
    ensure_config_with(config_dir, &EmulatorSettings::from_env())
}

/// Same as [`ensure_config`], with settings supplied by the caller.
pub fn ensure_config_with(
    config_dir: &Path,
    settings: &EmulatorSettings,
) -> Result<Bootstrap, BootstrapError> {
    let manifest_path = config_dir.join(MANIFEST_FILE);
    if manifest_path.exists() {
        return load_existing(&manifest_path).map(Bootstrap::Existing);
    }

    generate_config(config_dir, settings).map(Bootstrap::Generated)
}

/// Read and report an existing manifest. Any valid JSON is accepted.
pub fn load_existing(manifest_path: &Path) -> Result<Value, BootstrapError> {
    let unreadable = |source: ManifestReadError| BootstrapError::ExistingConfigUnreadable {
        path: manifest_path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(manifest_path).map_err(|e| unreadable(e.into()))?;
    let config: Value = serde_json::from_str(&content).map_err(|e| unreadable(e.into()))?;
    let pretty = serde_json::to_string_pretty(&config).map_err(|e| unreadable(e.into()))?;

    tracing::info!("Using existing Firebase configuration:\n{}", pretty);

    Ok(config)
}

/// Write permissive rules files and a fresh manifest into `config_dir`.
///
/// Files are written in order and a failure aborts the run; files written
/// before the failure are left in place.
pub fn generate_config(
    config_dir: &Path,
    settings: &EmulatorSettings,
) -> Result<FirebaseConfig, BootstrapError> {
    tracing::info!("Generating Storage security rules (permissive for local testing)");
    write_file(config_dir.join(STORAGE_RULES_FILE), STORAGE_RULES)?;

    tracing::info!("Generating Firestore security rules (permissive for local testing)");
    write_file(config_dir.join(FIRESTORE_RULES_FILE), FIRESTORE_RULES)?;

    let database_path = config_dir.join(DATABASE_RULES_FILE);
    let database_rules = to_pretty_json(&DatabaseRules::permissive(), &database_path)?;
    tracing::info!("Generating Realtime Database rules (permissive for local testing)");
    write_file(database_path, &database_rules)?;

    let config = FirebaseConfig::from_settings(settings);
    let manifest_path = config_dir.join(MANIFEST_FILE);
    let manifest = to_pretty_json(&config, &manifest_path)?;
    tracing::info!("Generating Firebase configuration:\n{}", manifest);
    write_file(manifest_path, &manifest)?;

    Ok(config)
}

fn to_pretty_json<T: serde::Serialize>(value: &T, path: &Path) -> Result<String, BootstrapError> {
    serde_json::to_string_pretty(value).map_err(|e| BootstrapError::GenerationFailed {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

fn write_file(path: PathBuf, contents: &str) -> Result<(), BootstrapError> {
    tracing::debug!(path = %path.display(), bytes = contents.len(), "writing");
    fs::write(&path, contents).map_err(|source| BootstrapError::GenerationFailed { path, source })
}
