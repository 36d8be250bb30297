//! Bootstraps a local Firebase emulator configuration.
//!
//! On startup the bootstrapper looks for `firebase.json` in the config
//! directory. When it exists the manifest is loaded and reported as-is; when it
//! is missing, permissive rules files and a fresh manifest are generated from
//! environment variables. See [`bootstrap::ensure_config`].

pub mod bootstrap;
pub mod error;
pub mod models;
pub mod settings;

pub use bootstrap::{
    ensure_config, ensure_config_with, generate_config, load_existing, Bootstrap,
    DEFAULT_CONFIG_DIR,
};
pub use error::{BootstrapError, ManifestReadError};
pub use settings::EmulatorSettings;
