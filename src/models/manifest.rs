use serde::{Deserialize, Serialize};

use super::{DATABASE_RULES_FILE, FIRESTORE_RULES_FILE, STORAGE_RULES_FILE};
use crate::settings::EmulatorSettings;

/// The `firebase.json` manifest.
///
/// Field order matches the order the keys are written to disk. Once a manifest
/// exists it is never modified; the bootstrapper only reads it or creates a new
/// one from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirebaseConfig {
    pub storage: RulesRef,
    pub firestore: RulesRef,
    pub database: RulesRef,
    pub emulators: Emulators,
}

/// Location of a rules file, relative to the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesRef {
    pub rules: String,
}

impl RulesRef {
    fn sibling(file_name: &str) -> Self {
        Self {
            rules: format!("./{}", file_name),
        }
    }
}

/// Network settings for every emulator in the suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emulators {
    pub firestore: Endpoint,
    pub ui: UiEmulator,
    pub auth: Endpoint,
    pub functions: Endpoint,
    pub database: Endpoint,
    pub pubsub: Endpoint,
    pub storage: Endpoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub port: u16,
    pub host: String,
}

/// The emulator UI, which can be switched off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiEmulator {
    pub enabled: bool,
    #[serde(flatten)]
    pub endpoint: Endpoint,
}

impl FirebaseConfig {
    /// Build the manifest for the default rules file layout.
    pub fn from_settings(settings: &EmulatorSettings) -> Self {
        let endpoint = |port| Endpoint {
            port,
            host: settings.host.clone(),
        };

        Self {
            storage: RulesRef::sibling(STORAGE_RULES_FILE),
            firestore: RulesRef::sibling(FIRESTORE_RULES_FILE),
            database: RulesRef::sibling(DATABASE_RULES_FILE),
            emulators: Emulators {
                firestore: endpoint(settings.firestore_port),
                ui: UiEmulator {
                    enabled: settings.ui_enabled,
                    endpoint: endpoint(settings.ui_port),
                },
                auth: endpoint(settings.auth_port),
                functions: endpoint(settings.functions_port),
                database: endpoint(settings.database_port),
                pubsub: endpoint(settings.pubsub_port),
                storage: endpoint(settings.storage_port),
            },
        }
    }
}
