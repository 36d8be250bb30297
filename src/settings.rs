//! Emulator settings resolved from environment variables.
//!
//! Every variable is optional:
//! - `EMULATORS_HOST` - host for every emulator (default `0.0.0.0`)
//! - `UI_ENABLED` - the UI is disabled only when this is exactly `false`
//! - `*_EMULATOR_PORT` - per-emulator port, read from the leading digits
//!   (`"80.5"` is 80); unset, digitless, zero, negative or out-of-range values
//!   all fall back to the default

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_FIRESTORE_PORT: u16 = 8080;
pub const DEFAULT_UI_PORT: u16 = 4000;
pub const DEFAULT_AUTH_PORT: u16 = 9099;
pub const DEFAULT_FUNCTIONS_PORT: u16 = 5001;
pub const DEFAULT_DATABASE_PORT: u16 = 9000;
pub const DEFAULT_PUBSUB_PORT: u16 = 8085;
pub const DEFAULT_STORAGE_PORT: u16 = 9199;

pub const HOST_VAR: &str = "EMULATORS_HOST";
pub const UI_ENABLED_VAR: &str = "UI_ENABLED";
pub const FIRESTORE_PORT_VAR: &str = "FIRESTORE_EMULATOR_PORT";
pub const UI_PORT_VAR: &str = "UI_EMULATOR_PORT";
pub const AUTH_PORT_VAR: &str = "AUTH_EMULATOR_PORT";
pub const FUNCTIONS_PORT_VAR: &str = "FUNCTIONS_EMULATOR_PORT";
pub const DATABASE_PORT_VAR: &str = "RDB_EMULATOR_PORT";
pub const PUBSUB_PORT_VAR: &str = "PUBSUB_EMULATOR_PORT";
pub const STORAGE_PORT_VAR: &str = "STORAGE_EMULATOR_PORT";

/// Host, ports and UI toggle used to build a fresh manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorSettings {
    /// Host shared by every emulator (from EMULATORS_HOST)
    pub host: String,
    /// Whether the emulator UI is enabled (from UI_ENABLED)
    pub ui_enabled: bool,
    pub firestore_port: u16,
    pub ui_port: u16,
    pub auth_port: u16,
    pub functions_port: u16,
    pub database_port: u16,
    pub pubsub_port: u16,
    pub storage_port: u16,
}

impl Default for EmulatorSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            ui_enabled: true,
            firestore_port: DEFAULT_FIRESTORE_PORT,
            ui_port: DEFAULT_UI_PORT,
            auth_port: DEFAULT_AUTH_PORT,
            functions_port: DEFAULT_FUNCTIONS_PORT,
            database_port: DEFAULT_DATABASE_PORT,
            pubsub_port: DEFAULT_PUBSUB_PORT,
            storage_port: DEFAULT_STORAGE_PORT,
        }
    }
}

impl EmulatorSettings {
    /// Load settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings from any key/value source, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = |key: &str, default: u16| parse_port(lookup(key).as_deref(), default);

        let host = lookup(HOST_VAR)
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Self {
            host,
            ui_enabled: lookup(UI_ENABLED_VAR).as_deref() != Some("false"),
            firestore_port: port(FIRESTORE_PORT_VAR, DEFAULT_FIRESTORE_PORT),
            ui_port: port(UI_PORT_VAR, DEFAULT_UI_PORT),
            auth_port: port(AUTH_PORT_VAR, DEFAULT_AUTH_PORT),
            functions_port: port(FUNCTIONS_PORT_VAR, DEFAULT_FUNCTIONS_PORT),
            database_port: port(DATABASE_PORT_VAR, DEFAULT_DATABASE_PORT),
            pubsub_port: port(PUBSUB_PORT_VAR, DEFAULT_PUBSUB_PORT),
            storage_port: port(STORAGE_PORT_VAR, DEFAULT_STORAGE_PORT),
        }
    }
}

/// Parse a base-10 port from the leading integer of `value`, ignoring any
/// trailing text. Missing, digitless, zero, negative and out-of-range values
/// all fall back to `default`.
fn parse_port(value: Option<&str>, default: u16) -> u16 {
    value
        .and_then(leading_integer)
        .and_then(|n| u16::try_from(n).ok())
        .filter(|port| *port != 0)
        .unwrap_or(default)
}

/// Optional leading whitespace, optional sign, then at least one ASCII digit.
fn leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let n: i64 = rest[..len].parse().ok()?;
    Some(if negative { -n } else { n })
}
