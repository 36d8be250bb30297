//! Configuration documents written to the emulator config directory.
//!
//! - [`FirebaseConfig`]: the `firebase.json` manifest naming rules files and
//!   emulator host/port settings.
//! - [`DatabaseRules`] and the rules text constants: permissive access rules
//!   for each emulated backend. Local testing only.

mod manifest;
mod rules;

pub use manifest::*;
pub use rules::*;
