use serde::{Deserialize, Serialize};

pub const MANIFEST_FILE: &str = "firebase.json";
pub const STORAGE_RULES_FILE: &str = "storage.rules";
pub const FIRESTORE_RULES_FILE: &str = "firestore.rules";
pub const DATABASE_RULES_FILE: &str = "database.rules.json";

/// Storage rules allowing every read and write on every object.
pub const STORAGE_RULES: &str = "rules_version = '2';
service firebase.storage {
  match /b/{bucket}/o {
    match /{allPaths=**} {
      allow read, write: if true;
    }
  }
}";

/// Firestore rules allowing every read and write on every document.
pub const FIRESTORE_RULES: &str = "rules_version = '2';
service cloud.firestore {
  match /databases/{database}/documents {
    match /{document=**} {
      allow read, write: if true;
    }
  }
}";

/// Realtime Database rules document (`database.rules.json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseRules {
    pub rules: DatabaseAccess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseAccess {
    #[serde(rename = ".read")]
    pub read: bool,
    #[serde(rename = ".write")]
    pub write: bool,
}

impl DatabaseRules {
    /// Rules granting read and write on the whole database.
    pub fn permissive() -> Self {
        Self {
            rules: DatabaseAccess {
                read: true,
                write: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_rules_use_dotted_keys() {
        let json = serde_json::to_string_pretty(&DatabaseRules::permissive()).unwrap();
        assert_eq!(
            json,
            "{\n  \"rules\": {\n    \".read\": true,\n    \".write\": true\n  }\n}"
        );
    }

    #[test]
    fn database_rules_parse_back_from_file_format() {
        let parsed: DatabaseRules =
            serde_json::from_str(r#"{ "rules": { ".read": true, ".write": false } }"#).unwrap();
        assert!(parsed.rules.read);
        assert!(!parsed.rules.write);
        assert_ne!(parsed, DatabaseRules::permissive());
    }

    #[test]
    fn rules_text_has_no_surrounding_whitespace() {
        for rules in [STORAGE_RULES, FIRESTORE_RULES] {
            assert_eq!(rules, rules.trim());
            assert!(rules.starts_with("rules_version = '2';"));
            assert!(rules.contains("allow read, write: if true;"));
        }
    }
}
