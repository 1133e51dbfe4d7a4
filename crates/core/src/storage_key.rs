//! Filesystem-safe storage keys derived from entity identities.

use serde::{Deserialize, Serialize};

/// Normalize a human-readable identity into a filesystem-safe token.
///
/// Lowercases the input, turns spaces into `_` and every other character
/// outside `[0-9a-z_-]` into `-`. Idempotent; empty input yields empty output.
pub fn normalize(identity: &str) -> String {
    identity
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' => '_',
            '0'..='9' | 'a'..='z' | '_' | '-' => c,
            _ => '-',
        })
        .collect()
}

/// Normalized key under which an entity snapshot is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    /// Derive the key from an entity identity.
    pub fn from_identity(identity: &str) -> Self {
        Self(normalize(identity))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name used by file-backed stores (`<key>.json`).
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl core::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl crate::ValueObject for StorageKey {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lowercases_and_replaces_spaces() {
        assert_eq!(normalize("John Best-Budget"), "john_best-budget");
    }

    #[test]
    fn punctuation_becomes_hyphen() {
        assert_eq!(normalize("O'Brien & Sons: Savings!"), "o-brien_-_sons-_savings-");
    }

    #[test]
    fn non_ascii_characters_become_hyphens() {
        assert_eq!(normalize("Søren Ø"), "s-ren_-");
        assert_eq!(normalize("tab\there"), "tab-here");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(StorageKey::from_identity("").file_name(), ".json");
    }

    #[test]
    fn file_name_appends_json_extension() {
        let key = StorageKey::from_identity("John Best-Budget");
        assert_eq!(key.as_str(), "john_best-budget");
        assert_eq!(key.file_name(), "john_best-budget.json");
        assert_eq!(key.to_string(), "john_best-budget");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: normalizing twice is the same as normalizing once.
        #[test]
        fn normalize_is_idempotent(s in any::<String>()) {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Property: output only ever contains `[0-9a-z_-]`.
        #[test]
        fn normalize_output_is_filesystem_safe(s in any::<String>()) {
            let key = normalize(&s);
            prop_assert!(key
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase() || c == '_' || c == '-'));
        }
    }
}
