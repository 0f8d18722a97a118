//! Name keys - Normalized synergy identifiers and the display-name table

use crate::synergy::constants::NAME_KEY_PREFIX;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Normalized synergy identifier (e.g. `#TEST_SYNERGY_1`)
///
/// Only produced by [`normalize_name`], so every `NameKey` is already in
/// normal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameKey(String);

impl NameKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NameKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Turn a display name (or an existing key) into a [`NameKey`]
///
/// Uppercases, replaces spaces with `_`, strips `'`, `,` and `.`, and
/// prefixes the sentinel. A leading sentinel on the input is treated as
/// part of an existing key, so normalizing a key returns it unchanged.
pub fn normalize_name(raw: &str) -> NameKey {
    let body = raw.strip_prefix(NAME_KEY_PREFIX).unwrap_or(raw);

    let mut key = String::with_capacity(body.len() + 1);
    key.push(NAME_KEY_PREFIX);
    for c in body.chars() {
        match c {
            '\'' | ',' | '.' => {}
            ' ' => key.push('_'),
            c => key.extend(c.to_uppercase()),
        }
    }
    NameKey(key)
}

/// Display names keyed by their normalized key
///
/// Setting a key twice keeps the latest name.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: HashMap<NameKey, String>,
}

impl StringTable {
    pub fn new() -> Self {
        StringTable::default()
    }

    /// Store the display name for a key
    pub fn set(&mut self, key: NameKey, name: &str) {
        self.entries.insert(key, name.to_string());
    }

    pub fn get(&self, key: &NameKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize_name("Test Synergy 1").as_str(), "#TEST_SYNERGY_1");
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(
            normalize_name("Knight's Valor, Jr.").as_str(),
            "#KNIGHTS_VALOR_JR"
        );
    }

    #[test]
    fn test_normalize_existing_key_is_noop() {
        let key = normalize_name("Blood Rite");
        assert_eq!(normalize_name(key.as_str()), key);
    }

    #[test]
    fn test_normalize_lowercase_key_input() {
        assert_eq!(normalize_name("#blood rite").as_str(), "#BLOOD_RITE");
    }

    #[test]
    fn test_normalize_only_replaces_spaces() {
        assert_eq!(normalize_name("Foo\tBar").as_str(), "#FOO\tBAR");
        assert_eq!(normalize_name("Foo Bar").as_str(), "#FOO_BAR");
    }

    #[test]
    fn test_string_table_last_write_wins() {
        let mut table = StringTable::new();
        let key = normalize_name("Echo");
        table.set(key.clone(), "Echo");
        table.set(key.clone(), "ECHO");
        assert_eq!(table.get(&key), Some("ECHO"));
        assert_eq!(table.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(raw in "[a-zA-Z0-9 '.,#_\\-\téß]{0,24}") {
            let once = normalize_name(&raw);
            let twice = normalize_name(once.as_str());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_normalized_key_has_no_stripped_chars(raw in "[a-zA-Z '.,]{0,24}") {
            let key = normalize_name(&raw);
            prop_assert!(key.as_str().starts_with(NAME_KEY_PREFIX));
            prop_assert!(!key.as_str().contains(|c: char| matches!(c, '\'' | ',' | '.' | ' ')));
        }
    }
}
