// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Name-indexed catalog of a remote's infrared keys.

use std::collections::HashMap;

use crate::response::{KeyList, RemoteKey};

/// The discovered command catalog of a universal remote.
///
/// Keys are indexed by their human-readable `key_name`. When the vendor lists
/// the same name twice, the later entry wins, so names are unique by
/// construction.
///
/// # Examples
///
/// ```
/// use tuya_ir_lib::response::KeyList;
/// use tuya_ir_lib::state::KeyCatalog;
///
/// let list: KeyList = serde_json::from_str(
///     r#"{"key_list": [{"key_id": 1, "key": "A", "key_name": "Low"}]}"#,
/// )
/// .unwrap();
/// let catalog = KeyCatalog::from_key_list(list);
///
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.get("Low").is_some());
/// assert!(catalog.get("Turbo").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyCatalog {
    keys: HashMap<String, RemoteKey>,
}

impl KeyCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a key listing, last duplicate name winning.
    #[must_use]
    pub fn from_key_list(list: KeyList) -> Self {
        let mut keys = HashMap::with_capacity(list.key_list.len());
        for key in list.key_list {
            keys.insert(key.key_name.clone(), key);
        }
        Self { keys }
    }

    /// Looks up a key by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RemoteKey> {
        self.keys.get(name)
    }

    /// Returns the number of cataloged keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no keys were discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the cataloged key names, unordered.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.keys.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(json: &str) -> KeyList {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_catalog() {
        let catalog = KeyCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get("Low").is_none());
    }

    #[test]
    fn indexes_by_key_name() {
        let catalog = KeyCatalog::from_key_list(list(
            r#"{"key_list": [
                {"key_id": 1, "key": "A", "key_name": "Low"},
                {"key_id": 2, "key": "B", "key_name": "High"}
            ]}"#,
        ));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Low").unwrap().key_id, 1);
        assert_eq!(catalog.get("High").unwrap().key, "B");
    }

    #[test]
    fn duplicate_names_last_wins() {
        let catalog = KeyCatalog::from_key_list(list(
            r#"{"key_list": [
                {"key_id": 1, "key": "A", "key_name": "Low"},
                {"key_id": 9, "key": "Z", "key_name": "Low"}
            ]}"#,
        ));

        assert_eq!(catalog.len(), 1);
        let entry = catalog.get("Low").unwrap();
        assert_eq!(entry.key_id, 9);
        assert_eq!(entry.key, "Z");
    }

    #[test]
    fn names_lists_all_keys() {
        let catalog = KeyCatalog::from_key_list(list(
            r#"{"key_list": [
                {"key_id": 1, "key": "A", "key_name": "Fan Off"},
                {"key_id": 2, "key": "B", "key_name": "Light On/Off"}
            ]}"#,
        ));

        let mut names = catalog.names();
        names.sort_unstable();
        assert_eq!(names, vec!["Fan Off", "Light On/Off"]);
    }
}
