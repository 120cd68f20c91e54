// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key listing payload for universal remotes.

use serde::Deserialize;

/// One learnable infrared key of a remote.
///
/// `key_name` is the human-readable label shown in the vendor app and is what
/// the command catalog indexes by; `key_id` and `key` are what the raw-command
/// endpoint wants back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteKey {
    /// Vendor key identifier.
    pub key_id: i64,
    /// Vendor key code.
    pub key: String,
    /// Human-readable key name, unique within a catalog.
    pub key_name: String,
    /// Whether this is a vendor-standard key rather than a learned one.
    #[serde(default)]
    pub standard_key: Option<bool>,
}

/// Result payload of the key listing endpoint.
///
/// # Examples
///
/// ```
/// use tuya_ir_lib::response::KeyList;
///
/// let list: KeyList = serde_json::from_str(
///     r#"{"category_id": 5, "key_list": [{"key_id": 1, "key": "A", "key_name": "Low"}]}"#,
/// )
/// .unwrap();
///
/// assert_eq!(list.category_id, Some(5));
/// assert_eq!(list.key_list.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KeyList {
    /// Category the remote belongs to, as reported by the cloud.
    ///
    /// Informational; the session's configured category id is what goes into
    /// raw command bodies.
    #[serde(default)]
    pub category_id: Option<i64>,
    /// The remote's keys.
    #[serde(default)]
    pub key_list: Vec<RemoteKey>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_list() {
        let list: KeyList = serde_json::from_str(
            r#"{
                "category_id": 5,
                "key_list": [
                    {"key_id": 1, "key": "A", "key_name": "Low", "standard_key": true},
                    {"key_id": 2, "key": "B", "key_name": "High"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(list.category_id, Some(5));
        assert_eq!(list.key_list.len(), 2);
        assert_eq!(list.key_list[0].key_name, "Low");
        assert_eq!(list.key_list[0].standard_key, Some(true));
        assert!(list.key_list[1].standard_key.is_none());
    }

    #[test]
    fn empty_payload_yields_empty_list() {
        let list: KeyList = serde_json::from_str(r"{}").unwrap();

        assert!(list.category_id.is_none());
        assert!(list.key_list.is_empty());
    }
}
