// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw key commands for universal remotes.

use crate::response::RemoteKey;

/// A raw infrared key press, built from a catalog entry.
///
/// The raw-command endpoint needs the remote's category id alongside the key
/// descriptor, so this type is assembled by the session rather than by callers.
///
/// # Examples
///
/// ```
/// use tuya_ir_lib::command::RawKeyCommand;
/// use tuya_ir_lib::response::RemoteKey;
///
/// let key = RemoteKey {
///     key_id: 1,
///     key: "A".to_string(),
///     key_name: "Low".to_string(),
///     standard_key: None,
/// };
/// let cmd = RawKeyCommand::new(5, &key);
/// assert_eq!(
///     cmd.to_body(),
///     serde_json::json!({"category_id": 5, "key_id": 1, "key": "A"})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKeyCommand {
    category_id: i64,
    key_id: i64,
    key: String,
}

impl RawKeyCommand {
    /// Creates a raw key command for the given category and catalog entry.
    #[must_use]
    pub fn new(category_id: i64, key: &RemoteKey) -> Self {
        Self {
            category_id,
            key_id: key.key_id,
            key: key.key.clone(),
        }
    }

    /// Returns the JSON request body for the raw-command endpoint.
    #[must_use]
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "category_id": self.category_id,
            "key_id": self.key_id,
            "key": self.key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(id: i64, code: &str, name: &str) -> RemoteKey {
        RemoteKey {
            key_id: id,
            key: code.to_string(),
            key_name: name.to_string(),
            standard_key: None,
        }
    }

    #[test]
    fn body_carries_category_and_descriptor() {
        let cmd = RawKeyCommand::new(5, &key(3, "power_off", "Fan Off"));
        assert_eq!(
            cmd.to_body(),
            serde_json::json!({"category_id": 5, "key_id": 3, "key": "power_off"})
        );
    }
}
