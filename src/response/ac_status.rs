// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air conditioner status payload.

use serde::{Deserialize, Deserializer};

use crate::error::ParseError;

/// Status payload of an infrared air conditioner.
///
/// Every field is optional: the cloud omits keys it has no reading for, and
/// an absent key means "unset", never zero or false. Values arrive as strings
/// on most firmware revisions and as bare numbers on a few, so deserialization
/// accepts both.
///
/// # Examples
///
/// ```
/// use tuya_ir_lib::response::AcStatus;
///
/// let status: AcStatus =
///     serde_json::from_str(r#"{"temp": "22", "mode": "cold"}"#).unwrap();
///
/// assert_eq!(status.temp, Some(22.0));
/// assert_eq!(status.mode.as_deref(), Some("cold"));
/// assert!(status.power.is_none());
/// assert!(status.wind.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AcStatus {
    /// Current target temperature in degrees Celsius.
    #[serde(default, deserialize_with = "de_opt_number")]
    pub temp: Option<f32>,
    /// Raw operating mode token.
    #[serde(default, deserialize_with = "de_opt_token")]
    pub mode: Option<String>,
    /// Raw power token (`"1"`/`"0"`).
    #[serde(default, deserialize_with = "de_opt_token")]
    pub power: Option<String>,
    /// Raw wind level token.
    #[serde(default, deserialize_with = "de_opt_token")]
    pub wind: Option<String>,
}

/// Accepts a JSON number or a numeric string.
fn de_opt_number<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => {
            #[allow(clippy::cast_possible_truncation)]
            let value = n.as_f64().map(|f| f as f32);
            Ok(value)
        }
        Some(serde_json::Value::String(s)) => Ok(s.parse().ok()),
        Some(other) => Err(serde::de::Error::custom(ParseError::UnexpectedFormat(
            format!("expected number or string, got {other}"),
        ))),
    }
}

/// Accepts a JSON string or a number, normalized to a string token.
fn de_opt_token<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(ParseError::UnexpectedFormat(
            format!("expected string or number, got {other}"),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_status_from_strings() {
        let status: AcStatus = serde_json::from_str(
            r#"{"temp": "22", "mode": "cold", "power": "1", "wind": "2"}"#,
        )
        .unwrap();

        assert_eq!(status.temp, Some(22.0));
        assert_eq!(status.mode.as_deref(), Some("cold"));
        assert_eq!(status.power.as_deref(), Some("1"));
        assert_eq!(status.wind.as_deref(), Some("2"));
    }

    #[test]
    fn numeric_fields_are_normalized() {
        let status: AcStatus =
            serde_json::from_str(r#"{"temp": 22.5, "mode": 0, "power": 1, "wind": 3}"#).unwrap();

        assert_eq!(status.temp, Some(22.5));
        assert_eq!(status.mode.as_deref(), Some("0"));
        assert_eq!(status.power.as_deref(), Some("1"));
        assert_eq!(status.wind.as_deref(), Some("3"));
    }

    #[test]
    fn absent_keys_stay_unset() {
        let status: AcStatus = serde_json::from_str(r"{}").unwrap();

        assert_eq!(status, AcStatus::default());
    }

    #[test]
    fn null_keys_stay_unset() {
        let status: AcStatus =
            serde_json::from_str(r#"{"temp": null, "mode": null}"#).unwrap();

        assert!(status.temp.is_none());
        assert!(status.mode.is_none());
    }

    #[test]
    fn structured_values_are_rejected() {
        let result = serde_json::from_str::<AcStatus>(r#"{"temp": [22]}"#);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("unexpected response format"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let status: AcStatus =
            serde_json::from_str(r#"{"temp": "20", "remote_id": "abc"}"#).unwrap();

        assert_eq!(status.temp, Some(20.0));
    }
}
