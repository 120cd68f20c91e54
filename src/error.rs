// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `TuyaIR` library.
//!
//! This module provides a comprehensive error hierarchy for handling failures
//! across the library: value validation, protocol communication, JSON parsing,
//! and device operations.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when interacting
/// with infrared devices through the Tuya cloud.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during device operations.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A percentage is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid power state token was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An invalid HVAC mode token was provided.
    #[error("invalid hvac mode: {0}")]
    InvalidHvacMode(String),

    /// An invalid wind level token was provided.
    #[error("invalid wind level: {0}")]
    InvalidWind(String),

    /// An invalid fan speed name was provided.
    #[error("invalid fan speed: {0}")]
    InvalidFanSpeed(String),

    /// A target temperature is outside the supported range.
    #[error("temperature {0} is out of range [16, 30]")]
    InvalidTemperature(f32),
}

/// Errors related to cloud communication.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the cloud endpoint failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid endpoint URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The cloud rejected the request credentials.
    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Errors related to parsing cloud responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Errors related to device operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The cloud answered with `success: false`.
    #[error("device rejected command (code {code:?}): {message}")]
    Rejected {
        /// Vendor error code from the response envelope, if present.
        code: Option<i64>,
        /// Vendor error message from the response envelope.
        message: String,
    },

    /// The requested key name is not in the remote's command catalog.
    #[error("unknown key: {0}")]
    UnknownKey(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 100,
            actual: 150,
        };
        assert_eq!(err.to_string(), "value 150 is out of range [0, 100]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidHvacMode("frosty".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidHvacMode(_))));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("key_list".to_string());
        assert_eq!(err.to_string(), "missing field in response: key_list");
    }

    #[test]
    fn device_error_display() {
        let err = DeviceError::UnknownKey("Swing".to_string());
        assert_eq!(err.to_string(), "unknown key: Swing");
    }

    #[test]
    fn rejected_carries_vendor_code() {
        let err = DeviceError::Rejected {
            code: Some(1106),
            message: "permission deny".to_string(),
        };
        assert!(err.to_string().contains("1106"));
        assert!(err.to_string().contains("permission deny"));
    }
}
