// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for talking to the Tuya cloud.
//!
//! This module defines the [`Transport`] trait (the seam between the device
//! sessions and whatever actually performs the HTTP calls) and the
//! [`HttpConnector`] implementation built on `reqwest`.
//!
//! Token acquisition, refresh, and request signing are deliberately outside
//! this library. Callers either configure static headers on the connector or
//! implement [`Transport`] on top of their own signed client.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpConnector, Region};

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::error::{DeviceError, ParseError, ProtocolError};

/// Raw response from a cloud call.
///
/// Carries the unparsed JSON body; typed parsing happens above the transport
/// via [`CloudResponse::parse`].
#[derive(Debug, Clone)]
pub struct CloudResponse {
    body: String,
}

impl CloudResponse {
    /// Creates a new response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response body as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// The standard Tuya response envelope.
///
/// Every cloud call answers with `{success, result, code, msg, t}`. The
/// payload in `result` is only meaningful when `success` is true.
///
/// # Examples
///
/// ```
/// use tuya_ir_lib::protocol::ApiResponse;
///
/// let envelope: ApiResponse<serde_json::Value> =
///     serde_json::from_str(r#"{"success": true, "result": {"temp": "22"}, "t": 1545267690984}"#)
///         .unwrap();
///
/// assert!(envelope.success);
/// assert!(envelope.into_result().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the cloud accepted the request.
    #[serde(default)]
    pub success: bool,
    /// The result payload, present on success.
    #[serde(default)]
    pub result: Option<T>,
    /// Vendor error code, present on failure.
    #[serde(default)]
    pub code: Option<i64>,
    /// Vendor error message, present on failure.
    #[serde(default)]
    pub msg: Option<String>,
    /// Server timestamp in epoch milliseconds.
    #[serde(default)]
    pub t: Option<i64>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the envelope into its payload.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::Rejected`] when the envelope reports
    /// `success: false`, or [`ParseError::MissingField`] when a successful
    /// envelope carries no result.
    pub fn into_result(self) -> Result<T, crate::error::Error> {
        if !self.success {
            return Err(DeviceError::Rejected {
                code: self.code,
                message: self.msg.unwrap_or_else(|| "unspecified failure".to_string()),
            }
            .into());
        }
        self.result
            .ok_or_else(|| ParseError::MissingField("result".to_string()).into())
    }

    /// Checks the success flag, discarding any payload.
    ///
    /// Command acknowledgements often carry no meaningful result, so this is
    /// the right check for fire-and-forget calls.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::Rejected`] when the envelope reports
    /// `success: false`.
    pub fn ensure_success(self) -> Result<(), crate::error::Error> {
        if self.success {
            Ok(())
        } else {
            Err(DeviceError::Rejected {
                code: self.code,
                message: self.msg.unwrap_or_else(|| "unspecified failure".to_string()),
            }
            .into())
        }
    }

    /// Returns the server timestamp as a UTC datetime, if present.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.t.and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}

/// Trait for transports that can reach the Tuya cloud.
///
/// The device sessions treat this as an opaque request executor: build a path,
/// hand it over, interpret the body that comes back. Implement it to plug in a
/// signed client, a test double, or a local gateway.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Performs a GET request against the given path.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails to complete.
    async fn get(&self, path: &str) -> Result<CloudResponse, ProtocolError>;

    /// Performs a POST request with a JSON body against the given path.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails to complete.
    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<CloudResponse, ProtocolError>;
}
