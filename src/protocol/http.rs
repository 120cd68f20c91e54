// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP connector for the Tuya cloud OpenAPI.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::ProtocolError;
use crate::protocol::{CloudResponse, Transport};

/// Tuya cloud data-center regions and their API endpoints.
///
/// # Examples
///
/// ```
/// use tuya_ir_lib::protocol::Region;
///
/// assert_eq!(Region::Europe.endpoint(), "https://openapi.tuyaeu.com");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Central Europe data center.
    Europe,
    /// Western America data center.
    America,
    /// China data center.
    China,
    /// India data center.
    India,
}

impl Region {
    /// Returns the OpenAPI endpoint for this region.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Europe => "https://openapi.tuyaeu.com",
            Self::America => "https://openapi.tuyaus.com",
            Self::China => "https://openapi.tuyacn.com",
            Self::India => "https://openapi.tuyain.com",
        }
    }
}

/// Configuration for an HTTP cloud connector.
///
/// Holds the endpoint, request timeout, and any static headers every request
/// should carry (for example a gateway token). Request signing is outside this
/// library; see the [`Transport`](crate::protocol::Transport) trait for
/// plugging in a signed client.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tuya_ir_lib::protocol::{HttpConfig, Region};
///
/// let config = HttpConfig::region(Region::Europe)
///     .with_header("access_token", "abc123")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    endpoint: String,
    headers: Vec<(String, String)>,
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for an explicit endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers: Vec::new(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Creates a configuration for one of the Tuya data-center regions.
    #[must_use]
    pub fn region(region: Region) -> Self {
        Self::new(region.endpoint())
    }

    /// Adds a static header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an [`HttpConnector`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint is not an HTTP(S) URL, a header is
    /// malformed, or the HTTP client cannot be created.
    pub fn into_connector(self) -> Result<HttpConnector, ProtocolError> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ProtocolError::InvalidEndpoint(self.endpoint));
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ProtocolError::InvalidEndpoint(format!("header {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ProtocolError::InvalidEndpoint(format!("header value: {e}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpConnector {
            endpoint: self.endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }
}

/// HTTP transport speaking plain JSON to a Tuya OpenAPI endpoint.
///
/// Each call is an independent request; there is no persistent connection and
/// no retry. Timeouts come from the configuration.
///
/// # Examples
///
/// ```no_run
/// use tuya_ir_lib::protocol::{HttpConfig, Region, Transport};
///
/// # async fn example() -> Result<(), tuya_ir_lib::error::ProtocolError> {
/// let connector = HttpConfig::region(Region::Europe).into_connector()?;
/// let response = connector.get("/v2.0/infrareds/ir1/remotes/ac1/ac/status").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpConnector {
    endpoint: String,
    client: Client,
}

impl HttpConnector {
    /// Creates a connector for the given endpoint with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint is invalid or the client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(endpoint).into_connector()
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.endpoint)
    }

    async fn read_body(response: reqwest::Response) -> Result<CloudResponse, ProtocolError> {
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed);
        }

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received cloud response");

        Ok(CloudResponse::new(body))
    }
}

impl Transport for HttpConnector {
    async fn get(&self, path: &str) -> Result<CloudResponse, ProtocolError> {
        let url = self.url(path);

        tracing::debug!(url = %url, "Sending GET request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        Self::read_body(response).await
    }

    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<CloudResponse, ProtocolError> {
        let url = self.url(path);

        tracing::debug!(url = %url, body = %body, "Sending POST request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        Self::read_body(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_endpoints() {
        assert_eq!(Region::Europe.endpoint(), "https://openapi.tuyaeu.com");
        assert_eq!(Region::America.endpoint(), "https://openapi.tuyaus.com");
        assert_eq!(Region::China.endpoint(), "https://openapi.tuyacn.com");
        assert_eq!(Region::India.endpoint(), "https://openapi.tuyain.com");
    }

    #[test]
    fn config_default_values() {
        let config = HttpConfig::region(Region::Europe);
        assert_eq!(config.endpoint(), "https://openapi.tuyaeu.com");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn config_rejects_non_http_endpoint() {
        let result = HttpConfig::new("mqtt://broker:1883").into_connector();
        assert!(matches!(result, Err(ProtocolError::InvalidEndpoint(_))));
    }

    #[test]
    fn connector_strips_trailing_slash() {
        let connector = HttpConnector::new("https://openapi.tuyaeu.com/").unwrap();
        assert_eq!(connector.endpoint(), "https://openapi.tuyaeu.com");
        assert_eq!(
            connector.url("/v2.0/infrareds/a/remotes/b/keys"),
            "https://openapi.tuyaeu.com/v2.0/infrareds/a/remotes/b/keys"
        );
    }

    #[test]
    fn config_with_headers_builds() {
        let connector = HttpConfig::region(Region::America)
            .with_header("client_id", "abc")
            .with_header("access_token", "def")
            .with_timeout(Duration::from_secs(5))
            .into_connector();
        assert!(connector.is_ok());
    }

    #[test]
    fn config_rejects_malformed_header_name() {
        let result = HttpConfig::region(Region::Europe)
            .with_header("bad header\n", "x")
            .into_connector();
        assert!(result.is_err());
    }
}
