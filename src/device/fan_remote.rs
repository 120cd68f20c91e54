// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Universal remote session for fans.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::command::RawKeyCommand;
use crate::error::{DeviceError, Error};
use crate::protocol::{ApiResponse, Transport};
use crate::response::KeyList;
use crate::state::{FanState, KeyCatalog};
use crate::types::{FanSpeed, PowerState};

/// Session for one fan driven through a learned universal remote.
///
/// During [`init`](Self::init) the session lists the remote's keys and builds
/// a name-indexed [`KeyCatalog`]; every action afterwards is a catalog lookup
/// followed by a raw key press. The vendor exposes no status endpoint for
/// remotes, so power and speed are a best-effort local echo.
///
/// The remote's `category_id` is a required construction parameter and is
/// included in every raw command body.
///
/// # Examples
///
/// ```no_run
/// use tuya_ir_lib::device::FanRemote;
/// use tuya_ir_lib::protocol::{HttpConfig, Region};
/// use tuya_ir_lib::types::FanSpeed;
///
/// # async fn example() -> tuya_ir_lib::Result<()> {
/// let fan = FanRemote::http(HttpConfig::region(Region::Europe), "ir1", "fan1", 5)?;
///
/// fan.init().await;
/// fan.set_speed(FanSpeed::Medium).await?;
/// assert_eq!(fan.percentage(), 66);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FanRemote<T: Transport> {
    transport: Arc<T>,
    infrared_id: String,
    remote_id: String,
    category_id: i64,
    catalog: Arc<RwLock<KeyCatalog>>,
    state: Arc<RwLock<FanState>>,
}

impl<T: Transport> FanRemote<T> {
    /// Key name that switches the fan off.
    pub const KEY_FAN_OFF: &'static str = "Fan Off";

    /// Key name that toggles the fan's light.
    pub const KEY_LIGHT_TOGGLE: &'static str = "Light On/Off";

    /// Creates a session for the remote `remote_id` behind the bridge
    /// `infrared_id`, belonging to the vendor category `category_id`.
    pub fn new(
        transport: T,
        infrared_id: impl Into<String>,
        remote_id: impl Into<String>,
        category_id: i64,
    ) -> Self {
        Self {
            transport: Arc::new(transport),
            infrared_id: infrared_id.into(),
            remote_id: remote_id.into(),
            category_id,
            catalog: Arc::new(RwLock::new(KeyCatalog::new())),
            state: Arc::new(RwLock::new(FanState::new())),
        }
    }

    /// Returns the infrared bridge id.
    #[must_use]
    pub fn infrared_id(&self) -> &str {
        &self.infrared_id
    }

    /// Returns the remote device id.
    #[must_use]
    pub fn remote_id(&self) -> &str {
        &self.remote_id
    }

    /// Returns the configured category id.
    #[must_use]
    pub fn category_id(&self) -> i64 {
        self.category_id
    }

    fn keys_path(&self) -> String {
        format!(
            "/v2.0/infrareds/{}/remotes/{}/keys",
            urlencoding::encode(&self.infrared_id),
            urlencoding::encode(&self.remote_id),
        )
    }

    fn raw_command_path(&self) -> String {
        format!(
            "/v2.0/infrareds/{}/remotes/{}/raw/command",
            urlencoding::encode(&self.infrared_id),
            urlencoding::encode(&self.remote_id),
        )
    }

    /// Discovers the remote's key catalog.
    ///
    /// A failed listing is logged and swallowed; the catalog stays empty and
    /// every subsequent key press fails its lookup until `init` succeeds.
    /// Ends with a [`refresh`](Self::refresh).
    pub async fn init(&self) {
        match self.fetch_keys().await {
            Ok(catalog) => {
                tracing::debug!(
                    remote_id = %self.remote_id,
                    keys = catalog.len(),
                    "Discovered remote key catalog"
                );
                *self.catalog.write() = catalog;
            }
            Err(error) => {
                tracing::warn!(remote_id = %self.remote_id, %error, "Key discovery failed");
            }
        }
        self.refresh().await;
    }

    /// Fetches the key listing and builds a catalog from it.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the envelope reports failure, or
    /// the payload cannot be parsed.
    pub async fn fetch_keys(&self) -> Result<KeyCatalog, Error> {
        let response = self.transport.get(&self.keys_path()).await?;
        let envelope: ApiResponse<KeyList> = response.parse()?;
        Ok(KeyCatalog::from_key_list(envelope.into_result()?))
    }

    /// Refreshes remote state.
    ///
    /// Currently a no-op: the vendor exposes no status endpoint for remotes.
    /// Kept as the polling hook so hosts can treat both session types alike.
    pub async fn refresh(&self) {
        tracing::trace!(remote_id = %self.remote_id, "Remote state refresh (no-op)");
    }

    /// Turns the fan off via the `"Fan Off"` key.
    ///
    /// The local power echo is set to off before the key press goes out.
    ///
    /// # Errors
    ///
    /// Returns error if the key is not cataloged or the command fails.
    pub async fn turn_off(&self) -> Result<(), Error> {
        self.state.write().note_off();
        self.send_key(Self::KEY_FAN_OFF).await
    }

    /// Toggles the fan's light via the `"Light On/Off"` key.
    ///
    /// Local state is untouched; a toggle is not trackable without device
    /// feedback.
    ///
    /// # Errors
    ///
    /// Returns error if the key is not cataloged or the command fails.
    pub async fn toggle_light(&self) -> Result<(), Error> {
        self.send_key(Self::KEY_LIGHT_TOGGLE).await
    }

    /// Sets the fan speed via the key named after the rung.
    ///
    /// The local echo records the speed and infers power on before the key
    /// press goes out.
    ///
    /// # Errors
    ///
    /// Returns error if the key is not cataloged or the command fails.
    pub async fn set_speed(&self, speed: FanSpeed) -> Result<(), Error> {
        self.state.write().note_speed(speed);
        self.send_key(speed.as_str()).await
    }

    /// Sets the fan speed from a percentage.
    ///
    /// # Errors
    ///
    /// Returns error if the percentage is above 100, the bucketed key is not
    /// cataloged, or the command fails.
    pub async fn set_percentage(&self, percentage: u8) -> Result<(), Error> {
        let speed = FanSpeed::from_percentage(percentage).map_err(Error::Value)?;
        self.set_speed(speed).await
    }

    /// Presses a cataloged key by name.
    ///
    /// A name missing from the catalog is a lookup failure: no request is
    /// made.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnknownKey`] for uncataloged names, or a
    /// protocol/device error if the command fails.
    pub async fn send_key(&self, name: &str) -> Result<(), Error> {
        let key = self
            .catalog
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::Device(DeviceError::UnknownKey(name.to_string())))?;

        let body = RawKeyCommand::new(self.category_id, &key).to_body();

        tracing::debug!(
            remote_id = %self.remote_id,
            key = name,
            key_id = key.key_id,
            "Sending raw key command"
        );

        let response = self.transport.post(&self.raw_command_path(), &body).await?;
        let envelope: ApiResponse<serde_json::Value> = response.parse()?;
        envelope.ensure_success()
    }

    /// Inferred power state, if any command has established one.
    #[must_use]
    pub fn power(&self) -> Option<PowerState> {
        self.state.read().power()
    }

    /// Last requested speed, if any.
    #[must_use]
    pub fn speed(&self) -> Option<FanSpeed> {
        self.state.read().speed()
    }

    /// Last requested speed as a percentage; 0 when no speed was ever set.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.state.read().percentage()
    }

    /// Number of rungs on the speed ladder.
    #[must_use]
    pub fn speed_count(&self) -> u8 {
        FanSpeed::count()
    }

    /// Names of all discovered keys, unordered.
    #[must_use]
    pub fn key_names(&self) -> Vec<String> {
        self.catalog
            .read()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(feature = "http")]
impl FanRemote<crate::protocol::HttpConnector> {
    /// Creates an HTTP-backed session from a connector configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the connector cannot be built from the configuration.
    pub fn http(
        config: crate::protocol::HttpConfig,
        infrared_id: impl Into<String>,
        remote_id: impl Into<String>,
        category_id: i64,
    ) -> Result<Self, Error> {
        let connector = config.into_connector()?;
        Ok(Self::new(connector, infrared_id, remote_id, category_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use crate::protocol::CloudResponse;

    struct FakeTransport {
        responses: RwLock<Vec<Result<String, ()>>>,
        requests: RwLock<Vec<(String, String, Option<serde_json::Value>)>>,
    }

    impl FakeTransport {
        fn new(responses: Vec<Result<String, ()>>) -> Self {
            Self {
                responses: RwLock::new(responses),
                requests: RwLock::new(Vec::new()),
            }
        }

        fn next(&self) -> Result<CloudResponse, ProtocolError> {
            match self.responses.write().remove(0) {
                Ok(body) => Ok(CloudResponse::new(body)),
                Err(()) => Err(ProtocolError::ConnectionFailed("request failed".into())),
            }
        }
    }

    impl Transport for FakeTransport {
        async fn get(&self, path: &str) -> Result<CloudResponse, ProtocolError> {
            self.requests
                .write()
                .push(("GET".into(), path.into(), None));
            self.next()
        }

        async fn post(
            &self,
            path: &str,
            body: &serde_json::Value,
        ) -> Result<CloudResponse, ProtocolError> {
            self.requests
                .write()
                .push(("POST".into(), path.into(), Some(body.clone())));
            self.next()
        }
    }

    const KEY_LIST: &str = r#"{"success": true, "result": {"category_id": 5, "key_list": [
        {"key_id": 1, "key": "A", "key_name": "Low"},
        {"key_id": 2, "key": "B", "key_name": "High"},
        {"key_id": 3, "key": "C", "key_name": "Fan Off"}
    ]}}"#;

    fn remote(responses: Vec<Result<String, ()>>) -> FanRemote<FakeTransport> {
        FanRemote::new(FakeTransport::new(responses), "ir1", "fan1", 5)
    }

    #[tokio::test]
    async fn init_builds_catalog() {
        let session = remote(vec![Ok(KEY_LIST.into())]);

        session.init().await;

        let mut names = session.key_names();
        names.sort_unstable();
        assert_eq!(names, vec!["Fan Off", "High", "Low"]);
    }

    #[tokio::test]
    async fn init_failure_leaves_catalog_empty() {
        let session = remote(vec![Err(())]);

        session.init().await;

        assert!(session.key_names().is_empty());
    }

    #[tokio::test]
    async fn duplicate_key_names_keep_last() {
        let session = remote(vec![Ok(r#"{"success": true, "result": {"key_list": [
            {"key_id": 1, "key": "A", "key_name": "Low"},
            {"key_id": 9, "key": "Z", "key_name": "Low"}
        ]}}"#
            .into())]);

        session.init().await;

        assert_eq!(session.key_names(), vec!["Low"]);
    }

    #[tokio::test]
    async fn set_speed_updates_local_state_and_posts_key() {
        let session = remote(vec![
            Ok(KEY_LIST.into()),
            Ok(r#"{"success": true, "result": true}"#.into()),
        ]);

        session.init().await;
        session.set_speed(FanSpeed::Low).await.unwrap();

        assert_eq!(session.speed(), Some(FanSpeed::Low));
        assert_eq!(session.power(), Some(PowerState::On));
        assert_eq!(session.percentage(), 33);

        let requests = session.transport.requests.read();
        let (method, path, body) = &requests[1];
        assert_eq!(method, "POST");
        assert_eq!(path, "/v2.0/infrareds/ir1/remotes/fan1/raw/command");
        assert_eq!(
            body.as_ref().unwrap(),
            &serde_json::json!({"category_id": 5, "key_id": 1, "key": "A"})
        );
    }

    #[tokio::test]
    async fn turn_off_sets_local_power_then_sends_key() {
        let session = remote(vec![
            Ok(KEY_LIST.into()),
            Ok(r#"{"success": true, "result": true}"#.into()),
        ]);

        session.init().await;
        session.turn_off().await.unwrap();

        assert_eq!(session.power(), Some(PowerState::Off));

        let requests = session.transport.requests.read();
        assert_eq!(
            requests[1].2.as_ref().unwrap(),
            &serde_json::json!({"category_id": 5, "key_id": 3, "key": "C"})
        );
    }

    #[tokio::test]
    async fn unknown_key_is_lookup_failure_without_request() {
        let session = remote(vec![Ok(KEY_LIST.into())]);

        session.init().await;
        let err = session.send_key("Swing").await.unwrap_err();

        assert!(matches!(
            err,
            Error::Device(DeviceError::UnknownKey(name)) if name == "Swing"
        ));
        // Only the init GET went out.
        assert_eq!(session.transport.requests.read().len(), 1);
    }

    #[tokio::test]
    async fn set_percentage_buckets_to_rung() {
        let session = remote(vec![
            Ok(KEY_LIST.into()),
            Ok(r#"{"success": true, "result": true}"#.into()),
        ]);

        session.init().await;
        session.set_percentage(20).await.unwrap();

        assert_eq!(session.speed(), Some(FanSpeed::Low));
    }

    #[tokio::test]
    async fn percentage_zero_before_any_speed() {
        let session = remote(vec![Ok(KEY_LIST.into())]);

        session.init().await;

        assert_eq!(session.percentage(), 0);
        assert!(session.speed().is_none());
        assert!(session.power().is_none());
        assert_eq!(session.speed_count(), 3);
    }
}
