// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air conditioner session.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::command::{AcCommand, AcScene, Command};
use crate::error::Error;
use crate::protocol::{ApiResponse, Transport};
use crate::response::AcStatus;
use crate::state::AcState;
use crate::types::{HvacMode, PowerState, Temperature, Wind};

/// Session for one infrared air conditioner.
///
/// Owns a cached [`AcState`] snapshot and translates typed intents into the
/// vendor's command bodies. The snapshot only changes on a successful status
/// fetch; commands are fire-and-forget and the host is expected to re-poll to
/// reconcile.
///
/// # Examples
///
/// ```no_run
/// use tuya_ir_lib::device::AcRemote;
/// use tuya_ir_lib::protocol::{HttpConfig, Region};
/// use tuya_ir_lib::types::HvacMode;
///
/// # async fn example() -> tuya_ir_lib::Result<()> {
/// let ac = AcRemote::http(HttpConfig::region(Region::Europe), "ir1", "ac1")?;
///
/// ac.init().await;
/// ac.turn_on().await?;
/// ac.set_hvac_mode(HvacMode::Cold).await?;
///
/// println!("cached mode: {:?}", ac.mode());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AcRemote<T: Transport> {
    transport: Arc<T>,
    infrared_id: String,
    climate_id: String,
    state: Arc<RwLock<AcState>>,
}

impl<T: Transport> AcRemote<T> {
    /// Creates a session for the AC `climate_id` behind the bridge
    /// `infrared_id`.
    pub fn new(
        transport: T,
        infrared_id: impl Into<String>,
        climate_id: impl Into<String>,
    ) -> Self {
        Self {
            transport: Arc::new(transport),
            infrared_id: infrared_id.into(),
            climate_id: climate_id.into(),
            state: Arc::new(RwLock::new(AcState::new())),
        }
    }

    /// Returns the infrared bridge id.
    #[must_use]
    pub fn infrared_id(&self) -> &str {
        &self.infrared_id
    }

    /// Returns the AC device id.
    #[must_use]
    pub fn climate_id(&self) -> &str {
        &self.climate_id
    }

    fn status_path(&self) -> String {
        format!(
            "/v2.0/infrareds/{}/remotes/{}/ac/status",
            urlencoding::encode(&self.infrared_id),
            urlencoding::encode(&self.climate_id),
        )
    }

    fn command_path(&self) -> String {
        format!(
            "/v2.0/infrareds/{}/air-conditioners/{}/command",
            urlencoding::encode(&self.infrared_id),
            urlencoding::encode(&self.climate_id),
        )
    }

    fn scene_path(&self) -> String {
        format!(
            "/v2.0/infrareds/{}/air-conditioners/{}/scenes/command",
            urlencoding::encode(&self.infrared_id),
            urlencoding::encode(&self.climate_id),
        )
    }

    /// Warms the cache with one status fetch.
    ///
    /// A failed fetch is logged and swallowed; the cache simply stays unset
    /// until the next [`refresh`](Self::refresh).
    pub async fn init(&self) {
        if let Err(error) = self.refresh().await {
            tracing::warn!(climate_id = %self.climate_id, %error, "Initial status fetch failed");
        }
    }

    /// Fetches the current status and merges it into the cached snapshot.
    ///
    /// On any failure the snapshot is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns error if the fetch fails or the cloud rejects the request.
    pub async fn refresh(&self) -> Result<(), Error> {
        let status = self.status().await?;
        let changed = self.state.write().apply_status(&status);

        tracing::debug!(climate_id = %self.climate_id, changed, "Applied AC status");

        Ok(())
    }

    /// Fetches the AC status without touching the cache.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the envelope reports failure, or
    /// the payload cannot be parsed.
    pub async fn status(&self) -> Result<AcStatus, Error> {
        let response = self.transport.get(&self.status_path()).await?;
        let envelope: ApiResponse<AcStatus> = response.parse()?;
        envelope.into_result()
    }

    /// Turns the unit on.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn turn_on(&self) -> Result<(), Error> {
        self.send_command(&AcCommand::on()).await
    }

    /// Turns the unit off.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn turn_off(&self) -> Result<(), Error> {
        self.send_command(&AcCommand::off()).await
    }

    /// Sets the target temperature.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_temperature(&self, temperature: Temperature) -> Result<(), Error> {
        self.send_command(&AcCommand::Temperature(temperature)).await
    }

    /// Sets the operating mode.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_hvac_mode(&self, mode: HvacMode) -> Result<(), Error> {
        self.send_command(&AcCommand::Mode(mode)).await
    }

    /// Sets the internal fan level.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_wind(&self, wind: Wind) -> Result<(), Error> {
        self.send_command(&AcCommand::Wind(wind)).await
    }

    /// Sends a single-field command.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the cloud rejects the command.
    pub async fn send_command(&self, command: &AcCommand) -> Result<(), Error> {
        let body = command.to_body();

        tracing::debug!(
            climate_id = %self.climate_id,
            code = command.code(),
            value = %command.value(),
            "Sending AC command"
        );

        let response = self.transport.post(&self.command_path(), &body).await?;
        let envelope: ApiResponse<serde_json::Value> = response.parse()?;
        envelope.ensure_success()
    }

    /// Applies all four AC fields in one batched scene command.
    ///
    /// One outgoing request, never four.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the cloud rejects the command.
    pub async fn set_scene(&self, scene: AcScene) -> Result<(), Error> {
        let body = scene.to_body();

        tracing::debug!(climate_id = %self.climate_id, %body, "Sending AC scene command");

        let response = self.transport.post(&self.scene_path(), &body).await?;
        let envelope: ApiResponse<serde_json::Value> = response.parse()?;
        envelope.ensure_success()
    }

    /// Returns a snapshot of the cached state.
    #[must_use]
    pub fn state(&self) -> AcState {
        self.state.read().clone()
    }

    /// Cached target temperature, if known.
    #[must_use]
    pub fn temperature(&self) -> Option<f32> {
        self.state.read().temperature()
    }

    /// Cached operating mode, if known.
    #[must_use]
    pub fn mode(&self) -> Option<HvacMode> {
        self.state.read().mode()
    }

    /// Cached power state, if known.
    #[must_use]
    pub fn power(&self) -> Option<PowerState> {
        self.state.read().power()
    }

    /// Cached internal fan level, if known.
    #[must_use]
    pub fn wind(&self) -> Option<Wind> {
        self.state.read().wind()
    }
}

#[cfg(feature = "http")]
impl AcRemote<crate::protocol::HttpConnector> {
    /// Creates an HTTP-backed session from a connector configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the connector cannot be built from the configuration.
    pub fn http(
        config: crate::protocol::HttpConfig,
        infrared_id: impl Into<String>,
        climate_id: impl Into<String>,
    ) -> Result<Self, Error> {
        let connector = config.into_connector()?;
        Ok(Self::new(connector, infrared_id, climate_id))
    }
}
