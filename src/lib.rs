// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `TuyaIR` Lib - A Rust library to control infrared appliances via the Tuya
//! Cloud IR bridge.
//!
//! This library drives air conditioners and fans that sit behind a Tuya
//! infrared emitter, translating typed intents into the vendor's HTTP command
//! bodies and keeping a lightweight cached view of device state.
//!
//! # Supported Features
//!
//! - **Air conditioners**: power, HVAC mode, target temperature, and wind
//!   level, singly or batched into one scene command; polled status cache
//! - **Universal remotes**: key catalog discovery, key presses by name, fan
//!   speed with a named ladder and percentage conversion
//! - **Pluggable transport**: bring your own signed client by implementing
//!   one trait; an HTTP connector for plain JSON gateways is built in
//!
//! # Quick Start
//!
//! ## Air conditioner
//!
//! ```no_run
//! use tuya_ir_lib::{AcRemote, HttpConfig, Region};
//! use tuya_ir_lib::types::{HvacMode, Temperature};
//!
//! #[tokio::main]
//! async fn main() -> tuya_ir_lib::Result<()> {
//!     let ac = AcRemote::http(
//!         HttpConfig::region(Region::Europe).with_header("access_token", "..."),
//!         "ir-bridge-id",
//!         "ac-device-id",
//!     )?;
//!
//!     // Warm the status cache (best effort).
//!     ac.init().await;
//!
//!     ac.turn_on().await?;
//!     ac.set_hvac_mode(HvacMode::Cold).await?;
//!     ac.set_temperature(Temperature::new(22.0)?).await?;
//!
//!     ac.refresh().await?;
//!     println!("temperature: {:?}", ac.temperature());
//!     Ok(())
//! }
//! ```
//!
//! ## Fan behind a universal remote
//!
//! ```no_run
//! use tuya_ir_lib::{FanRemote, HttpConfig, Region};
//! use tuya_ir_lib::types::FanSpeed;
//!
//! #[tokio::main]
//! async fn main() -> tuya_ir_lib::Result<()> {
//!     let fan = FanRemote::http(
//!         HttpConfig::region(Region::Europe).with_header("access_token", "..."),
//!         "ir-bridge-id",
//!         "fan-remote-id",
//!         5,
//!     )?;
//!
//!     // Discover the remote's key catalog.
//!     fan.init().await;
//!
//!     fan.set_speed(FanSpeed::Medium).await?;
//!     assert_eq!(fan.percentage(), 66);
//!
//!     fan.toggle_light().await?;
//!     fan.turn_off().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Authentication
//!
//! Token acquisition, refresh, and request signing are outside this library.
//! Configure static headers on [`HttpConfig`] for gateways that accept them,
//! or implement [`Transport`](protocol::Transport) on top of your own signed
//! client.

pub mod command;
pub mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use command::{AcCommand, AcScene, Command, RawKeyCommand};
pub use device::{AcRemote, FanRemote};
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{ApiResponse, CloudResponse, Transport};
#[cfg(feature = "http")]
pub use protocol::{HttpConfig, HttpConnector, Region};
pub use response::{AcStatus, KeyList, RemoteKey};
pub use state::{AcState, FanState, KeyCatalog};
pub use types::{FanSpeed, HvacMode, PowerState, Temperature, Wind};
