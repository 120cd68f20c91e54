// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device sessions for infrared appliances behind a Tuya IR bridge.
//!
//! Two session types cover the two appliance families the bridge controls:
//!
//! - [`AcRemote`]: air conditioners. The cloud exposes a status endpoint for
//!   these, so the session keeps a cached snapshot refreshed by polling.
//! - [`FanRemote`]: fans (and anything else driven through a learned
//!   universal remote). No status endpoint exists; the session discovers the
//!   remote's key catalog once and tracks power/speed as a local echo.
//!
//! Both are generic over the [`Transport`](crate::protocol::Transport) seam,
//! so tests and signed clients plug in the same way.
//!
//! # Examples
//!
//! ```no_run
//! use tuya_ir_lib::device::AcRemote;
//! use tuya_ir_lib::protocol::{HttpConfig, Region};
//! use tuya_ir_lib::types::Temperature;
//!
//! # async fn example() -> tuya_ir_lib::Result<()> {
//! let ac = AcRemote::http(
//!     HttpConfig::region(Region::Europe).with_header("access_token", "..."),
//!     "ir-bridge-id",
//!     "ac-device-id",
//! )?;
//!
//! ac.init().await;
//! ac.set_temperature(Temperature::new(22.0)?).await?;
//! # Ok(())
//! # }
//! ```

mod ac_remote;
mod fan_remote;

pub use ac_remote::AcRemote;
pub use fan_remote::FanRemote;
