// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared across the library.
//!
//! The vendor protocol is stringly-typed on the wire (`"1"`/`"0"` for power,
//! free-form mode tokens). These types keep the wire representation at the
//! boundary and expose proper enums and validated newtypes at the public API
//! edge.

mod fan_speed;
mod mode;
mod power;
mod temperature;
mod wind;

pub use fan_speed::FanSpeed;
pub use mode::HvacMode;
pub use power::PowerState;
pub use temperature::Temperature;
pub use wind::Wind;
