// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session-owned state: cached device snapshots and the key catalog.

mod ac_state;
mod fan_state;
mod key_catalog;

pub use ac_state::AcState;
pub use fan_state::FanState;
pub use key_catalog::KeyCatalog;
