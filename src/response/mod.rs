// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed payloads parsed out of the cloud response envelope.

mod ac_status;
mod keys;

pub use ac_status::AcStatus;
pub use keys::{KeyList, RemoteKey};
