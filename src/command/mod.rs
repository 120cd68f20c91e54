// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed command definitions for the Tuya IR endpoints.
//!
//! Every command ultimately becomes a small JSON body POSTed to the cloud:
//! single AC field changes are `{code, value}` pairs, the batched scene
//! command carries all four AC fields at once, and remote key presses carry
//! the raw key descriptor.
//!
//! # Examples
//!
//! ```
//! use tuya_ir_lib::command::{AcCommand, Command};
//! use tuya_ir_lib::types::PowerState;
//!
//! let cmd = AcCommand::Power(PowerState::On);
//! assert_eq!(cmd.code(), "power");
//! assert_eq!(cmd.value(), "1");
//! assert_eq!(cmd.to_body(), serde_json::json!({"code": "power", "value": "1"}));
//! ```

mod climate;
mod remote;

pub use climate::{AcCommand, AcScene};
pub use remote::RawKeyCommand;

/// A single-field command that can be sent to an infrared air conditioner.
///
/// Commands are serialized to the vendor's `{code, value}` body shape, with
/// both sides stringified the way the emitter hardware expects.
pub trait Command {
    /// Returns the vendor command code, e.g. `"power"`, `"temp"`.
    fn code(&self) -> &'static str;

    /// Returns the stringified command value, e.g. `"1"`, `"22"`.
    fn value(&self) -> String;

    /// Returns the JSON request body for this command.
    fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code(),
            "value": self.value(),
        })
    }
}
