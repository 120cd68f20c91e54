// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air conditioner commands.

use crate::command::Command;
use crate::types::{HvacMode, PowerState, Temperature, Wind};

/// Command to change a single air conditioner field.
///
/// # Examples
///
/// ```
/// use tuya_ir_lib::command::{AcCommand, Command};
/// use tuya_ir_lib::types::{Temperature, Wind};
///
/// let cmd = AcCommand::Temperature(Temperature::new(22.0).unwrap());
/// assert_eq!(cmd.code(), "temp");
/// assert_eq!(cmd.value(), "22");
///
/// let cmd = AcCommand::Wind(Wind::High);
/// assert_eq!(cmd.code(), "wind");
/// assert_eq!(cmd.value(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AcCommand {
    /// Switch the unit on or off.
    Power(PowerState),
    /// Change the operating mode.
    Mode(HvacMode),
    /// Change the target temperature.
    Temperature(Temperature),
    /// Change the internal fan level.
    Wind(Wind),
}

impl AcCommand {
    /// Creates a command that turns the unit on.
    #[must_use]
    pub const fn on() -> Self {
        Self::Power(PowerState::On)
    }

    /// Creates a command that turns the unit off.
    #[must_use]
    pub const fn off() -> Self {
        Self::Power(PowerState::Off)
    }
}

impl Command for AcCommand {
    fn code(&self) -> &'static str {
        match self {
            Self::Power(_) => "power",
            Self::Mode(_) => "mode",
            Self::Temperature(_) => "temp",
            Self::Wind(_) => "wind",
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Power(state) => state.as_str().to_string(),
            Self::Mode(mode) => mode.as_str().to_string(),
            Self::Temperature(temp) => temp.to_string(),
            Self::Wind(wind) => wind.as_str().to_string(),
        }
    }
}

/// Batched "scene" command changing all four AC fields in one request.
///
/// Prefer this over four single commands when several fields change together;
/// the scenes endpoint applies them in one round trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcScene {
    /// Desired power state.
    pub power: PowerState,
    /// Desired operating mode.
    pub mode: HvacMode,
    /// Desired target temperature.
    pub temp: Temperature,
    /// Desired internal fan level.
    pub wind: Wind,
}

impl AcScene {
    /// Returns the JSON request body with all four fields stringified.
    #[must_use]
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "power": self.power.as_str(),
            "mode": self.mode.as_str(),
            "temp": self.temp.to_string(),
            "wind": self.wind.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_commands() {
        assert_eq!(AcCommand::on().value(), "1");
        assert_eq!(AcCommand::off().value(), "0");
        assert_eq!(AcCommand::on().code(), "power");
    }

    #[test]
    fn field_codes() {
        assert_eq!(AcCommand::Mode(HvacMode::Hot).code(), "mode");
        assert_eq!(
            AcCommand::Temperature(Temperature::new(18.0).unwrap()).code(),
            "temp"
        );
        assert_eq!(AcCommand::Wind(Wind::Auto).code(), "wind");
    }

    #[test]
    fn values_are_wire_tokens() {
        assert_eq!(AcCommand::Mode(HvacMode::Dry).value(), "dry");
        assert_eq!(
            AcCommand::Temperature(Temperature::new(22.5).unwrap()).value(),
            "22.5"
        );
        assert_eq!(AcCommand::Wind(Wind::Low).value(), "1");
    }
}
