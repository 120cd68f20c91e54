// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Locally inferred fan remote state.

use crate::types::{FanSpeed, PowerState};

/// Best-effort local view of a fan behind an infrared remote.
///
/// The vendor exposes no status endpoint for remotes, so this state is a local
/// echo: power is inferred (on after any speed set, off after a turn-off) and
/// speed is the last level successfully requested. The device itself never
/// confirms either.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanState {
    power: Option<PowerState>,
    speed: Option<FanSpeed>,
}

impl FanState {
    /// Creates a new unknown state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inferred power state, if any command has established one.
    #[must_use]
    pub fn power(&self) -> Option<PowerState> {
        self.power
    }

    /// Last requested speed, if any.
    #[must_use]
    pub fn speed(&self) -> Option<FanSpeed> {
        self.speed
    }

    /// Last requested speed as a percentage; 0 when no speed was ever set.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.speed.map_or(0, FanSpeed::to_percentage)
    }

    /// Records a speed request: remembers the rung and infers power on.
    pub fn note_speed(&mut self, speed: FanSpeed) {
        self.speed = Some(speed);
        self.power = Some(PowerState::On);
    }

    /// Records a turn-off request.
    pub fn note_off(&mut self) {
        self.power = Some(PowerState::Off);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_unknown() {
        let state = FanState::new();
        assert!(state.power().is_none());
        assert!(state.speed().is_none());
        assert_eq!(state.percentage(), 0);
    }

    #[test]
    fn speed_implies_power_on() {
        let mut state = FanState::new();
        state.note_speed(FanSpeed::Low);

        assert_eq!(state.power(), Some(PowerState::On));
        assert_eq!(state.speed(), Some(FanSpeed::Low));
        assert_eq!(state.percentage(), 33);
    }

    #[test]
    fn turn_off_keeps_last_speed() {
        let mut state = FanState::new();
        state.note_speed(FanSpeed::High);
        state.note_off();

        assert_eq!(state.power(), Some(PowerState::Off));
        assert_eq!(state.speed(), Some(FanSpeed::High));
    }
}
