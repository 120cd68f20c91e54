// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached air conditioner state.

use crate::response::AcStatus;
use crate::types::{HvacMode, PowerState, Wind};

/// Cached snapshot of an air conditioner's state.
///
/// All fields are unset until the first successful status fetch. Applying a
/// status merges field by field: keys absent from the payload keep their prior
/// value, so a partial result never erases what an earlier fetch reported.
///
/// # Examples
///
/// ```
/// use tuya_ir_lib::response::AcStatus;
/// use tuya_ir_lib::state::AcState;
///
/// let mut state = AcState::new();
/// let status: AcStatus = serde_json::from_str(r#"{"temp": "22"}"#).unwrap();
/// state.apply_status(&status);
///
/// assert_eq!(state.temperature(), Some(22.0));
/// assert!(state.mode().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcState {
    temperature: Option<f32>,
    mode: Option<HvacMode>,
    power: Option<PowerState>,
    wind: Option<Wind>,
}

impl AcState {
    /// Creates a new empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current target temperature in degrees Celsius, if known.
    #[must_use]
    pub fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    /// Current operating mode, if known.
    #[must_use]
    pub fn mode(&self) -> Option<HvacMode> {
        self.mode
    }

    /// Current power state, if known.
    #[must_use]
    pub fn power(&self) -> Option<PowerState> {
        self.power
    }

    /// Current internal fan level, if known.
    #[must_use]
    pub fn wind(&self) -> Option<Wind> {
        self.wind
    }

    /// Merges a status payload into the snapshot.
    ///
    /// Only fields present in the payload are updated. A token the vendor
    /// sends that does not parse is logged and leaves the field unchanged.
    ///
    /// # Returns
    ///
    /// Returns `true` if any field actually changed.
    pub fn apply_status(&mut self, status: &AcStatus) -> bool {
        let mut changed = false;

        if let Some(temp) = status.temp
            && self.temperature != Some(temp)
        {
            self.temperature = Some(temp);
            changed = true;
        }

        if let Some(token) = status.mode.as_deref() {
            match token.parse::<HvacMode>() {
                Ok(mode) if self.mode != Some(mode) => {
                    self.mode = Some(mode);
                    changed = true;
                }
                Ok(_) => {}
                Err(_) => tracing::warn!(token, "Ignoring unrecognized mode token"),
            }
        }

        if let Some(token) = status.power.as_deref() {
            match token.parse::<PowerState>() {
                Ok(power) if self.power != Some(power) => {
                    self.power = Some(power);
                    changed = true;
                }
                Ok(_) => {}
                Err(_) => tracing::warn!(token, "Ignoring unrecognized power token"),
            }
        }

        if let Some(token) = status.wind.as_deref() {
            match token.parse::<Wind>() {
                Ok(wind) if self.wind != Some(wind) => {
                    self.wind = Some(wind);
                    changed = true;
                }
                Ok(_) => {}
                Err(_) => tracing::warn!(token, "Ignoring unrecognized wind token"),
            }
        }

        changed
    }

    /// Clears all fields, resetting to unknown.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(json: &str) -> AcStatus {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn new_state_is_empty() {
        let state = AcState::new();
        assert!(state.temperature().is_none());
        assert!(state.mode().is_none());
        assert!(state.power().is_none());
        assert!(state.wind().is_none());
    }

    #[test]
    fn full_status_populates_all_fields() {
        let mut state = AcState::new();
        let changed = state.apply_status(&status(
            r#"{"temp": "22", "mode": "cold", "power": "1", "wind": "2"}"#,
        ));

        assert!(changed);
        assert_eq!(state.temperature(), Some(22.0));
        assert_eq!(state.mode(), Some(HvacMode::Cold));
        assert_eq!(state.power(), Some(PowerState::On));
        assert_eq!(state.wind(), Some(Wind::Medium));
    }

    #[test]
    fn partial_status_keeps_prior_fields() {
        let mut state = AcState::new();
        state.apply_status(&status(
            r#"{"temp": "20", "mode": "hot", "power": "1", "wind": "1"}"#,
        ));

        state.apply_status(&status(r#"{"temp": "22", "mode": "cold"}"#));

        assert_eq!(state.temperature(), Some(22.0));
        assert_eq!(state.mode(), Some(HvacMode::Cold));
        // Absent keys left alone, not reset.
        assert_eq!(state.power(), Some(PowerState::On));
        assert_eq!(state.wind(), Some(Wind::Low));
    }

    #[test]
    fn identical_status_reports_unchanged() {
        let mut state = AcState::new();
        let s = status(r#"{"temp": "22", "power": "1"}"#);

        assert!(state.apply_status(&s));
        assert!(!state.apply_status(&s));
    }

    #[test]
    fn unparseable_token_keeps_prior_value() {
        let mut state = AcState::new();
        state.apply_status(&status(r#"{"mode": "cold"}"#));

        let changed = state.apply_status(&status(r#"{"mode": "glacial"}"#));

        assert!(!changed);
        assert_eq!(state.mode(), Some(HvacMode::Cold));
    }

    #[test]
    fn numeric_tokens_parse() {
        let mut state = AcState::new();
        state.apply_status(&status(r#"{"mode": 0, "power": 1, "wind": 3}"#));

        assert_eq!(state.mode(), Some(HvacMode::Cold));
        assert_eq!(state.power(), Some(PowerState::On));
        assert_eq!(state.wind(), Some(Wind::High));
    }

    #[test]
    fn clear_resets_state() {
        let mut state = AcState::new();
        state.apply_status(&status(r#"{"temp": "22"}"#));

        state.clear();

        assert_eq!(state, AcState::new());
    }
}
