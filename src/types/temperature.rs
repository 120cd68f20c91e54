// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target temperature type for infrared air conditioners.

use std::fmt;

use crate::error::ValueError;

/// Target temperature in degrees Celsius (16.0-30.0).
///
/// Infrared AC codes accept whole and half degrees in this range. The wire
/// format drops a trailing `.0` so `22.0` is sent as `"22"`, matching what the
/// emitter hardware expects.
///
/// # Examples
///
/// ```
/// use tuya_ir_lib::types::Temperature;
///
/// let temp = Temperature::new(22.0).unwrap();
/// assert_eq!(temp.to_string(), "22");
///
/// let half = Temperature::new(22.5).unwrap();
/// assert_eq!(half.to_string(), "22.5");
///
/// assert!(Temperature::new(35.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature(f32);

impl Temperature {
    /// Minimum supported target temperature.
    pub const MIN: f32 = 16.0;

    /// Maximum supported target temperature.
    pub const MAX: f32 = 30.0;

    /// Creates a new target temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTemperature` if the value is outside
    /// [16.0, 30.0] or not finite.
    pub fn new(celsius: f32) -> Result<Self, ValueError> {
        if !celsius.is_finite() || !(Self::MIN..=Self::MAX).contains(&celsius) {
            return Err(ValueError::InvalidTemperature(celsius));
        }
        Ok(Self(celsius))
    }

    /// Creates a temperature, clamping to the supported range.
    #[must_use]
    pub fn clamped(celsius: f32) -> Self {
        Self(celsius.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the temperature in degrees Celsius.
    #[must_use]
    pub const fn celsius(&self) -> f32 {
        self.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i32)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl TryFrom<f32> for Temperature {
    type Error = ValueError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
