// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named fan speed ladder for infrared fan remotes.
//!
//! Fan remotes expose their speeds as named keys (`"Low"`, `"Medium"`,
//! `"High"`). Automation frontends usually drive fans with a continuous
//! percentage instead, so this type also implements the deterministic
//! bucketing between the two scales.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// A named rung on the fan speed ladder.
///
/// The ladder is fixed, ascending, and gapless: `Low < Medium < High`.
/// Percentage conversion divides 0-100 into three equal-width bands.
///
/// # Examples
///
/// ```
/// use tuya_ir_lib::types::FanSpeed;
///
/// assert_eq!(FanSpeed::Medium.to_percentage(), 66);
/// assert_eq!(FanSpeed::from_percentage(66).unwrap(), FanSpeed::Medium);
///
/// // Anything below the first band boundary clamps to the lowest rung.
/// assert_eq!(FanSpeed::from_percentage(5).unwrap(), FanSpeed::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FanSpeed {
    /// Lowest speed.
    Low,
    /// Middle speed.
    Medium,
    /// Highest speed.
    High,
}

impl FanSpeed {
    /// The ladder in ascending order.
    pub const LADDER: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Number of rungs on the ladder.
    #[must_use]
    pub const fn count() -> u8 {
        Self::LADDER.len() as u8
    }

    /// Returns the key name used in a remote's command catalog.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// One-based position of this rung on the ladder.
    #[must_use]
    const fn rung(self) -> u16 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Converts this rung to a percentage.
    ///
    /// Each rung maps to the top of an equal-width band: `Low` is 33,
    /// `Medium` is 66, `High` is 100. The values round-trip exactly through
    /// [`FanSpeed::from_percentage`].
    #[must_use]
    pub const fn to_percentage(self) -> u8 {
        (self.rung() * 100 / Self::count() as u16) as u8
    }

    /// Converts a percentage to the rung whose band contains it.
    ///
    /// Percentages at or below the first band boundary (including 0) clamp to
    /// `Low`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` for percentages above 100.
    pub fn from_percentage(percentage: u8) -> Result<Self, ValueError> {
        if percentage > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(percentage),
            });
        }
        let rung = (u16::from(percentage) * u16::from(Self::count())).div_ceil(100);
        let index = rung.clamp(1, u16::from(Self::count())) - 1;
        Ok(Self::LADDER[usize::from(index)])
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FanSpeed {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ValueError::InvalidFanSpeed(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_ascending() {
        assert!(FanSpeed::Low < FanSpeed::Medium);
        assert!(FanSpeed::Medium < FanSpeed::High);
        assert_eq!(FanSpeed::count(), 3);
    }

    #[test]
    fn to_percentage_bands() {
        assert_eq!(FanSpeed::Low.to_percentage(), 33);
        assert_eq!(FanSpeed::Medium.to_percentage(), 66);
        assert_eq!(FanSpeed::High.to_percentage(), 100);
    }

    #[test]
    fn percentage_round_trip() {
        for speed in FanSpeed::LADDER {
            let pct = speed.to_percentage();
            assert_eq!(FanSpeed::from_percentage(pct).unwrap(), speed);
        }
    }

    #[test]
    fn below_first_boundary_clamps_to_low() {
        assert_eq!(FanSpeed::from_percentage(0).unwrap(), FanSpeed::Low);
        assert_eq!(FanSpeed::from_percentage(1).unwrap(), FanSpeed::Low);
        assert_eq!(FanSpeed::from_percentage(20).unwrap(), FanSpeed::Low);
    }

    #[test]
    fn band_edges() {
        assert_eq!(FanSpeed::from_percentage(33).unwrap(), FanSpeed::Low);
        assert_eq!(FanSpeed::from_percentage(34).unwrap(), FanSpeed::Medium);
        assert_eq!(FanSpeed::from_percentage(67).unwrap(), FanSpeed::High);
        assert_eq!(FanSpeed::from_percentage(100).unwrap(), FanSpeed::High);
    }

    #[test]
    fn from_percentage_rejects_over_100() {
        assert!(matches!(
            FanSpeed::from_percentage(101),
            Err(ValueError::OutOfRange { .. })
        ));
    }

    #[test]
    fn from_catalog_name() {
        assert_eq!("Low".parse::<FanSpeed>().unwrap(), FanSpeed::Low);
        assert_eq!("medium".parse::<FanSpeed>().unwrap(), FanSpeed::Medium);
        assert!("Turbo".parse::<FanSpeed>().is_err());
    }
}
