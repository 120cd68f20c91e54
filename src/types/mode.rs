// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC operating mode for infrared air conditioners.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Operating mode of an air conditioner.
///
/// The vendor accepts named tokens; some firmware revisions report the numeric
/// aliases `"0"` through `"4"` instead, so parsing accepts both families.
///
/// # Examples
///
/// ```
/// use tuya_ir_lib::types::HvacMode;
///
/// assert_eq!(HvacMode::Cold.as_str(), "cold");
/// assert_eq!("0".parse::<HvacMode>().unwrap(), HvacMode::Cold);
/// assert_eq!("hot".parse::<HvacMode>().unwrap(), HvacMode::Hot);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HvacMode {
    /// Cooling.
    Cold,
    /// Heating.
    Hot,
    /// Automatic mode selection.
    Auto,
    /// Fan only, no temperature control.
    Wind,
    /// Dehumidification.
    Dry,
}

impl HvacMode {
    /// Returns the named wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Hot => "hot",
            Self::Auto => "auto",
            Self::Wind => "wind",
            Self::Dry => "dry",
        }
    }

    /// Returns the numeric alias used by some firmware revisions.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Cold => 0,
            Self::Hot => 1,
            Self::Auto => 2,
            Self::Wind => 3,
            Self::Dry => 4,
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HvacMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cold" | "cool" | "0" => Ok(Self::Cold),
            "hot" | "heat" | "1" => Ok(Self::Hot),
            "auto" | "2" => Ok(Self::Auto),
            "wind" | "fan_only" | "3" => Ok(Self::Wind),
            "dry" | "dehumidification" | "4" => Ok(Self::Dry),
            _ => Err(ValueError::InvalidHvacMode(s.to_string())),
        }
    }
}
