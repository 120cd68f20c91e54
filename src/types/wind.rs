// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wind (internal fan) level for infrared air conditioners.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Fan level of an air conditioner's internal blower.
///
/// Encoded on the wire as the numeric tokens `"0"` (auto) through `"3"` (high).
/// Distinct from [`FanSpeed`](crate::types::FanSpeed), which names the keys of
/// a standalone fan remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Wind {
    /// Automatic fan level.
    Auto,
    /// Low fan level.
    Low,
    /// Medium fan level.
    Medium,
    /// High fan level.
    High,
}

impl Wind {
    /// Returns the wire token used by the vendor protocol.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "0",
            Self::Low => "1",
            Self::Medium => "2",
            Self::High => "3",
        }
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Wind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "0" | "auto" => Ok(Self::Auto),
            "1" | "low" => Ok(Self::Low),
            "2" | "medium" | "mid" => Ok(Self::Medium),
            "3" | "high" => Ok(Self::High),
            _ => Err(ValueError::InvalidWind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_as_str() {
        assert_eq!(Wind::Auto.as_str(), "0");
        assert_eq!(Wind::Low.as_str(), "1");
        assert_eq!(Wind::Medium.as_str(), "2");
        assert_eq!(Wind::High.as_str(), "3");
    }

    #[test]
    fn wind_from_str() {
        assert_eq!("0".parse::<Wind>().unwrap(), Wind::Auto);
        assert_eq!("low".parse::<Wind>().unwrap(), Wind::Low);
        assert_eq!("Mid".parse::<Wind>().unwrap(), Wind::Medium);
        assert_eq!("3".parse::<Wind>().unwrap(), Wind::High);
    }

    #[test]
    fn wind_from_str_invalid() {
        assert!(matches!(
            "turbo".parse::<Wind>(),
            Err(ValueError::InvalidWind(_))
        ));
    }

    #[test]
    fn wind_ordering() {
        assert!(Wind::Low < Wind::High);
    }
}
