use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Units of length a scale bar can be labelled in
///
/// Each unit converts to and from meters (the standard unit) by a fixed factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Metre,
    Kilometre,
    NauticalMile,
    MileUs,
    Foot,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 5] = [
        DistanceUnit::Metre,
        DistanceUnit::Kilometre,
        DistanceUnit::NauticalMile,
        DistanceUnit::MileUs,
        DistanceUnit::Foot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DistanceUnit::Metre => "Metre",
            DistanceUnit::Kilometre => "Kilometre",
            DistanceUnit::NauticalMile => "NauticalMile",
            DistanceUnit::MileUs => "MileUS",
            DistanceUnit::Foot => "Feet",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::Metre => "m",
            DistanceUnit::Kilometre => "km",
            DistanceUnit::NauticalMile => "NM",
            DistanceUnit::MileUs => "mi",
            DistanceUnit::Foot => "ft",
        }
    }

    /// Meters per one of this unit
    pub fn factor(&self) -> f64 {
        match self {
            DistanceUnit::Metre => 1.0,
            DistanceUnit::Kilometre => 1000.0,
            DistanceUnit::NauticalMile => 1852.0,
            DistanceUnit::MileUs => 1609.3472186944375,
            DistanceUnit::Foot => 0.30480060960121924,
        }
    }

    /// Converts a value in this unit to meters
    pub fn to_standard(&self, value: f64) -> f64 {
        value * self.factor()
    }

    /// Converts a value in meters to this unit
    pub fn from_standard(&self, meters: f64) -> f64 {
        meters / self.factor()
    }
}

impl Default for DistanceUnit {
    fn default() -> Self {
        DistanceUnit::Metre
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    /// Accepts either the symbol or the name, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        DistanceUnit::ALL
            .iter()
            .copied()
            .find(|unit| {
                unit.symbol().eq_ignore_ascii_case(wanted) || unit.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| Error::UnknownUnit(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_round_trip() {
        for unit in DistanceUnit::ALL {
            for x in [-3.5, 0.0, 1e-9, 1.0, 42.125, 7.3e12] {
                let back = unit.from_standard(unit.to_standard(x));
                assert!(
                    (back - x).abs() <= x.abs() * 1e-12,
                    "{} round trip of {} gave {}",
                    unit.name(),
                    x,
                    back
                );
            }
        }
    }

    #[test]
    fn test_factors_are_positive() {
        assert!(DistanceUnit::ALL.iter().all(|unit| unit.factor() > 0.0));
    }

    #[test]
    fn test_known_conversions() {
        assert_eq!(DistanceUnit::Kilometre.to_standard(1.5), 1500.0);
        assert_eq!(DistanceUnit::NauticalMile.from_standard(3704.0), 2.0);
        assert!((DistanceUnit::Foot.from_standard(DistanceUnit::MileUs.factor()) - 5280.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_by_symbol_and_name() {
        assert_eq!("km".parse::<DistanceUnit>().unwrap(), DistanceUnit::Kilometre);
        assert_eq!("NM".parse::<DistanceUnit>().unwrap(), DistanceUnit::NauticalMile);
        assert_eq!("feet".parse::<DistanceUnit>().unwrap(), DistanceUnit::Foot);
        assert_eq!(" MileUS ".parse::<DistanceUnit>().unwrap(), DistanceUnit::MileUs);
        assert!(matches!(
            "furlong".parse::<DistanceUnit>(),
            Err(Error::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_display_is_symbol() {
        assert_eq!(DistanceUnit::MileUs.to_string(), "mi");
    }
}
