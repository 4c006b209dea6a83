//! Distance units and their conversion factors.
//!
//! Every unit is defined by a fixed factor relative to the sphere radius, so
//! a central angle in radians converts to any unit with one multiplication.
//! `Radians` and `Degrees` are angular rather than linear but live in the
//! same table for uniform lookup.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::models::types::TrackerError;

/// Mean Earth radius in meters, shared by the haversine formula and the
/// linear unit factors.
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    Meters,
    #[default]
    Kilometers,
    Miles,
    NauticalMiles,
    Feet,
    Yards,
    Inches,
    Centimeters,
    Millimeters,
    Radians,
    Degrees,
}

impl Unit {
    pub const ALL: [Unit; 11] = [
        Unit::Meters,
        Unit::Kilometers,
        Unit::Miles,
        Unit::NauticalMiles,
        Unit::Feet,
        Unit::Yards,
        Unit::Inches,
        Unit::Centimeters,
        Unit::Millimeters,
        Unit::Radians,
        Unit::Degrees,
    ];

    /// Multiplier from a central angle in radians to this unit.
    pub fn factor(self) -> f64 {
        match self {
            Unit::Meters => EARTH_RADIUS_METERS,
            Unit::Kilometers => EARTH_RADIUS_METERS / 1000.0,
            Unit::Miles => EARTH_RADIUS_METERS / 1609.344,
            Unit::NauticalMiles => EARTH_RADIUS_METERS / 1852.0,
            Unit::Feet => EARTH_RADIUS_METERS * 3.28084,
            Unit::Yards => EARTH_RADIUS_METERS * 1.0936,
            Unit::Inches => EARTH_RADIUS_METERS * 39.37,
            Unit::Centimeters => EARTH_RADIUS_METERS * 100.0,
            Unit::Millimeters => EARTH_RADIUS_METERS * 1000.0,
            Unit::Radians => 1.0,
            Unit::Degrees => 360.0 / (2.0 * std::f64::consts::PI),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Meters => "meters",
            Unit::Kilometers => "kilometers",
            Unit::Miles => "miles",
            Unit::NauticalMiles => "nauticalmiles",
            Unit::Feet => "feet",
            Unit::Yards => "yards",
            Unit::Inches => "inches",
            Unit::Centimeters => "centimeters",
            Unit::Millimeters => "millimeters",
            Unit::Radians => "radians",
            Unit::Degrees => "degrees",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = TrackerError;

    /// Accepts both -er and -re spellings, matching the provider-facing unit
    /// table this replaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meters" | "metres" => Ok(Unit::Meters),
            "kilometers" | "kilometres" => Ok(Unit::Kilometers),
            "miles" => Ok(Unit::Miles),
            "nauticalmiles" => Ok(Unit::NauticalMiles),
            "feet" => Ok(Unit::Feet),
            "yards" => Ok(Unit::Yards),
            "inches" => Ok(Unit::Inches),
            "centimeters" | "centimetres" => Ok(Unit::Centimeters),
            "millimeters" | "millimetres" => Ok(Unit::Millimeters),
            "radians" => Ok(Unit::Radians),
            "degrees" => Ok(Unit::Degrees),
            other => Err(TrackerError::InvalidUnit(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_spellings() {
        assert_eq!("meters".parse::<Unit>().unwrap(), Unit::Meters);
        assert_eq!("metres".parse::<Unit>().unwrap(), Unit::Meters);
        assert_eq!("Kilometres".parse::<Unit>().unwrap(), Unit::Kilometers);
        assert_eq!("nauticalmiles".parse::<Unit>().unwrap(), Unit::NauticalMiles);
    }

    #[test]
    fn test_parse_invalid_unit() {
        let err = "furlongs".parse::<Unit>().unwrap_err();
        assert!(matches!(err, TrackerError::InvalidUnit(u) if u == "furlongs"));
    }

    #[test]
    fn test_default_is_kilometers() {
        assert_eq!(Unit::default(), Unit::Kilometers);
    }

    #[test]
    fn test_labels_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(unit.label().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_deserialize_from_string() {
        let unit: Unit = serde_json::from_str("\"miles\"").unwrap();
        assert_eq!(unit, Unit::Miles);
        assert!(serde_json::from_str::<Unit>("\"parsecs\"").is_err());
    }
}
