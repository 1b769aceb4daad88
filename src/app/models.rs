//! Data models for station readings
//!
//! This module contains the typed representation of one station record and
//! the derived views the partition writer needs (ISO timestamp, partition key
//! and formatted CSV row).

use crate::constants::{COORDINATE_SENTINEL, ISO_TIMESTAMP_FORMAT, PARTITION_KEY_FORMAT};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Coordinate
// =============================================================================

/// A GPS coordinate that the station may report as unavailable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Coordinate {
    /// Decimal degrees
    Numeric(f64),
    /// The station sent the sentinel marker or an unparseable token
    Unavailable,
}

impl Coordinate {
    /// Parse a coordinate token; anything that is not a float is unavailable
    pub fn from_token(token: &str) -> Self {
        if token == COORDINATE_SENTINEL {
            return Self::Unavailable;
        }
        token
            .parse::<f64>()
            .map(Self::Numeric)
            .unwrap_or(Self::Unavailable)
    }

    /// Numeric value, if available
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            Self::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "{:.6}", v),
            Self::Unavailable => f.write_str(COORDINATE_SENTINEL),
        }
    }
}

// =============================================================================
// Partition Key
// =============================================================================

/// Calendar day (`YYYYMMDD`) identifying an output partition
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartitionKey(String);

impl PartitionKey {
    pub fn from_timestamp(timestamp: &NaiveDateTime) -> Self {
        Self(timestamp.format(PARTITION_KEY_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Reading
// =============================================================================

/// One parsed station record
///
/// The timestamp comes from the station clock, not the host clock, and
/// decides which daily partition the reading lands in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Station timestamp with second precision
    pub timestamp: NaiveDateTime,

    /// Latitude in decimal degrees, or unavailable
    pub latitude: Coordinate,

    /// Longitude in decimal degrees, or unavailable
    pub longitude: Coordinate,

    /// Air temperature in degrees Celsius
    pub temperature: f64,

    /// Relative humidity in percent
    pub relative_humidity: f64,

    /// Barometric pressure in pascals
    pub pressure: f64,

    /// Solar radiation
    pub radiation: f64,

    /// Wind speed
    pub wind_speed: f64,

    /// Wind direction in degrees
    pub wind_direction: f64,
}

impl Reading {
    /// Timestamp as `YYYY-MM-DDTHH:MM:SS`
    pub fn iso_timestamp(&self) -> String {
        self.timestamp.format(ISO_TIMESTAMP_FORMAT).to_string()
    }

    /// Partition this reading belongs to
    pub fn partition_key(&self) -> PartitionKey {
        PartitionKey::from_timestamp(&self.timestamp)
    }

    /// Formatted CSV row, in header order
    pub fn to_row(&self) -> [String; 9] {
        [
            self.iso_timestamp(),
            self.latitude.to_string(),
            self.longitude.to_string(),
            format!("{:.2}", self.temperature),
            format!("{:.2}", self.relative_humidity),
            format!("{:.2}", self.pressure),
            format!("{:.2}", self.radiation),
            format!("{:.2}", self.wind_speed),
            format!("{:.2}", self.wind_direction),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_reading() -> Reading {
        Reading {
            timestamp: NaiveDate::from_ymd_opt(2025, 9, 22)
                .unwrap()
                .and_hms_opt(14, 51, 2)
                .unwrap(),
            latitude: Coordinate::Numeric(-3.794832),
            longitude: Coordinate::Unavailable,
            temperature: 24.12,
            relative_humidity: 45.0,
            pressure: 101196.0,
            radiation: 0.0,
            wind_speed: 1.5,
            wind_direction: 270.0,
        }
    }

    #[test]
    fn test_coordinate_from_token() {
        assert_eq!(
            Coordinate::from_token("-38.557644"),
            Coordinate::Numeric(-38.557644)
        );
        assert_eq!(Coordinate::from_token("**********"), Coordinate::Unavailable);
        assert_eq!(Coordinate::from_token("N/A"), Coordinate::Unavailable);
        assert_eq!(Coordinate::from_token(""), Coordinate::Unavailable);
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::Numeric(-3.794832).to_string(), "-3.794832");
        assert_eq!(Coordinate::Numeric(1.5).to_string(), "1.500000");
        assert_eq!(Coordinate::Unavailable.to_string(), "**********");
        assert_eq!(Coordinate::Unavailable.value(), None);
        assert!(!Coordinate::Unavailable.is_available());
    }

    #[test]
    fn test_reading_derived_views() {
        let reading = sample_reading();
        assert_eq!(reading.iso_timestamp(), "2025-09-22T14:51:02");
        assert_eq!(reading.partition_key().as_str(), "20250922");
    }

    #[test]
    fn test_reading_to_row() {
        let row = sample_reading().to_row();
        assert_eq!(
            row,
            [
                "2025-09-22T14:51:02",
                "-3.794832",
                "**********",
                "24.12",
                "45.00",
                "101196.00",
                "0.00",
                "1.50",
                "270.00",
            ]
        );
    }
}
