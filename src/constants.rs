//! Application constants for the station logger
//!
//! This module contains the record layout, output format, and default
//! configuration values used throughout the logger.

use std::time::Duration;

// =============================================================================
// Record Layout
// =============================================================================

/// Marker emitted by the station when a GPS coordinate is unavailable
pub const COORDINATE_SENTINEL: &str = "**********";

/// Date format of the first token of a record (month/day/year)
pub const RECORD_DATE_FORMAT: &str = "%m/%d/%Y";

/// Time format of the second token of a record (24h clock)
pub const RECORD_TIME_FORMAT: &str = "%H:%M:%S";

/// Minimum number of whitespace-separated tokens in a complete record
pub const MIN_RECORD_TOKENS: usize = 11;

/// Minimum number of tokens following the date and time tokens.
///
/// Only eight trailing values are consumed (lat, lon, and six measurements),
/// yet nine are required. The station firmware is assumed to emit the extra
/// column; the threshold is kept as-is even though it is likely off by one.
pub const MIN_TRAILING_TOKENS: usize = 9;

/// Number of trailing tokens that map onto reading fields
pub const CONSUMED_TRAILING_TOKENS: usize = 8;

/// Names used when reporting an unparseable measurement, in column order
pub mod field_names {
    pub const TEMPERATURE: &str = "temperature";
    pub const RELATIVE_HUMIDITY: &str = "relative_humidity";
    pub const PRESSURE: &str = "pressure";
    pub const RADIATION: &str = "radiation";
    pub const WIND_SPEED: &str = "wind_speed";
    pub const WIND_DIRECTION: &str = "wind_direction";
}

// =============================================================================
// Output Partitions
// =============================================================================

/// Header row written once at the top of every partition file
pub const CSV_HEADER: [&str; 9] = [
    "datetime_iso",
    "lat",
    "lon",
    "temp_C",
    "umid_rel_%",
    "press",
    "radiacao",
    "vento_intensidade",
    "vento_direcao",
];

/// File extension of partition files
pub const PARTITION_FILE_EXTENSION: &str = "csv";

/// Partition key format (one file per calendar day of the station clock)
pub const PARTITION_KEY_FORMAT: &str = "%Y%m%d";

/// ISO-8601 timestamp format written in the first column
pub const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// =============================================================================
// Defaults
// =============================================================================

/// Default serial device path
pub const DEFAULT_DEVICE_PATH: &str = "/dev/ttyACM0";

/// Default serial baud rate
pub const DEFAULT_BAUD_RATE: u32 = 38_400;

/// Default output directory for partition files
pub const DEFAULT_OUTPUT_DIR: &str = "logs";

/// Longest raw line kept while waiting for a terminator; a station record is
/// under 100 bytes
pub const MAX_LINE_BYTES: usize = 4096;

/// Read timeout used when none is configured, so that an interrupt is
/// observed between reads
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);
