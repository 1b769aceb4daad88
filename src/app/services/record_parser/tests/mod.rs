//! Test utilities for record parser testing
//!
//! Shared sample lines used across the parser test modules.


/// A complete record as emitted by the station
pub const SAMPLE_LINE: &str =
    "09/22/2025 14:51:02 -3.794832 -38.557644 24.12 45.00 101196.00 0 0.00 0.00 0.00";

/// Build a record line with the given latitude, longitude and temperature tokens
pub fn line_with(lat: &str, lon: &str, temp: &str) -> String {
    format!(
        "09/22/2025 14:51:02 {} {} {} 45.00 101196.00 0 0.00 0.00 0.00",
        lat, lon, temp
    )
}
