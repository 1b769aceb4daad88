//! Field parsing utilities for station records
//!
//! Helpers for the three kinds of field in a record: the date/time pair,
//! coordinates that degrade to unavailable, and required measurements.

use chrono::NaiveDateTime;

use super::error::ParseError;
use crate::app::models::Coordinate;
use crate::constants::{RECORD_DATE_FORMAT, RECORD_TIME_FORMAT};

/// Parse the date and time tokens into a station timestamp
pub fn parse_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, ParseError> {
    let combined = format!("{} {}", date, time);
    let format = format!("{} {}", RECORD_DATE_FORMAT, RECORD_TIME_FORMAT);

    NaiveDateTime::parse_from_str(&combined, &format).map_err(|e| ParseError::InvalidDateTime {
        date: date.to_string(),
        time: time.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a coordinate token; never fails
pub fn parse_coordinate(token: &str) -> Coordinate {
    Coordinate::from_token(token)
}

/// Parse a required measurement token
pub fn parse_required_f64(token: &str, field: &'static str) -> Result<f64, ParseError> {
    token.parse::<f64>().map_err(|_| ParseError::InvalidField {
        field,
        token: token.to_string(),
    })
}
