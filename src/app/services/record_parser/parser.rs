//! Record layout and parsing orchestration
//!
//! A record is `DATE TIME LAT LON TEMP HUM PRESS RAD WIND_SPEED WIND_DIR ...`,
//! separated by runs of whitespace.

use tracing::info;

use super::error::ParseError;
use super::field_parsers::{parse_coordinate, parse_required_f64, parse_timestamp};
use crate::app::models::Reading;
use crate::constants::{
    CONSUMED_TRAILING_TOKENS, MIN_RECORD_TOKENS, MIN_TRAILING_TOKENS, field_names,
};

/// Parse a single trimmed station line
pub fn parse_record(line: &str) -> Result<Reading, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::EmptyLine);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_RECORD_TOKENS {
        return Err(ParseError::InsufficientColumns {
            found: tokens.len(),
            line: line.to_string(),
        });
    }

    let (date, time, tail) = (tokens[0], tokens[1], &tokens[2..]);
    if tail.len() < MIN_TRAILING_TOKENS {
        return Err(ParseError::InsufficientColumns {
            found: tokens.len(),
            line: line.to_string(),
        });
    }

    let timestamp = parse_timestamp(date, time)?;

    let latitude = parse_coordinate(tail[0]);
    let longitude = parse_coordinate(tail[1]);

    let temperature = parse_required_f64(tail[2], field_names::TEMPERATURE)?;
    let relative_humidity = parse_required_f64(tail[3], field_names::RELATIVE_HUMIDITY)?;
    let pressure = parse_required_f64(tail[4], field_names::PRESSURE)?;
    let radiation = parse_required_f64(tail[5], field_names::RADIATION)?;
    let wind_speed = parse_required_f64(tail[6], field_names::WIND_SPEED)?;
    let wind_direction = parse_required_f64(tail[7], field_names::WIND_DIRECTION)?;

    if tail.len() > CONSUMED_TRAILING_TOKENS {
        info!(
            "Ignoring extra tokens: {}",
            tail[CONSUMED_TRAILING_TOKENS..].join(" ")
        );
    }

    Ok(Reading {
        timestamp,
        latitude,
        longitude,
        temperature,
        relative_humidity,
        pressure,
        radiation,
        wind_speed,
        wind_direction,
    })
}
