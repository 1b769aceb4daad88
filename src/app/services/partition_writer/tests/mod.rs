//! Test utilities for partition writer testing

use chrono::NaiveDate;

use crate::app::models::{Coordinate, Reading};


/// Reading on the given day with a recognisable temperature
pub fn reading_on(year: i32, month: u32, day: u32, temperature: f64) -> Reading {
    Reading {
        timestamp: NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(14, 51, 2)
            .unwrap(),
        latitude: Coordinate::Numeric(-3.794832),
        longitude: Coordinate::Numeric(-38.557644),
        temperature,
        relative_humidity: 45.0,
        pressure: 101196.0,
        radiation: 0.0,
        wind_speed: 0.0,
        wind_direction: 0.0,
    }
}

/// Count header rows in a partition file
pub fn header_count(content: &str) -> usize {
    content
        .lines()
        .filter(|line| line.starts_with("datetime_iso,"))
        .count()
}
