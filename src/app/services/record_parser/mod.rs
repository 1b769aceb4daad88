//! Record parser for station telemetry lines
//!
//! Converts one complete whitespace-delimited line into a [`Reading`] or a
//! classified [`ParseError`]. The error kind matters to the caller: only
//! [`ParseError::InsufficientColumns`] suggests the line is a fragment worth
//! reassembling, every other kind means the line is bad.
//!
//! ## Architecture
//!
//! - [`parser`] - Tokenising and record layout
//! - [`field_parsers`] - Timestamp, coordinate and measurement parsing
//! - [`error`] - Failure classification
//!
//! ## Usage
//!
//! ```rust
//! use station_logger::app::services::record_parser::parse_record;
//!
//! let line = "09/22/2025 14:51:02 -3.794832 -38.557644 24.12 45.00 101196.00 0 0.00 0.00 0.00";
//! let reading = parse_record(line).unwrap();
//! assert_eq!(reading.partition_key().as_str(), "20250922");
//! ```
//!
//! [`Reading`]: crate::app::models::Reading

pub mod error;
pub mod field_parsers;
pub mod parser;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use parser::parse_record;
