//! Station Logger Library
//!
//! A Rust library for capturing weather-station telemetry from a serial
//! device into daily CSV files.
//!
//! This library provides tools for:
//! - Parsing whitespace-delimited station records into typed readings
//! - Reassembling records that the serial transport split across lines
//! - Driving the read/reassemble/parse/write cycle over any line source
//! - Writing date-partitioned CSV files named by the station's own clock
//! - Comprehensive error handling and per-line failure containment

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod partition_writer;
        pub mod reassembly;
        pub mod record_parser;
        pub mod stream_loop;
    }
    pub mod adapters {
        pub mod serial_device;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Coordinate, PartitionKey, Reading};
pub use app::services::record_parser::ParseError;
pub use config::LoggerConfig;

/// Result type alias for the station logger
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for station logger operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Serial device could not be opened or configured
    #[error("Serial device error on '{device}': {source}")]
    SerialPort {
        device: String,
        #[source]
        source: serialport::Error,
    },

    /// CSV writing error
    #[error("CSV writing error in file '{file}': {source}")]
    CsvWriting {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serial device error
    pub fn serial_port(device: impl Into<String>, source: serialport::Error) -> Self {
        Self::SerialPort {
            device: device.into(),
            source,
        }
    }

    /// Create a CSV writing error
    pub fn csv_writing(file: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvWriting {
            file: file.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
