//! Command-line argument definitions for the station logger
//!
//! This module defines the CLI interface using the clap derive API and
//! converts it into a [`LoggerConfig`].

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{DeviceConfig, LoggerConfig, OutputConfig};
use crate::constants::{DEFAULT_BAUD_RATE, DEFAULT_DEVICE_PATH, DEFAULT_OUTPUT_DIR};
use crate::{Error, Result};

/// CLI arguments for the serial weather-station logger
///
/// Reads station records from a serial device and appends them to one CSV
/// file per day, named by the station's own clock.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "station-logger",
    version,
    about = "Log weather-station serial output into daily CSV files",
    long_about = "Reads whitespace-delimited records from a weather station's serial port, \
                  reassembles records split across lines by the transport, and appends each \
                  reading to <outdir>/<YYYYMMDD>.csv, rotating files when the station's date \
                  changes. Stop with Ctrl+C."
)]
pub struct Args {
    /// Serial device to read from
    #[arg(
        short = 'p',
        long = "port",
        value_name = "DEVICE",
        default_value = DEFAULT_DEVICE_PATH,
        help = "Serial device path"
    )]
    pub port: String,

    /// Line speed of the serial device
    #[arg(
        short = 'b',
        long = "baud",
        value_name = "RATE",
        default_value_t = DEFAULT_BAUD_RATE,
        help = "Serial baud rate"
    )]
    pub baud: u32,

    /// Output directory for daily CSV files
    ///
    /// Will be created if it doesn't exist. Existing files for the same day
    /// are appended to without repeating the header.
    #[arg(
        short = 'o',
        long = "outdir",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Output directory for daily CSV files"
    )]
    pub outdir: PathBuf,

    /// Read timeout in seconds
    ///
    /// If not specified, reads block until a full line arrives.
    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        help = "Read timeout in seconds (default: blocking)"
    )]
    pub timeout: Option<f64>,

    /// Do not echo raw serial lines at info level
    #[arg(long = "no-echo", help = "Log raw serial lines at debug level only")]
    pub no_echo: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate arguments that clap cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if !timeout.is_finite() || timeout <= 0.0 {
                return Err(Error::configuration(format!(
                    "Timeout must be a positive number of seconds, got {}",
                    timeout
                )));
            }
        }

        if self.baud == 0 {
            return Err(Error::configuration("Baud rate must be greater than 0"));
        }

        Ok(())
    }

    /// Get log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the run configuration from these arguments
    pub fn to_config(&self) -> Result<LoggerConfig> {
        self.validate()?;

        let read_timeout = self
            .timeout
            .map(|t| {
                Duration::try_from_secs_f64(t)
                    .map_err(|e| Error::configuration(format!("Invalid timeout {}: {}", t, e)))
            })
            .transpose()?;

        let config = LoggerConfig {
            device: DeviceConfig {
                path: self.port.clone(),
                baud_rate: self.baud,
                read_timeout,
            },
            output: OutputConfig {
                directory: self.outdir.clone(),
            },
            echo_raw_lines: !self.no_echo,
        };

        config.validate()?;
        Ok(config)
    }
}
