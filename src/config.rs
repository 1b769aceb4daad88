//! Configuration management and validation.
//!
//! Provides the device, output and logging settings for a logger run.
//! Every field has a default; the CLI overrides them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::constants::{
    DEFAULT_BAUD_RATE, DEFAULT_DEVICE_PATH, DEFAULT_OUTPUT_DIR, DEFAULT_POLL_INTERVAL,
};
use crate::{Error, Result};

/// Serial device settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Device path, e.g. `/dev/ttyACM0` or `COM3`
    pub path: String,

    /// Line speed in baud
    pub baud_rate: u32,

    /// Read timeout; `None` blocks until a line arrives
    pub read_timeout: Option<Duration>,
}

impl DeviceConfig {
    /// Timeout actually applied to the port.
    ///
    /// A blocking configuration still polls so that an interrupt is noticed;
    /// timed-out reads are treated as "no data yet" by the line reader.
    pub fn effective_timeout(&self) -> Duration {
        self.read_timeout.unwrap_or(DEFAULT_POLL_INTERVAL)
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DEVICE_PATH.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout: None,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving one CSV file per station day
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Complete configuration for one logger run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub device: DeviceConfig,
    pub output: OutputConfig,

    /// Log every raw serial line at info level
    pub echo_raw_lines: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            device: DeviceConfig::default(),
            output: OutputConfig::default(),
            echo_raw_lines: true,
        }
    }
}

impl LoggerConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.device.path.trim().is_empty() {
            return Err(Error::configuration("Device path must not be empty"));
        }

        if self.device.baud_rate == 0 {
            return Err(Error::configuration("Baud rate must be greater than 0"));
        }

        if matches!(self.device.read_timeout, Some(timeout) if timeout.is_zero()) {
            return Err(Error::configuration(
                "Read timeout must be greater than 0 seconds",
            ));
        }

        if self.output.directory.as_os_str().is_empty() {
            return Err(Error::configuration("Output directory must not be empty"));
        }

        if self.output.directory.exists() && !self.output.directory.is_dir() {
            return Err(Error::configuration(format!(
                "Output path is not a directory: {}",
                self.output.directory.display()
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
