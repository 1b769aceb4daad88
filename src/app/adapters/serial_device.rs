//! Serial device adapter
//!
//! Opens the station's serial port and exposes it as a line source.

use serialport::SerialPort;
use tracing::info;

use crate::app::services::stream_loop::LineReader;
use crate::config::DeviceConfig;
use crate::{Error, Result};

/// Line reader over an open serial port
pub type SerialLineReader = LineReader<Box<dyn SerialPort>>;

/// Open the configured device; failure here is fatal for the run
pub fn open_device(config: &DeviceConfig) -> Result<SerialLineReader> {
    let port = serialport::new(config.path.as_str(), config.baud_rate)
        .timeout(config.effective_timeout())
        .open()
        .map_err(|e| Error::serial_port(config.path.as_str(), e))?;

    info!(
        "Opened {} @ {} baud (read timeout {:?})",
        config.path,
        config.baud_rate,
        config.effective_timeout()
    );

    Ok(LineReader::new(port))
}
