//! Destination for parsed readings

use crate::Result;
use crate::app::models::Reading;

/// Anything that can persist readings one at a time
pub trait RecordSink {
    /// Persist one reading
    fn write(&mut self, reading: &Reading) -> Result<()>;

    /// Flush and release any open resource; safe to call more than once
    fn close(&mut self) -> Result<()>;
}
