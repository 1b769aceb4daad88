//! Stream loop statistics

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters accumulated over one run of the stream loop
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoopStats {
    /// Non-blank lines received from the source
    pub lines_received: usize,

    /// Readings handed to the sink
    pub records_written: usize,

    /// Lines rejected with an invalid date/time or field
    pub lines_dropped: usize,

    /// Held fragments given up, including one held at shutdown
    pub fragments_discarded: usize,

    /// Wall time spent in the loop
    pub runtime: Duration,
}

impl LoopStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of completed-or-rejected outcomes that produced a record, as a percentage
    pub fn success_rate(&self) -> f64 {
        let outcomes = self.records_written + self.lines_dropped + self.fragments_discarded;
        if outcomes == 0 {
            0.0
        } else {
            (self.records_written as f64 / outcomes as f64) * 100.0
        }
    }

    /// True if anything was lost along the way
    pub fn has_losses(&self) -> bool {
        self.lines_dropped > 0 || self.fragments_discarded > 0
    }
}
