//! Stream loop driving reassembly, parsing and output

use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::source::{LineSource, ReadOutcome};
use super::stats::LoopStats;
use crate::Result;
use crate::app::models::Reading;
use crate::app::services::partition_writer::RecordSink;
use crate::app::services::reassembly::{Reassembler, ResyncPolicy};

/// Single-threaded loop over one line source and one sink
pub struct StreamLoop<S, K> {
    source: S,
    sink: K,
    reassembler: Reassembler,
    echo_raw_lines: bool,
    stats: LoopStats,
}

impl<S: LineSource, K: RecordSink> StreamLoop<S, K> {
    /// Create a loop using the default date-prefix resync policy
    pub fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            reassembler: Reassembler::new(),
            echo_raw_lines: false,
            stats: LoopStats::new(),
        }
    }

    pub fn with_policy(mut self, policy: Box<dyn ResyncPolicy>) -> Self {
        self.reassembler = Reassembler::with_policy(policy);
        self
    }

    /// Log every raw line at info level instead of debug
    pub fn with_echo(mut self, echo_raw_lines: bool) -> Self {
        self.echo_raw_lines = echo_raw_lines;
        self
    }

    pub fn stats(&self) -> &LoopStats {
        &self.stats
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn reassembler(&self) -> &Reassembler {
        &self.reassembler
    }

    /// Process one line from the source.
    ///
    /// Returns the reading written, if this line completed one. Parse
    /// failures are logged and counted, never returned; sink failures are.
    pub fn process_line(&mut self, line: &str) -> Result<Option<Reading>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        self.stats.lines_received += 1;
        if self.echo_raw_lines {
            info!("[serial] {}", line);
        } else {
            debug!("[serial] {}", line);
        }

        let step = match self.reassembler.push(line) {
            Ok(step) => step,
            Err(e) => {
                warn!("Dropping line: {}", e);
                self.stats.lines_dropped += 1;
                return Ok(None);
            }
        };

        if step.discarded.is_some() {
            self.stats.fragments_discarded += 1;
        }

        match step.reading {
            Some(reading) => {
                self.sink.write(&reading)?;
                self.stats.records_written += 1;
                Ok(Some(reading))
            }
            None => Ok(None),
        }
    }

    /// Run until the source closes or `cancel` fires, then close the sink
    pub fn run(&mut self, cancel: &CancellationToken) -> Result<LoopStats> {
        let started = Instant::now();
        info!(
            "Stream loop started (resync policy: {})",
            self.reassembler.policy_name()
        );

        let outcome = self.drive(cancel);
        let shutdown = self.shutdown();
        self.stats.runtime = started.elapsed();

        outcome?;
        shutdown?;
        Ok(self.stats.clone())
    }

    fn drive(&mut self, cancel: &CancellationToken) -> Result<()> {
        loop {
            if cancel.is_cancelled() {
                info!("Cancellation requested, stopping stream loop");
                return Ok(());
            }

            match self.source.next_line()? {
                ReadOutcome::Line(line) => {
                    self.process_line(&line)?;
                }
                ReadOutcome::Idle => continue,
                ReadOutcome::Closed => {
                    info!("Line source closed");
                    return Ok(());
                }
            }
        }
    }

    fn shutdown(&mut self) -> Result<()> {
        let carry = self.reassembler.take_carry();
        if let Some(fragment) = carry.fragment() {
            debug!("Discarding incomplete fragment at shutdown: {}", fragment);
            self.stats.fragments_discarded += 1;
        }
        self.sink.close()
    }

    pub fn into_parts(self) -> (S, K) {
        (self.source, self.sink)
    }
}
