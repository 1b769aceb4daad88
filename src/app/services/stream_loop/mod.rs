//! The read, reassemble, parse and dispatch cycle
//!
//! A [`StreamLoop`] pulls lines from a [`LineSource`], pushes them through the
//! [`Reassembler`](crate::app::services::reassembly::Reassembler) and hands
//! every completed reading to a
//! [`RecordSink`](crate::app::services::partition_writer::RecordSink).
//! Per-line parse failures are logged and counted; only sink or transport
//! errors end the loop.
//!
//! - [`source`] - Line sources and the byte-stream [`LineReader`]
//! - [`processor`] - The loop itself
//! - [`stats`] - Counters reported on shutdown

pub mod processor;
pub mod source;
pub mod stats;

#[cfg(test)]
mod tests;

pub use processor::StreamLoop;
pub use source::{LineReader, LineSource, ReadOutcome};
pub use stats::LoopStats;
