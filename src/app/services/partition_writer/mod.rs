//! Date-partitioned CSV output
//!
//! One CSV file per station calendar day, named `YYYYMMDD.csv`. The writer
//! keeps exactly one partition open and rotates when a reading's date
//! differs from the open one. Every row is flushed as soon as it is written.
//!
//! - [`writer`] - The [`PartitionWriter`] itself
//! - [`sink`] - The [`RecordSink`] seam the stream loop writes through

pub mod sink;
pub mod writer;

#[cfg(test)]
mod tests;

pub use sink::RecordSink;
pub use writer::PartitionWriter;
