//! Test utilities for stream loop testing

use std::collections::VecDeque;
use std::io::{self, Cursor, Read};

use crate::Result;
use crate::app::models::Reading;
use crate::app::services::partition_writer::RecordSink;
use crate::app::services::stream_loop::LineReader;


pub const SAMPLE_LINE: &str =
    "09/22/2025 14:51:02 -3.794832 -38.557644 24.12 45.00 101196.00 0 0.00 0.00 0.00";

/// Line reader over an in-memory byte stream
pub fn reader_for(input: &str) -> LineReader<Cursor<Vec<u8>>> {
    LineReader::new(Cursor::new(input.as_bytes().to_vec()))
}

/// Collects readings in memory
impl RecordSink for Vec<Reading> {
    fn write(&mut self, reading: &Reading) -> Result<()> {
        self.push(reading.clone());
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Byte stream that yields scripted chunks, with `None` standing for a timeout
pub struct ScriptedPort {
    chunks: VecDeque<Option<Vec<u8>>>,
}

impl ScriptedPort {
    pub fn new(chunks: Vec<Option<&str>>) -> Self {
        Self {
            chunks: chunks
                .into_iter()
                .map(|c| c.map(|s| s.as_bytes().to_vec()))
                .collect(),
        }
    }
}

impl Read for ScriptedPort {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.chunks.pop_front() {
            None => Ok(0),
            Some(None) => Err(io::Error::new(io::ErrorKind::TimedOut, "timed out")),
            Some(Some(mut bytes)) => {
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                if n < bytes.len() {
                    self.chunks.push_front(Some(bytes.split_off(n)));
                }
                Ok(n)
            }
        }
    }
}
