//! Line-oriented input for the stream loop

use std::io::{BufRead, BufReader, ErrorKind, Read};

use tracing::warn;

use crate::constants::MAX_LINE_BYTES;
use crate::{Error, Result};

/// Result of waiting for the next line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line with terminators and carriage returns removed; may be empty
    Line(String),
    /// The read timed out before a terminator arrived
    Idle,
    /// The stream has ended
    Closed,
}

/// Supplies one line at a time
pub trait LineSource {
    fn next_line(&mut self) -> Result<ReadOutcome>;
}

/// Splits any byte stream on `\n`.
///
/// Bytes received before a read timeout are kept and completed by later
/// reads, so a slow line is never cut in two by the timeout itself. A line
/// longer than `max_line_len` bytes is dropped up to its terminator.
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    pending: Vec<u8>,
    max_line_len: usize,
    overflowed: bool,
}

impl<R: Read> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
            pending: Vec::new(),
            max_line_len: MAX_LINE_BYTES,
            overflowed: false,
        }
    }

    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    /// Decode a raw line; invalid UTF-8 and carriage returns are dropped
    fn decode(raw: &[u8]) -> String {
        String::from_utf8_lossy(raw)
            .chars()
            .filter(|&c| c != '\r' && c != char::REPLACEMENT_CHARACTER)
            .collect::<String>()
            .trim()
            .to_string()
    }

    fn take_pending(&mut self) -> String {
        let line = Self::decode(&self.pending);
        self.pending.clear();
        line
    }

    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R: Read> LineSource for LineReader<R> {
    fn next_line(&mut self) -> Result<ReadOutcome> {
        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e)
                    if matches!(
                        e.kind(),
                        ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted
                    ) =>
                {
                    return Ok(ReadOutcome::Idle);
                }
                Err(e) => return Err(Error::io("Failed to read from line source", e)),
            };

            if available.is_empty() {
                if self.overflowed {
                    self.overflowed = false;
                    self.pending.clear();
                }
                if self.pending.is_empty() {
                    return Ok(ReadOutcome::Closed);
                }
                // Unterminated tail before end of stream
                return Ok(ReadOutcome::Line(self.take_pending()));
            }

            let (chunk_len, terminated) = match available.iter().position(|&b| b == b'\n') {
                Some(i) => (i, true),
                None => (available.len(), false),
            };
            if !self.overflowed {
                self.pending.extend_from_slice(&available[..chunk_len]);
            }
            self.reader
                .consume(if terminated { chunk_len + 1 } else { chunk_len });

            if !self.overflowed && self.pending.len() > self.max_line_len {
                warn!(
                    "Dropping line longer than {} bytes without a terminator",
                    self.max_line_len
                );
                self.overflowed = true;
                self.pending.clear();
            }

            if terminated {
                if self.overflowed {
                    self.overflowed = false;
                    continue;
                }
                return Ok(ReadOutcome::Line(self.take_pending()));
            }
        }
    }
}
