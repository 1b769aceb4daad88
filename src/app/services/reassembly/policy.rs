//! Resynchronisation heuristics

/// Decides whether a line begins a new record when stitching has failed
pub trait ResyncPolicy: Send {
    /// Name used in log messages
    fn name(&self) -> &'static str;

    /// True if `line` looks like the start of a record, in which case the
    /// held fragment is discarded and `line` is held instead
    fn starts_new_record(&self, line: &str) -> bool;
}

/// A line starting with two digits and a `/` in the first three characters
/// looks like a `MM/DD/YYYY` date token
#[derive(Debug, Clone, Copy, Default)]
pub struct DatePrefixPolicy;

impl ResyncPolicy for DatePrefixPolicy {
    fn name(&self) -> &'static str {
        "date-prefix"
    }

    fn starts_new_record(&self, line: &str) -> bool {
        let bytes = line.as_bytes();
        bytes.len() >= 2
            && bytes[0].is_ascii_digit()
            && bytes[1].is_ascii_digit()
            && bytes.iter().take(3).any(|&b| b == b'/')
    }
}

/// Never discards: every failed stitch keeps growing the held fragment
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverResync;

impl ResyncPolicy for NeverResync {
    fn name(&self) -> &'static str {
        "never"
    }

    fn starts_new_record(&self, _line: &str) -> bool {
        false
    }
}
