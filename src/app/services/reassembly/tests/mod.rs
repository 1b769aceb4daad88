//! Tests for the reassembly step, the stateful reassembler and policies

mod buffer_tests;

pub const SAMPLE_LINE: &str =
    "09/22/2025 14:51:02 -3.794832 -38.557644 24.12 45.00 101196.00 0 0.00 0.00 0.00";

pub const FRAGMENT_A: &str = "09/22/2025 14:51:02 -3.794832";
pub const FRAGMENT_B: &str = "-38.557644 24.12 45.00 101196.00 0 0.00 0.00 0.00";
