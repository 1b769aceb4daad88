//! Reassembly of records split across serial lines
//!
//! The serial transport occasionally delivers one logical record as two
//! physical lines. A line that fails to parse only because it has too few
//! columns is held as [`CarryState`] and stitched onto the next line.
//!
//! - [`buffer`] - The reassembly step and the stateful [`Reassembler`]
//! - [`policy`] - Heuristics deciding when a held fragment is an orphan
//!
//! Resynchronisation is best effort: when a stitched line still does not
//! parse, the [`ResyncPolicy`] decides whether the new line starts a fresh
//! record. A wrong guess costs at most one held fragment.

pub mod buffer;
pub mod policy;

#[cfg(test)]
mod tests;

pub use buffer::{CarryState, ReassemblyStep, Reassembler, reassemble};
pub use policy::{DatePrefixPolicy, NeverResync, ResyncPolicy};
