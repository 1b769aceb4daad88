//! One-slot carry buffer and the reassembly step

use tracing::{debug, warn};

use super::policy::{DatePrefixPolicy, ResyncPolicy};
use crate::app::models::Reading;
use crate::app::services::record_parser::{ParseError, parse_record};

/// At most one pending fragment believed to be the first part of a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarryState(Option<String>);

impl CarryState {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn holding(fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        if fragment.trim().is_empty() {
            Self(None)
        } else {
            Self(Some(fragment))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Outcome of feeding one line through the reassembly step
#[derive(Debug, Clone, PartialEq)]
pub struct ReassemblyStep {
    /// Record completed by this line, if any
    pub reading: Option<Reading>,

    /// Carry state to use for the next line
    pub carry: CarryState,

    /// Held fragment given up as unrecoverable
    pub discarded: Option<String>,
}

impl ReassemblyStep {
    fn emit(reading: Reading) -> Self {
        Self {
            reading: Some(reading),
            carry: CarryState::empty(),
            discarded: None,
        }
    }

    /// A complete line that supersedes whatever fragment was held
    fn emit_replacing(reading: Reading, prev: &CarryState) -> Self {
        Self {
            discarded: prev.fragment().map(str::to_string),
            ..Self::emit(reading)
        }
    }

    fn hold(carry: CarryState) -> Self {
        Self {
            reading: None,
            carry,
            discarded: None,
        }
    }
}

/// Feed `line` through the reassembly step given the previous carry state.
///
/// A complete `line` clears `prev`, reporting any held fragment as discarded.
/// Errors other than [`ParseError::InsufficientColumns`] on `line` itself are
/// returned unchanged; the caller keeps `prev` in that case.
pub fn reassemble(
    prev: &CarryState,
    line: &str,
    policy: &dyn ResyncPolicy,
) -> Result<ReassemblyStep, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ReassemblyStep::hold(prev.clone()));
    }

    match parse_record(line) {
        Ok(reading) => Ok(ReassemblyStep::emit_replacing(reading, prev)),
        Err(e) if e.is_fragment() => {
            let Some(held) = prev.fragment() else {
                debug!("Holding fragment: {}", line);
                return Ok(ReassemblyStep::hold(CarryState::holding(line)));
            };

            let combined = format!("{} {}", held, line);
            match parse_record(&combined) {
                Ok(reading) => {
                    debug!("Reassembled record from two fragments");
                    Ok(ReassemblyStep::emit(reading))
                }
                Err(stitch_err) => {
                    if policy.starts_new_record(line) {
                        debug!(
                            "Stitch failed ({}), {} policy restarts at new line",
                            stitch_err,
                            policy.name()
                        );
                        Ok(ReassemblyStep {
                            reading: None,
                            carry: CarryState::holding(line),
                            discarded: Some(held.to_string()),
                        })
                    } else {
                        debug!("Stitch failed ({}), extending fragment", stitch_err);
                        Ok(ReassemblyStep::hold(CarryState::holding(combined)))
                    }
                }
            }
        }
        Err(e) => Err(e),
    }
}

/// Stateful wrapper owning the carry state and resync policy
pub struct Reassembler {
    carry: CarryState,
    policy: Box<dyn ResyncPolicy>,
}

impl Reassembler {
    /// Create a reassembler using the date-prefix heuristic
    pub fn new() -> Self {
        Self::with_policy(Box::new(DatePrefixPolicy))
    }

    pub fn with_policy(policy: Box<dyn ResyncPolicy>) -> Self {
        Self {
            carry: CarryState::empty(),
            policy,
        }
    }

    /// Feed one line and keep the resulting carry state.
    ///
    /// On a non-fragment parse error the carry state is left untouched.
    pub fn push(&mut self, line: &str) -> Result<ReassemblyStep, ParseError> {
        let step = reassemble(&self.carry, line, self.policy.as_ref())?;
        if let Some(fragment) = &step.discarded {
            warn!("Discarding incomplete fragment: {}", fragment);
        }
        self.carry = step.carry.clone();
        Ok(step)
    }

    pub fn carry(&self) -> &CarryState {
        &self.carry
    }

    /// Drop any held fragment, returning it
    pub fn take_carry(&mut self) -> CarryState {
        std::mem::take(&mut self.carry)
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }
}

impl Default for Reassembler {
    fn default() -> Self {
        Self::new()
    }
}
