//! Tests for the reassembly step and the stateful reassembler

use super::*;
use crate::app::services::reassembly::{
    CarryState, DatePrefixPolicy, NeverResync, Reassembler, reassemble,
};
use crate::app::services::record_parser::{ParseError, parse_record};

#[test]
fn test_complete_line_emits_and_clears() {
    let step = reassemble(&CarryState::empty(), SAMPLE_LINE, &DatePrefixPolicy).unwrap();

    assert_eq!(step.reading, Some(parse_record(SAMPLE_LINE).unwrap()));
    assert!(step.carry.is_empty());
    assert_eq!(step.discarded, None);
}

#[test]
fn test_complete_line_discards_held_fragment() {
    let prev = CarryState::holding("09/22/2025 14:50:00");
    let step = reassemble(&prev, SAMPLE_LINE, &DatePrefixPolicy).unwrap();

    assert_eq!(step.reading, Some(parse_record(SAMPLE_LINE).unwrap()));
    assert!(step.carry.is_empty());
    assert_eq!(step.discarded.as_deref(), Some("09/22/2025 14:50:00"));
}

#[test]
fn test_empty_line_is_noop() {
    let prev = CarryState::holding(FRAGMENT_A);
    for line in ["", "   ", "\r"] {
        let step = reassemble(&prev, line, &DatePrefixPolicy).unwrap();
        assert_eq!(step.reading, None);
        assert_eq!(step.carry, prev);
    }

    let step = reassemble(&CarryState::empty(), "", &DatePrefixPolicy).unwrap();
    assert!(step.carry.is_empty());
}

#[test]
fn test_two_fragments_reassemble() {
    let step = reassemble(&CarryState::empty(), FRAGMENT_A, &DatePrefixPolicy).unwrap();
    assert_eq!(step.reading, None);
    assert_eq!(step.carry.fragment(), Some(FRAGMENT_A));

    let step = reassemble(&step.carry, FRAGMENT_B, &DatePrefixPolicy).unwrap();
    assert_eq!(step.reading, Some(parse_record(SAMPLE_LINE).unwrap()));
    assert!(step.carry.is_empty());
}

#[test]
fn test_split_at_every_whitespace_boundary() {
    let expected = parse_record(SAMPLE_LINE).unwrap();
    let tokens: Vec<&str> = SAMPLE_LINE.split_whitespace().collect();

    for split in 1..tokens.len() {
        let head = tokens[..split].join(" ");
        let tail = tokens[split..].join(" ");

        let mut reassembler = Reassembler::new();
        let first = reassembler.push(&head).unwrap();
        assert_eq!(first.reading, None, "split at {}", split);

        let second = reassembler.push(&tail).unwrap();
        assert_eq!(second.reading.as_ref(), Some(&expected), "split at {}", split);
        assert!(reassembler.carry().is_empty(), "split at {}", split);
    }
}

#[test]
fn test_three_fragments_extend_carry() {
    let mut reassembler = Reassembler::new();

    assert_eq!(reassembler.push("09/22/2025 14:51:02").unwrap().reading, None);
    assert_eq!(reassembler.push("-3.794832 -38.557644").unwrap().reading, None);
    assert_eq!(
        reassembler.carry().fragment(),
        Some("09/22/2025 14:51:02 -3.794832 -38.557644")
    );

    let step = reassembler
        .push("24.12 45.00 101196.00 0 0.00 0.00 0.00")
        .unwrap();
    assert_eq!(step.reading, Some(parse_record(SAMPLE_LINE).unwrap()));
    assert!(reassembler.carry().is_empty());
}

#[test]
fn test_date_prefixed_fragment_replaces_orphan() {
    let prev = CarryState::holding("09/22/2025 14:50:58 -3.79");
    let line = "09/22/2025 14:51:02 -3.794832";

    let step = reassemble(&prev, line, &DatePrefixPolicy).unwrap();
    assert_eq!(step.reading, None);
    assert_eq!(step.carry.fragment(), Some(line));
    assert_eq!(step.discarded.as_deref(), Some("09/22/2025 14:50:58 -3.79"));

    // The fresh fragment still completes normally
    let step = reassemble(&step.carry, FRAGMENT_B, &DatePrefixPolicy).unwrap();
    assert_eq!(step.reading, Some(parse_record(SAMPLE_LINE).unwrap()));
}

#[test]
fn test_never_resync_keeps_orphan() {
    let prev = CarryState::holding("09/22/2025 14:50:58 -3.79");
    let step = reassemble(&prev, FRAGMENT_A, &NeverResync).unwrap();

    assert_eq!(step.discarded, None);
    assert_eq!(
        step.carry.fragment(),
        Some("09/22/2025 14:50:58 -3.79 09/22/2025 14:51:02 -3.794832")
    );
}

#[test]
fn test_invalid_field_propagates_and_keeps_carry() {
    let bad = "09/22/2025 14:51:02 -3.794832 -38.557644 abc 45.00 101196.00 0 0.00 0.00 0.00";

    let mut reassembler = Reassembler::new();
    reassembler.push(FRAGMENT_A).unwrap();

    let err = reassembler.push(bad).unwrap_err();
    assert!(matches!(
        err,
        ParseError::InvalidField {
            field: "temperature",
            ..
        }
    ));
    assert_eq!(reassembler.carry().fragment(), Some(FRAGMENT_A));

    // Without a held fragment the state is likewise untouched
    let mut reassembler = Reassembler::new();
    assert!(reassembler.push(bad).is_err());
    assert!(reassembler.carry().is_empty());
}

#[test]
fn test_invalid_datetime_propagates() {
    let bad = "2025-09-22 14:51:02 -3.794832 -38.557644 24.12 45.00 101196.00 0 0.00 0.00 0.00";
    let err = reassemble(&CarryState::empty(), bad, &DatePrefixPolicy).unwrap_err();
    assert!(matches!(err, ParseError::InvalidDateTime { .. }));
}

#[test]
fn test_failed_stitch_with_bad_field_is_held_until_next_record() {
    let mut reassembler = Reassembler::new();
    reassembler.push("09/22/2025 14:51:02 -3.794832 -38.557644 abc").unwrap();

    // Stitch has enough columns but a bad temperature; not a date prefix, so held
    let step = reassembler.push("45.00 101196.00 0 0.00 0.00 0.00").unwrap();
    assert_eq!(step.reading, None);
    assert!(!reassembler.carry().is_empty());

    // A complete record parses on its own and clears the stuck fragment
    let step = reassembler.push(SAMPLE_LINE).unwrap();
    assert!(step.reading.is_some());
    assert_eq!(
        step.discarded.as_deref(),
        Some("09/22/2025 14:51:02 -3.794832 -38.557644 abc 45.00 101196.00 0 0.00 0.00 0.00")
    );
    assert!(reassembler.carry().is_empty());
}

#[test]
fn test_take_carry() {
    let mut reassembler = Reassembler::new();
    reassembler.push(FRAGMENT_A).unwrap();

    let dropped = reassembler.take_carry();
    assert_eq!(dropped.fragment(), Some(FRAGMENT_A));
    assert!(reassembler.carry().is_empty());
    assert_eq!(reassembler.policy_name(), "date-prefix");
}

#[test]
fn test_carry_state_holding_blank_is_empty() {
    assert!(CarryState::holding("  ").is_empty());
    assert!(CarryState::default().is_empty());
}
