//! Tests for transform module.

use super::cycle::PatternCycler;
use super::*;
use crate::error::WeftError;
use crate::types::{FillMode, MelodyAlgorithm, RhythmConfig};

const RHYTHM_SEQ: [i32; 8] = [1, 1, 5, 5, 6, 6, 4, 4];

#[test]
fn test_cycler_wraps_index() {
    let cycler = PatternCycler::new(&[1, 0, 0], "gate").unwrap();
    assert_eq!(cycler.at(0), 1);
    assert_eq!(cycler.at(3), 1);
    assert_eq!(cycler.at(4), 0);
    assert_eq!(cycler.len(), 3);
    assert_eq!(cycler.hits(), 1);
}

#[test]
fn test_cycler_rejects_empty_pattern() {
    let err = PatternCycler::new(&[], "gate").unwrap_err();
    assert_eq!(err, WeftError::InvalidPattern { transform: "gate" });
}

// Gate

#[test]
fn test_gate_applies_pattern() {
    assert_eq!(
        gate(&[1, 1, 5, 5, 6, 6], &[1, 0, 0]).unwrap(),
        vec![1, 0, 0, 5, 0, 0]
    );
}

#[test]
fn test_gate_sequence_not_multiple_of_pattern() {
    assert_eq!(gate(&[1, 1, 5, 5, 7], &[1, 0, 0]).unwrap(), vec![1, 0, 0, 5, 0]);
}

#[test]
fn test_gate_sequence_shorter_than_pattern() {
    assert_eq!(gate(&[1, 5], &[1, 0, 0]).unwrap(), vec![1, 0]);
}

#[test]
fn test_gate_any_non_zero_opens() {
    assert_eq!(gate(&[3, 4, 5], &[-1, 7]).unwrap(), vec![3, 4, 5]);
}

#[test]
fn test_gate_empty_sequence() {
    assert!(gate(&[], &[1, 0]).unwrap().is_empty());
}

#[test]
fn test_gate_empty_pattern_is_error() {
    assert!(matches!(
        gate(&[1, 2], &[]),
        Err(WeftError::InvalidPattern { .. })
    ));
}

// Repeater

#[test]
fn test_repeat_applies_counts() {
    assert_eq!(
        repeat(&[1, 5, 6, 4], &[1, 2, 1, 2]).unwrap(),
        vec![1, 5, 5, 6, 4, 4]
    );
}

#[test]
fn test_repeat_pattern_not_multiple_of_sequence_wraps() {
    assert_eq!(
        repeat(&[1, 5, 6, 4], &[3, 2, 1]).unwrap(),
        vec![1, 1, 1, 5, 5, 6, 4, 4, 4]
    );
}

#[test]
fn test_repeat_pattern_longer_than_sequence() {
    assert_eq!(repeat(&[1, 5], &[2, 2, 1]).unwrap(), vec![1, 1, 5, 5]);
}

#[test]
fn test_repeat_zero_and_negative_counts_drop_steps() {
    assert!(repeat(&[1, 5, 6, 4], &[0]).unwrap().is_empty());
    assert_eq!(repeat(&[1, 5, 6], &[1, -2]).unwrap(), vec![1, 6]);
}

#[test]
fn test_repeat_keeps_rests_as_values() {
    assert_eq!(repeat(&[0, 2], &[2]).unwrap(), vec![0, 0, 2, 2]);
}

#[test]
fn test_repeat_empty_pattern_is_error() {
    assert_eq!(
        repeat(&[1], &[]),
        Err(WeftError::InvalidPattern { transform: "repeat" })
    );
}

// Shifter

#[test]
fn test_shift_applies_offsets() {
    assert_eq!(shift(&[1, 2, 3, 4], &[1, 0]).unwrap(), vec![2, 2, 4, 4]);
}

#[test]
fn test_shift_leaves_rests_alone() {
    assert_eq!(shift(&[0, 3, 0, 5], &[7]).unwrap(), vec![0, 10, 0, 12]);
}

#[test]
fn test_shift_negative_offsets() {
    assert_eq!(shift(&[10, 20, 30], &[-1, -2]).unwrap(), vec![9, 18, 29]);
}

#[test]
fn test_shift_without_pattern_is_identity() {
    assert_eq!(shift(&[1, 2, 3], &[]).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_shift_pattern_longer_than_sequence() {
    assert_eq!(shift(&[1, 2], &[5, 6, 7]).unwrap(), vec![6, 8]);
    assert_eq!(shift(&[1, 2, 3, 4, 5], &[1, 2, 3]).unwrap(), vec![2, 4, 6, 5, 7]);
}

#[test]
fn test_shift_transform_without_pattern_is_identity() {
    assert_eq!(Transform::Shift(vec![]).apply(&[4, 0, 2]).unwrap(), vec![4, 0, 2]);
}

#[test]
fn test_shift_saturates() {
    assert_eq!(shift(&[i32::MAX, i32::MIN], &[1, -1]).unwrap(), vec![i32::MAX, i32::MIN]);
}

// Rhythm

#[test]
fn test_rhythm_explicit_length_wraps() {
    let config = RhythmConfig::new(Some(16), FillMode::Wrap);
    assert_eq!(
        rhythm(&RHYTHM_SEQ, &[1, 1, 0], &config).unwrap(),
        vec![1, 1, 0, 5, 5, 0, 6, 6, 0, 4, 4, 0, 1, 1, 0, 5]
    );
}

#[test]
fn test_rhythm_explicit_length_silence() {
    let config = RhythmConfig::new(Some(16), FillMode::Silence);
    assert_eq!(
        rhythm(&RHYTHM_SEQ, &[1, 1, 0], &config).unwrap(),
        vec![1, 1, 0, 5, 5, 0, 6, 6, 0, 4, 4, 0, 0, 0, 0, 0]
    );
}

#[test]
fn test_rhythm_implicit_length_multiple_of_hits() {
    let config = RhythmConfig::default();
    assert_eq!(
        rhythm(&RHYTHM_SEQ, &[1, 1, 0], &config).unwrap(),
        vec![1, 1, 0, 5, 5, 0, 6, 6, 0, 4, 4, 0]
    );
}

#[test]
fn test_rhythm_implicit_length_not_multiple_of_hits() {
    let config = RhythmConfig::default();
    assert_eq!(
        rhythm(&RHYTHM_SEQ, &[1, 1, 0, 1, 0], &config).unwrap(),
        vec![1, 1, 0, 5, 0, 5, 6, 0, 6, 0, 4, 4, 0, 1, 0]
    );
}

#[test]
fn test_rhythm_implicit_length_silence_pads_tail() {
    let config = RhythmConfig::default().with_fill_mode(FillMode::Silence);
    assert_eq!(
        rhythm(&RHYTHM_SEQ, &[1, 1, 0, 1, 0], &config).unwrap(),
        vec![1, 1, 0, 5, 0, 5, 6, 0, 6, 0, 4, 4, 0, 0, 0]
    );
}

#[test]
fn test_rhythm_non_positive_length_uses_implicit_length() {
    let config = RhythmConfig::new(Some(-1), FillMode::Wrap);
    assert_eq!(rhythm(&[1, 2], &[1, 0], &config).unwrap(), vec![1, 0, 2, 0]);
}

#[test]
fn test_rhythm_without_hits_is_empty() {
    let config = RhythmConfig::default();
    assert!(rhythm(&RHYTHM_SEQ, &[0, 0], &config).unwrap().is_empty());
}

#[test]
fn test_rhythm_empty_pattern_is_error() {
    assert_eq!(
        rhythm(&RHYTHM_SEQ, &[], &RhythmConfig::default()),
        Err(WeftError::InvalidPattern { transform: "rhythm" })
    );
}

#[test]
fn test_rhythm_empty_sequence() {
    // Implicit length collapses to zero
    assert!(rhythm(&[], &[1, 0], &RhythmConfig::default())
        .unwrap()
        .is_empty());

    // Silence never reads from the sequence
    let silence = RhythmConfig::new(Some(4), FillMode::Silence);
    assert_eq!(rhythm(&[], &[1, 0], &silence).unwrap(), vec![0, 0, 0, 0]);

    // Wrap would have to index into nothing
    let wrap = RhythmConfig::new(Some(4), FillMode::Wrap);
    assert_eq!(
        rhythm(&[], &[1, 0], &wrap),
        Err(WeftError::EmptySequence { operation: "rhythm" })
    );

    // Only rests fall inside the requested length
    let rests_only = RhythmConfig::new(Some(1), FillMode::Wrap);
    assert_eq!(rhythm(&[], &[0, 1], &rests_only).unwrap(), vec![0]);
}

#[test]
fn test_resolve_length() {
    let pattern = PatternCycler::new(&[1, 1, 0, 1, 0], "rhythm").unwrap();
    assert_eq!(resolve_length(8, &pattern, None), 15);
    assert_eq!(resolve_length(9, &pattern, None), 15);
    assert_eq!(resolve_length(10, &pattern, None), 20);
    assert_eq!(resolve_length(8, &pattern, Some(3)), 3);
    assert_eq!(resolve_length(0, &pattern, None), 0);

    let silent = PatternCycler::new(&[0], "rhythm").unwrap();
    assert_eq!(resolve_length(8, &silent, None), 0);
}

// Transform dispatch

#[test]
fn test_transform_apply_dispatches() {
    let seq = [1, 2, 3, 4];
    assert_eq!(
        Transform::Gate(vec![1, 0]).apply(&seq).unwrap(),
        vec![1, 0, 3, 0]
    );
    assert_eq!(
        Transform::Repeat(vec![2, 0]).apply(&seq).unwrap(),
        vec![1, 1, 3, 3]
    );
    assert_eq!(
        Transform::Shift(vec![1, 0]).apply(&seq).unwrap(),
        vec![2, 2, 4, 4]
    );
    assert_eq!(
        Transform::Rhythm(vec![1, 0], RhythmConfig::default())
            .apply(&seq)
            .unwrap(),
        vec![1, 0, 2, 0, 3, 0, 4, 0]
    );
    assert_eq!(
        Transform::Melody(MelodyAlgorithm::Xi)
            .apply(&seq)
            .unwrap()
            .len(),
        20
    );
}

#[test]
fn test_transform_names() {
    assert_eq!(Transform::Gate(vec![1]).name(), "gate");
    assert_eq!(Transform::Melody(MelodyAlgorithm::Iv).name(), "melody");
}
