//! Re-timing a sequence against a rest/hit pattern.

use super::cycle::PatternCycler;
use crate::error::{Result, WeftError};
use crate::types::{FillMode, RhythmConfig};

/// Work out how many steps a rhythm invocation produces.
///
/// An explicit length wins. Otherwise the rhythm pattern is repeated just
/// often enough for its hits to consume every step of the sequence once; a
/// pattern without hits produces nothing.
pub fn resolve_length(seq_len: usize, rhythm: &PatternCycler<'_>, length: Option<usize>) -> usize {
    if let Some(length) = length.filter(|&n| n >= 1) {
        return length;
    }

    match rhythm.hits() {
        0 => 0,
        hits => rhythm.len() * seq_len.div_ceil(hits),
    }
}

/// Lay the sequence out over a rhythm pattern.
///
/// Rests in the pattern emit `0` without consuming a step. Each hit consumes
/// the next step of the sequence; once the sequence is exhausted the fill
/// mode decides between starting over (`Wrap`) and resting (`Silence`).
pub fn rhythm(seq: &[i32], pattern: &[i32], config: &RhythmConfig) -> Result<Vec<i32>> {
    let pattern = PatternCycler::new(pattern, "rhythm")?;
    let length = resolve_length(seq.len(), &pattern, config.length);

    // Grown on demand; `length` comes from the caller unbounded
    let mut transformed = Vec::new();
    let mut consumed = 0usize;

    for i in 0..length {
        if pattern.at(i) == 0 {
            transformed.push(0);
            continue;
        }

        if consumed >= seq.len() && config.fill_mode == FillMode::Silence {
            transformed.push(0);
            continue;
        }

        // Only reachable with an empty sequence in wrap mode
        if seq.is_empty() {
            return Err(WeftError::EmptySequence { operation: "rhythm" });
        }

        transformed.push(seq[consumed % seq.len()]);
        consumed += 1;
    }

    Ok(transformed)
}
