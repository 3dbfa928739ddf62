//! Pattern-driven transformations over integer sequences
//!
//! Each transform walks the primary sequence and reads a secondary pattern
//! that is cycled against it: step `i` uses `pattern[i % pattern.len()]`.

mod cycle;
mod gate;
mod repeater;
mod rhythm;
mod shifter;

#[cfg(test)]
mod tests;

pub use cycle::PatternCycler;
pub use gate::gate;
pub use repeater::repeat;
pub use rhythm::{resolve_length, rhythm};
pub use shifter::shift;

use crate::error::Result;
use crate::melody::melody;
use crate::types::{MelodyAlgorithm, RhythmConfig};

/// A single transformation together with everything it needs besides the
/// primary sequence.
///
/// Hosts that hold a "current" pattern build one of these from a snapshot of
/// their state and apply it outside of any lock.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transform {
    Gate(Vec<i32>),
    Repeat(Vec<i32>),
    Shift(Vec<i32>),
    Rhythm(Vec<i32>, RhythmConfig),
    Melody(MelodyAlgorithm),
}

impl Transform {
    /// Run the transformation against `seq`
    pub fn apply(&self, seq: &[i32]) -> Result<Vec<i32>> {
        match self {
            Transform::Gate(pattern) => gate(seq, pattern),
            Transform::Repeat(pattern) => repeat(seq, pattern),
            Transform::Shift(pattern) => shift(seq, pattern),
            Transform::Rhythm(pattern, config) => rhythm(seq, pattern, config),
            Transform::Melody(algorithm) => melody(seq, *algorithm),
        }
    }

    /// Short name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Gate(_) => "gate",
            Transform::Repeat(_) => "repeat",
            Transform::Shift(_) => "shift",
            Transform::Rhythm(..) => "rhythm",
            Transform::Melody(_) => "melody",
        }
    }
}
