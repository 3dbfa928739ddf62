//! Rational melody generators
//!
//! Each generator recombines a source sequence into a longer melody. They
//! share nothing except the input, and all of them reject an empty sequence.

mod iv;
mod xi;
pub mod xv;
pub mod xvi;


pub use iv::melody_iv;
pub use xi::melody_xi;
pub use xv::melody_xv;
pub use xvi::melody_xvi;

use crate::error::{Result, WeftError};
use crate::types::MelodyAlgorithm;

/// Generate the melody selected by `algorithm` from `seq`
pub fn melody(seq: &[i32], algorithm: MelodyAlgorithm) -> Result<Vec<i32>> {
    match algorithm {
        MelodyAlgorithm::Iv => melody_iv(seq),
        MelodyAlgorithm::Xi => melody_xi(seq),
        MelodyAlgorithm::Xv => melody_xv(seq),
        MelodyAlgorithm::Xvi => melody_xvi(seq),
    }
}

fn require_steps(seq: &[i32], operation: &'static str) -> Result<()> {
    if seq.is_empty() {
        return Err(WeftError::EmptySequence { operation });
    }
    Ok(())
}
