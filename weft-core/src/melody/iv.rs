use super::require_steps;
use crate::error::Result;
use crate::transform::rhythm;
use crate::types::{FillMode, RhythmConfig};

/// Melody IV: arpeggios of growing size, each followed by a rest.
///
/// For every segment size `s` in `1..=len` the sequence is laid over a rhythm
/// of `s` hits and one rest, wrapping, for `len * (s + 1)` steps.
pub fn melody_iv(seq: &[i32]) -> Result<Vec<i32>> {
    require_steps(seq, "melody iv")?;

    let mut transformed = Vec::new();
    for segment in 1..=seq.len() {
        let mut pattern = vec![1; segment];
        pattern.push(0);

        let config = RhythmConfig::fixed((seq.len() * (segment + 1)) as i64, FillMode::Wrap)?;
        transformed.extend(rhythm(seq, &pattern, &config)?);
    }
    Ok(transformed)
}
