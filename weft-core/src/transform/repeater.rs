use super::cycle::PatternCycler;
use crate::error::Result;

/// Emit each step as many times as its repeat count says.
///
/// A count of zero (or below) drops the step entirely rather than resting it.
pub fn repeat(seq: &[i32], repeats: &[i32]) -> Result<Vec<i32>> {
    let repeats = PatternCycler::new(repeats, "repeat")?;

    let mut transformed = Vec::with_capacity(seq.len());
    for (i, &step) in seq.iter().enumerate() {
        let count = repeats.at(i).max(0) as usize;
        transformed.extend(std::iter::repeat(step).take(count));
    }
    Ok(transformed)
}
