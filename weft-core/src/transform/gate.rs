use super::cycle::PatternCycler;
use crate::error::Result;

/// Silence every step whose gate is closed (`0`).
///
/// The output always has the length of `seq`. An open gate is any non-zero
/// value.
pub fn gate(seq: &[i32], gates: &[i32]) -> Result<Vec<i32>> {
    let gates = PatternCycler::new(gates, "gate")?;

    Ok(seq
        .iter()
        .enumerate()
        .map(|(i, &step)| if gates.at(i) == 0 { 0 } else { step })
        .collect())
}
