use super::cycle::PatternCycler;
use crate::error::Result;

/// Offset every sounding step by its shift amount; rests stay rests.
///
/// An empty `shifts` pattern means no shift has been configured and the
/// sequence comes back unchanged. Sums saturate at the `i32` bounds.
pub fn shift(seq: &[i32], shifts: &[i32]) -> Result<Vec<i32>> {
    if shifts.is_empty() {
        return Ok(seq.to_vec());
    }
    let shifts = PatternCycler::new(shifts, "shift")?;

    Ok(seq
        .iter()
        .enumerate()
        .map(|(i, &step)| {
            if step == 0 {
                0
            } else {
                step.saturating_add(shifts.at(i))
            }
        })
        .collect())
}
