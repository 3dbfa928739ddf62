use super::require_steps;
use crate::error::Result;

/// Melody XI: two steps forward, one step back.
///
/// Each rotation of the sequence contributes a forward run of
/// `len / 2 + 1` steps followed by that run read backwards through the
/// output, skipping every other emitted value.
pub fn melody_xi(seq: &[i32]) -> Result<Vec<i32>> {
    require_steps(seq, "melody xi")?;

    let run = seq.len() / 2 + 1;
    let mut transformed = Vec::with_capacity(seq.len() * (2 * run - 1));

    for segment in 0..seq.len() {
        for index in 0..run {
            transformed.push(seq[(index + segment) % seq.len()]);
        }

        // The output grows by one per pushed step, so stepping back two
        // positions each time walks the forward run in reverse.
        for index in 0..run - 1 {
            let mirrored = transformed[transformed.len() - 1 - 2 * index];
            transformed.push(mirrored);
        }
    }
    Ok(transformed)
}
