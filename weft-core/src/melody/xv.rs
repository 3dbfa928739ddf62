//! Melody XV: a melody that reads the same at every power-of-two stride.

use super::require_steps;
use crate::error::Result;

/// Number of steps in the generated melody
pub const GRID_LEN: usize = 63;

/// Powers of two propagated per filled step (`2^1..=2^7`)
pub const DOUBLINGS: u32 = 7;

/// Index of the first unfilled grid slot, if any
fn next_empty(grid: &[Option<i32>; GRID_LEN]) -> Option<usize> {
    grid.iter().position(Option::is_none)
}

/// Build the 63-step self-similar melody.
///
/// Repeatedly copies every value of the filled prefix to its multiples by
/// `2^p (mod 63)` and then drops the next source step into the first empty
/// slot, until nothing is empty. The result satisfies
/// `out[i] == out[(i << p) % 63]` for all `i` and `p`.
pub fn melody_xv(seq: &[i32]) -> Result<Vec<i32>> {
    require_steps(seq, "melody xv")?;

    let mut grid: [Option<i32>; GRID_LEN] = [None; GRID_LEN];
    let mut fills = 0usize;

    loop {
        let end = next_empty(&grid).unwrap_or(GRID_LEN);

        for i in 0..end {
            let value = grid[i];
            for power in 1..=DOUBLINGS {
                grid[(i << power) % GRID_LEN] = value;
            }
        }

        match next_empty(&grid) {
            Some(slot) => {
                grid[slot] = Some(seq[fills % seq.len()]);
                fills += 1;
            }
            None => break,
        }
    }

    Ok(grid.iter().flatten().copied().collect())
}
