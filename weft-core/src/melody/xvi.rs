//! Melody XVI: a neighbor-interpolated index tree.

use super::require_steps;
use crate::error::Result;

/// Longest sequence hosts should hand to `melody_xvi`.
///
/// Level `i` of the tree holds `2^i + 1` indices, so the output roughly
/// doubles with every extra step: 20 steps already give about a million.
pub const MAX_STEPS: usize = 20;

/// Level zero of the tree; level one repeats it
const SEED: [i64; 3] = [0, 1, 0];

/// Insert one new index between every neighboring pair of `previous`.
///
/// Neighbors one apart get an index one above the larger; any other pair
/// gets one below the larger.
fn next_level(previous: &[i64]) -> Vec<i64> {
    let mut level = Vec::with_capacity(previous.len() * 2 - 1);
    level.push(previous[0]);

    for &next in &previous[1..] {
        let prior = level[level.len() - 1];
        let (low, high) = if prior <= next { (prior, next) } else { (next, prior) };
        level.push(if high - low == 1 { high + 1 } else { high - 1 });
        level.push(next);
    }
    level
}

/// Indices of every level up to `levels - 1`, concatenated
pub fn index_tree(levels: usize) -> Vec<i64> {
    let mut indices = Vec::new();
    indices.extend_from_slice(&SEED);
    indices.extend_from_slice(&SEED);

    let mut previous = SEED.to_vec();
    for _ in 2..levels {
        let level = next_level(&previous);
        indices.extend_from_slice(&level);
        previous = level;
    }
    indices
}

/// Build the melody by reading the source sequence through the index tree.
///
/// A single-step sequence yields just that step. Indices are reduced modulo
/// the sequence length; for the tree built here they never exceed
/// `len - 1`, so the reduction leaves them unchanged.
pub fn melody_xvi(seq: &[i32]) -> Result<Vec<i32>> {
    require_steps(seq, "melody xvi")?;

    if seq.len() < 2 {
        return Ok(vec![seq[0]]);
    }

    let len = seq.len() as i64;
    Ok(index_tree(seq.len())
        .into_iter()
        .map(|index| seq[index.rem_euclid(len) as usize])
        .collect())
}
