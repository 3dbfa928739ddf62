//! Index-into-pattern cycling shared by every transform.

use crate::error::{Result, WeftError};

/// A non-empty pattern read with wrap-around indexing.
///
/// Construction is the only place the "pattern has at least one step"
/// precondition is checked; `at` can then never divide by zero.
#[derive(Clone, Copy, Debug)]
pub struct PatternCycler<'a> {
    pattern: &'a [i32],
}

impl<'a> PatternCycler<'a> {
    /// Wrap `pattern`, naming `transform` in the error if it is empty
    pub fn new(pattern: &'a [i32], transform: &'static str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(WeftError::InvalidPattern { transform });
        }
        Ok(Self { pattern })
    }

    /// Pattern step applying to sequence step `i`
    #[inline]
    pub fn at(&self, i: usize) -> i32 {
        self.pattern[i % self.pattern.len()]
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Number of non-zero steps
    pub fn hits(&self) -> usize {
        self.pattern.iter().filter(|&&step| step != 0).count()
    }
}
