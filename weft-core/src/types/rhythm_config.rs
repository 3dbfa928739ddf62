//! Per-invocation settings for the rhythm transform.

use super::fill_mode::FillMode;
use crate::error::{Result, WeftError};

/// Output length and fill policy for one rhythm invocation.
///
/// `length: None` asks the transform to derive the length from the number of
/// hits in the rhythm pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RhythmConfig {
    pub length: Option<usize>,
    pub fill_mode: FillMode,
}

impl RhythmConfig {
    /// Create a config, treating a non-positive length as "not given".
    pub fn new(length: Option<i32>, fill_mode: FillMode) -> Self {
        let length = length
            .filter(|&n| n >= 1)
            .and_then(|n| usize::try_from(n).ok());
        Self { length, fill_mode }
    }

    /// Create a config with an explicit length, rejecting non-positive values.
    pub fn fixed(length: i64, fill_mode: FillMode) -> Result<Self> {
        if length < 1 {
            return Err(WeftError::InvalidLength(length));
        }
        let length = usize::try_from(length).map_err(|_| WeftError::InvalidLength(length))?;
        Ok(Self {
            length: Some(length),
            fill_mode,
        })
    }

    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_length_is_implicit() {
        assert_eq!(RhythmConfig::new(Some(0), FillMode::Wrap).length, None);
        assert_eq!(RhythmConfig::new(Some(-1), FillMode::Wrap).length, None);
        assert_eq!(RhythmConfig::new(None, FillMode::Wrap).length, None);
        assert_eq!(RhythmConfig::new(Some(16), FillMode::Wrap).length, Some(16));
    }

    #[test]
    fn test_fixed_rejects_non_positive_length() {
        assert_eq!(
            RhythmConfig::fixed(0, FillMode::Wrap),
            Err(WeftError::InvalidLength(0))
        );
        let config = RhythmConfig::fixed(8, FillMode::Silence).unwrap();
        assert_eq!(config.length, Some(8));
        assert_eq!(config.fill_mode, FillMode::Silence);
    }

    #[test]
    fn test_fixed_accepts_full_i32_range() {
        let config = RhythmConfig::fixed(i64::from(i32::MAX), FillMode::Wrap).unwrap();
        assert_eq!(config.length, Some(i32::MAX as usize));
        assert_eq!(
            RhythmConfig::fixed(i64::MIN, FillMode::Wrap),
            Err(WeftError::InvalidLength(i64::MIN))
        );
    }
}
