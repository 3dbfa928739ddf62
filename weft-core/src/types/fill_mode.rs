//! Fill policy for rhythms that outlast their source sequence.

use std::fmt;
use std::str::FromStr;

/// What the rhythm transform emits on a hit once every step of the source
/// sequence has been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FillMode {
    /// Start over from the first step of the sequence
    #[default]
    Wrap,
    /// Emit rests for the remaining hits
    Silence,
}

impl FillMode {
    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            FillMode::Wrap => "wrap",
            FillMode::Silence => "silence",
        }
    }
}

impl FromStr for FillMode {
    type Err = String;

    /// Parse fill mode from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wrap" => Ok(FillMode::Wrap),
            "silence" => Ok(FillMode::Silence),
            other => Err(format!(
                "Unknown fill mode '{}'. Expected 'wrap' or 'silence'",
                other
            )),
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fill_mode() {
        assert_eq!("wrap".parse::<FillMode>(), Ok(FillMode::Wrap));
        assert_eq!("SILENCE".parse::<FillMode>(), Ok(FillMode::Silence));
        assert!("loop".parse::<FillMode>().is_err());
    }

    #[test]
    fn test_default_is_wrap() {
        assert_eq!(FillMode::default(), FillMode::Wrap);
    }
}
