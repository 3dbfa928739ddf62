//! Selector for the rational melody generators.

use std::fmt;
use std::str::FromStr;

/// One of the rational melody generators, named by lowercase roman numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MelodyAlgorithm {
    /// Growing arpeggios, each closed by a rest
    Iv,
    /// Forward run then mirror, once per rotation
    #[default]
    Xi,
    /// 63-step grid that is invariant under power-of-two strides
    Xv,
    /// Neighbor-interpolated index tree
    Xvi,
}

impl MelodyAlgorithm {
    /// Every generator, in numbering order
    pub const ALL: [MelodyAlgorithm; 4] = [
        MelodyAlgorithm::Iv,
        MelodyAlgorithm::Xi,
        MelodyAlgorithm::Xv,
        MelodyAlgorithm::Xvi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MelodyAlgorithm::Iv => "iv",
            MelodyAlgorithm::Xi => "xi",
            MelodyAlgorithm::Xv => "xv",
            MelodyAlgorithm::Xvi => "xvi",
        }
    }
}

impl FromStr for MelodyAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MelodyAlgorithm::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown melody '{}'. Expected one of: iv, xi, xv, xvi",
                    wanted
                )
            })
    }
}

impl fmt::Display for MelodyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
