//! The object types a host can instantiate, and their attribute defaults.

use std::fmt;
use std::str::FromStr;
use weft_core::types::{FillMode, MelodyAlgorithm, RhythmConfig};
use weft_core::Transform;

/// Which transformation an object runs on bang
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Gates,
    Repeater,
    Shifter,
    Rhythm,
    Rational,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 5] = [
        ObjectKind::Gates,
        ObjectKind::Repeater,
        ObjectKind::Shifter,
        ObjectKind::Rhythm,
        ObjectKind::Rational,
    ];

    /// Full object name, e.g. `weft.gates`
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Gates => "weft.gates",
            ObjectKind::Repeater => "weft.repeater",
            ObjectKind::Shifter => "weft.shifter",
            ObjectKind::Rhythm => "weft.rhythm",
            ObjectKind::Rational => "weft.rational",
        }
    }

    /// Name of the pattern attribute, if the object has one
    pub fn pattern_name(&self) -> Option<&'static str> {
        match self {
            ObjectKind::Gates => Some("gates"),
            ObjectKind::Repeater => Some("repeats"),
            ObjectKind::Shifter => Some("shifts"),
            ObjectKind::Rhythm => Some("rhythm"),
            ObjectKind::Rational => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ObjectKind::Gates => "Transform a sequence by applying a gate pattern.",
            ObjectKind::Repeater => "Transform a sequence by applying a repeater sequence.",
            ObjectKind::Shifter => "Shift the elements in a sequence.",
            ObjectKind::Rhythm => "Transform a sequence by applying a rhythmic pattern.",
            ObjectKind::Rational => "Transform a sequence by rational melody algorithms.",
        }
    }
}

impl FromStr for ObjectKind {
    type Err = String;

    /// Accepts either the full name (`weft.rhythm`) or the short one (`rhythm`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let short = wanted.strip_prefix("weft.").unwrap_or(&wanted);
        match short {
            "gates" | "gate" => Ok(ObjectKind::Gates),
            "repeater" => Ok(ObjectKind::Repeater),
            "shifter" => Ok(ObjectKind::Shifter),
            "rhythm" => Ok(ObjectKind::Rhythm),
            "rational" => Ok(ObjectKind::Rational),
            _ => Err(format!("Unknown object '{}'", s.trim())),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attribute values held by one object
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectState {
    pub sequence: Vec<i32>,
    pub pattern: Vec<i32>,
    /// Output length for rhythm; below 1 means "derive it"
    pub length: i32,
    pub fill_mode: FillMode,
    pub melody: MelodyAlgorithm,
}

impl ObjectState {
    /// Initial attribute values for `kind`
    pub fn defaults(kind: ObjectKind) -> Self {
        // The shifter accumulates both lists from nothing
        let (sequence, pattern) = match kind {
            ObjectKind::Shifter => (Vec::new(), Vec::new()),
            ObjectKind::Rational => (vec![0], Vec::new()),
            _ => (vec![0], vec![1]),
        };

        Self {
            sequence,
            pattern,
            length: -1,
            fill_mode: FillMode::Wrap,
            melody: MelodyAlgorithm::Xi,
        }
    }

    /// The transformation these attributes describe for `kind`
    pub fn transform(&self, kind: ObjectKind) -> Transform {
        match kind {
            ObjectKind::Gates => Transform::Gate(self.pattern.clone()),
            ObjectKind::Repeater => Transform::Repeat(self.pattern.clone()),
            ObjectKind::Shifter => Transform::Shift(self.pattern.clone()),
            ObjectKind::Rhythm => Transform::Rhythm(
                self.pattern.clone(),
                RhythmConfig::new(Some(self.length), self.fill_mode),
            ),
            ObjectKind::Rational => Transform::Melody(self.melody),
        }
    }
}
