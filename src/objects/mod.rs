//! Host objects: long-lived attribute state around the pure transforms
//!
//! Each object owns its sequence and pattern behind a mutex. Setters may be
//! called from any thread; `bang` copies everything it needs in a single
//! critical section and runs the transformation after the lock is released.

pub mod atoms;
pub mod kind;

pub use atoms::{format_list, ints_only, parse_atoms, Atom, ListError};
pub use kind::{ObjectKind, ObjectState};

use crossbeam_channel::Sender;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, warn};
use weft_core::melody::xvi;
use weft_core::types::{FillMode, MelodyAlgorithm};
use weft_core::{Transform, WeftError};

/// A list sent out of an object's outlet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutletMessage {
    pub object: ObjectKind,
    pub values: Vec<i32>,
}

/// Errors raised by object messages
#[derive(Debug, Error)]
pub enum ObjectError {
    #[error("{attribute} not stored: {source}")]
    Rejected {
        attribute: &'static str,
        #[source]
        source: ListError,
    },

    #[error("{object} has no '{attribute}' attribute")]
    Unsupported {
        object: ObjectKind,
        attribute: &'static str,
    },

    #[error("{object} has no inlet {inlet}")]
    NoSuchInlet { object: ObjectKind, inlet: usize },

    #[error(transparent)]
    Transform(#[from] WeftError),

    #[error("melody {melody} is limited to {max} steps, sequence has {len}")]
    SequenceTooLong {
        melody: MelodyAlgorithm,
        len: usize,
        max: usize,
    },

    #[error("{0} state lock was poisoned")]
    Poisoned(ObjectKind),
}

/// One weft object instance
pub struct WeftObject {
    kind: ObjectKind,
    state: Mutex<ObjectState>,
    outlet: Sender<OutletMessage>,
}

impl WeftObject {
    /// Create an object with default attributes, sending results to `outlet`
    pub fn new(kind: ObjectKind, outlet: Sender<OutletMessage>) -> Self {
        Self {
            kind,
            state: Mutex::new(ObjectState::defaults(kind)),
            outlet,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn lock(&self) -> Result<MutexGuard<'_, ObjectState>, ObjectError> {
        self.state.lock().map_err(|_| ObjectError::Poisoned(self.kind))
    }

    fn require(&self, supported: bool, attribute: &'static str) -> Result<(), ObjectError> {
        if supported {
            Ok(())
        } else {
            Err(ObjectError::Unsupported {
                object: self.kind,
                attribute,
            })
        }
    }

    /// Validate a list, logging and reporting it if it cannot be stored
    fn validate(&self, attribute: &'static str, args: &[Atom]) -> Result<Vec<i32>, ObjectError> {
        ints_only(args).map_err(|source| {
            warn!(object = %self.kind, attribute, error = %source, "rejected list");
            ObjectError::Rejected { attribute, source }
        })
    }

    /// Replace the primary sequence. A list that is empty or holds anything
    /// but integers leaves the previous sequence in place.
    pub fn set_sequence(&self, args: &[Atom]) -> Result<(), ObjectError> {
        let values = self.validate("sequence", args)?;
        debug!(object = %self.kind, len = values.len(), "sequence set");
        self.lock()?.sequence = values;
        Ok(())
    }

    /// Replace the pattern (gates, repeats, shifts or rhythm)
    pub fn set_pattern(&self, args: &[Atom]) -> Result<(), ObjectError> {
        let attribute = self.kind.pattern_name().ok_or(ObjectError::Unsupported {
            object: self.kind,
            attribute: "pattern",
        })?;
        let values = self.validate(attribute, args)?;
        debug!(object = %self.kind, attribute, len = values.len(), "pattern set");
        self.lock()?.pattern = values;
        Ok(())
    }

    /// Set the rhythm output length; values below 1 derive it from the pattern.
    /// A length outside the 32-bit range leaves the previous one in place.
    pub fn set_length(&self, length: i64) -> Result<(), ObjectError> {
        self.require(self.kind == ObjectKind::Rhythm, "length")?;
        let length = i32::try_from(length).map_err(|_| {
            let source = ListError::OutOfRange(length);
            warn!(object = %self.kind, attribute = "length", error = %source, "rejected length");
            ObjectError::Rejected {
                attribute: "length",
                source,
            }
        })?;
        debug!(object = %self.kind, length, "length set");
        self.lock()?.length = length;
        Ok(())
    }

    pub fn set_fill_mode(&self, fill_mode: FillMode) -> Result<(), ObjectError> {
        self.require(self.kind == ObjectKind::Rhythm, "fill_mode")?;
        debug!(object = %self.kind, %fill_mode, "fill mode set");
        self.lock()?.fill_mode = fill_mode;
        Ok(())
    }

    pub fn set_melody(&self, melody: MelodyAlgorithm) -> Result<(), ObjectError> {
        self.require(self.kind == ObjectKind::Rational, "melody")?;
        debug!(object = %self.kind, %melody, "melody set");
        self.lock()?.melody = melody;
        Ok(())
    }

    /// Append a list to the shifter's sequence (inlet 0) or shifts (inlet 1)
    pub fn append(&self, inlet: usize, args: &[Atom]) -> Result<(), ObjectError> {
        self.require(self.kind == ObjectKind::Shifter, "list")?;
        let attribute = match inlet {
            0 => "sequence",
            1 => "shifts",
            _ => {
                return Err(ObjectError::NoSuchInlet {
                    object: self.kind,
                    inlet,
                })
            }
        };
        let values = self.validate(attribute, args)?;

        let mut state = self.lock()?;
        let target = if inlet == 0 {
            &mut state.sequence
        } else {
            &mut state.pattern
        };
        target.extend_from_slice(&values);
        debug!(object = %self.kind, attribute, len = target.len(), "list appended");
        Ok(())
    }

    /// Reset every attribute to its default
    pub fn clear(&self) -> Result<(), ObjectError> {
        *self.lock()? = ObjectState::defaults(self.kind);
        Ok(())
    }

    /// Copy of the current attributes
    pub fn snapshot(&self) -> Result<ObjectState, ObjectError> {
        Ok(self.lock()?.clone())
    }

    /// Transform the current sequence and send the result out of the outlet.
    ///
    /// On failure nothing is sent and the stored attributes are untouched.
    pub fn bang(&self) -> Result<Vec<i32>, ObjectError> {
        let (sequence, transform) = {
            let state = self.lock()?;
            (state.sequence.clone(), state.transform(self.kind))
        };

        // The xvi output doubles per step; refuse before trying to allocate it
        if transform == Transform::Melody(MelodyAlgorithm::Xvi) && sequence.len() > xvi::MAX_STEPS {
            let err = ObjectError::SequenceTooLong {
                melody: MelodyAlgorithm::Xvi,
                len: sequence.len(),
                max: xvi::MAX_STEPS,
            };
            warn!(object = %self.kind, error = %err, "bang refused");
            return Err(err);
        }

        let values = transform.apply(&sequence).map_err(|err| {
            warn!(object = %self.kind, transform = transform.name(), error = %err, "bang failed");
            err
        })?;
        debug!(object = %self.kind, len = values.len(), "bang");

        // A dropped receiver just means nobody is listening any more
        let _ = self.outlet.send(OutletMessage {
            object: self.kind,
            values: values.clone(),
        });
        Ok(values)
    }

    /// Human-readable attribute listing
    pub fn describe(&self) -> Result<String, ObjectError> {
        let state = self.snapshot()?;
        let mut lines = vec![
            format!("{} - {}", self.kind, self.kind.description()),
            format!("  sequence: [{}]", format_list(&state.sequence)),
        ];
        if let Some(name) = self.kind.pattern_name() {
            lines.push(format!("  {}: [{}]", name, format_list(&state.pattern)));
        }
        match self.kind {
            ObjectKind::Rhythm => {
                let length = if state.length >= 1 {
                    state.length.to_string()
                } else {
                    "auto".to_string()
                };
                lines.push(format!("  length: {}", length));
                lines.push(format!("  fill_mode: {}", state.fill_mode));
            }
            ObjectKind::Rational => lines.push(format!("  melody: {}", state.melody)),
            _ => {}
        }
        Ok(lines.join("\n"))
    }
}
