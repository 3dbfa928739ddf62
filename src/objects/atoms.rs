//! Parsing and validation of user-supplied lists.
//!
//! Lists arrive as text, are split into atoms, and are only handed to the
//! core once every atom is an integer.

use std::fmt;
use thiserror::Error;

/// A single element of an incoming list
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Int(i64),
    Float(f64),
    Symbol(String),
}

impl Atom {
    pub fn parse(token: &str) -> Atom {
        if let Ok(int) = token.parse::<i64>() {
            Atom::Int(int)
        } else if let Ok(float) = token.parse::<f64>() {
            Atom::Float(float)
        } else {
            Atom::Symbol(token.to_string())
        }
    }

    /// The integer this atom stands for, if any. A float counts when it has
    /// no fractional part.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Atom::Int(int) => Some(*int),
            Atom::Float(float) if float.is_finite() && float.fract() == 0.0 => Some(*float as i64),
            _ => None,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Int(int) => write!(f, "{}", int),
            Atom::Float(float) => write!(f, "{}", float),
            Atom::Symbol(symbol) => f.write_str(symbol),
        }
    }
}

/// Why a list was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("list is empty")]
    Empty,

    #[error("'{0}' is not an integer")]
    NotInteger(String),

    #[error("{0} does not fit in a 32-bit integer")]
    OutOfRange(i64),
}

/// Split a list on whitespace and commas, ignoring surrounding brackets
pub fn parse_atoms(input: &str) -> Vec<Atom> {
    input
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(Atom::parse)
        .collect()
}

/// Convert atoms to integers, rejecting the whole list on the first bad atom
pub fn ints_only(atoms: &[Atom]) -> Result<Vec<i32>, ListError> {
    if atoms.is_empty() {
        return Err(ListError::Empty);
    }

    atoms
        .iter()
        .map(|atom| {
            let int = atom
                .as_int()
                .ok_or_else(|| ListError::NotInteger(atom.to_string()))?;
            i32::try_from(int).map_err(|_| ListError::OutOfRange(int))
        })
        .collect()
}

/// Render a list the way the REPL prints it
pub fn format_list(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
