//! # Weft
//!
//! Host for the weft sequence transformations. Where `weft-core` is a set of
//! pure functions, this crate keeps each object's current sequence and
//! pattern, validates incoming lists, and drives everything from an
//! interactive REPL.
//!
//! ## Modules
//!
//! - `objects`: Thread-safe objects holding attributes, with list validation
//!   and an outlet channel for their output.
//! - `commands`: The REPL command registry and handlers.
//! - `repl`: The Read-Eval-Print Loop.
//! - `logging`: `tracing` subscriber setup.

pub mod commands;
pub mod logging;
pub mod objects;
pub mod repl;

// Re-export commonly used types and functions for convenience
pub use crate::objects::{ObjectError, ObjectKind, OutletMessage, WeftObject};
pub use weft_core::{FillMode, MelodyAlgorithm, Transform, WeftError};
