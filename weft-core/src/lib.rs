//! # Weft Core
//!
//! WASM-compatible core library for weft sequence transformations.
//! Every operation is a pure function of an integer sequence and a pattern
//! that is cycled against it; no state, no I/O.
//!
//! ## Features
//!
//! - **serde**: Enable serialization of the configuration types
//! - **wasm**: Enable WASM bindings via wasm-bindgen
//!
//! ## Example
//!
//! ```
//! use weft_core::transform::{gate, rhythm};
//! use weft_core::types::{FillMode, RhythmConfig};
//!
//! let gated = gate(&[1, 1, 5, 5, 6, 6], &[1, 0, 0]).unwrap();
//! assert_eq!(gated, vec![1, 0, 0, 5, 0, 0]);
//!
//! let config = RhythmConfig::new(Some(6), FillMode::Silence);
//! let timed = rhythm(&[1, 2, 3], &[1, 0], &config).unwrap();
//! assert_eq!(timed, vec![1, 0, 2, 0, 3, 0]);
//! ```

pub mod error;
pub mod melody;
pub mod transform;
pub mod types;
pub mod wasm;

// Re-export commonly used types
pub use error::{Result, WeftError};
pub use melody::melody;
pub use transform::Transform;
pub use types::{FillMode, MelodyAlgorithm, RhythmConfig};
