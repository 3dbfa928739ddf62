//! WASM bindings for weft-core
//!
//! Exposes the transformations to JavaScript. Sequences cross the boundary as
//! `Int32Array`s; precondition violations become thrown errors carrying the
//! error message.

#[cfg(feature = "wasm")]
use crate::error::WeftError;
#[cfg(feature = "wasm")]
use crate::types::{FillMode, MelodyAlgorithm, RhythmConfig};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
fn to_js_error(err: WeftError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Silence the steps whose gate is `0`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = gate)]
pub fn gate_js(sequence: Vec<i32>, gates: Vec<i32>) -> Result<Vec<i32>, JsValue> {
    crate::transform::gate(&sequence, &gates).map_err(to_js_error)
}

/// Repeat each step by its count
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = repeat)]
pub fn repeat_js(sequence: Vec<i32>, repeats: Vec<i32>) -> Result<Vec<i32>, JsValue> {
    crate::transform::repeat(&sequence, &repeats).map_err(to_js_error)
}

/// Offset sounding steps; an empty shift list leaves the sequence as is
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = shift)]
pub fn shift_js(sequence: Vec<i32>, shifts: Vec<i32>) -> Result<Vec<i32>, JsValue> {
    crate::transform::shift(&sequence, &shifts).map_err(to_js_error)
}

/// Lay the sequence over a rhythm. `length` may be omitted (or non-positive)
/// to derive it from the pattern; `fill_mode` is "wrap" or "silence".
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = rhythm)]
pub fn rhythm_js(
    sequence: Vec<i32>,
    pattern: Vec<i32>,
    length: Option<i32>,
    fill_mode: &str,
) -> Result<Vec<i32>, JsValue> {
    let fill_mode: FillMode = fill_mode.parse().map_err(|e: String| JsValue::from_str(&e))?;
    let config = RhythmConfig::new(length, fill_mode);
    crate::transform::rhythm(&sequence, &pattern, &config).map_err(to_js_error)
}

/// Run one of the rational melody generators ("iv", "xi", "xv", "xvi")
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = melody)]
pub fn melody_js(sequence: Vec<i32>, algorithm: &str) -> Result<Vec<i32>, JsValue> {
    let algorithm: MelodyAlgorithm = algorithm.parse().map_err(|e: String| JsValue::from_str(&e))?;
    crate::melody::melody(&sequence, algorithm).map_err(to_js_error)
}

/// Names of the available melody generators
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = melodyNames)]
pub fn melody_names() -> JsValue {
    serde_wasm_bindgen::to_value(&MelodyAlgorithm::ALL).unwrap_or(JsValue::NULL)
}
