//! WebAssembly exports for the sketch filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images travel
//! as flat, row-major u8 arrays (length = width * height * channels).
//! Invalid input is returned as a JS error string instead of panicking.
//!
//! Build with `--no-default-features --features wasm`; rayon has no threads
//! to run on in a plain wasm32 target.

use wasm_bindgen::prelude::*;

use crate::buffer::PixelBuffer;
use crate::error::SketchError;
use crate::presets::{self, SketchPreset};
use crate::sketch;

impl From<SketchError> for JsValue {
    fn from(err: SketchError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Pencil sketch of a grayscale or RGB image.
///
/// # Arguments
/// * `data` - Flat array of samples (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - 1 (grayscale) or 3 (RGB)
///
/// # Returns
/// Flat single-channel array of width * height samples
#[wasm_bindgen]
pub fn pencil_sketch_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    blur_kernel: i32,
    sigma: f64,
) -> Result<Vec<u8>, JsValue> {
    let input = PixelBuffer::from_raw(width, height, channels, data.to_vec())?;
    let result = sketch::grayscale_sketch(&input, blur_kernel, sigma)?;
    Ok(result.into_raw())
}

/// Color pencil sketch of an RGB image.
///
/// # Arguments
/// * `data` - Flat RGB array (length = width * height * 3)
/// * `color_strength` - Weight of the original colors, 0.0-1.0
///
/// # Returns
/// Flat RGB array of the same length
#[wasm_bindgen]
pub fn color_pencil_sketch_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    blur_kernel: i32,
    sigma: f64,
    color_strength: f64,
) -> Result<Vec<u8>, JsValue> {
    let input = PixelBuffer::from_raw(width, height, 3, data.to_vec())?;
    let result = sketch::color_sketch(&input, blur_kernel, sigma, color_strength)?;
    Ok(result.into_raw())
}

/// Render with a named preset. Output channel count follows the preset
/// style: 1 for pencil presets, 3 for color presets.
#[wasm_bindgen]
pub fn render_preset_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    preset: &str,
    intensity: Option<f64>,
    detail: Option<f64>,
) -> Result<Vec<u8>, JsValue> {
    let preset: SketchPreset = preset.parse()?;
    let input = PixelBuffer::from_raw(width, height, channels, data.to_vec())?;
    let result = presets::render_preset(&input, preset, intensity, detail)?;
    Ok(result.into_raw())
}
