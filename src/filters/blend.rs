//! Blend modes used to composite the sketch.
//!
//! Both functions expect their two inputs to share the same shape.

use ndarray::{Array2, Array3, ArrayView2, ArrayView3};

use super::core::{fill_rows, to_u8};

/// Added to the dodge divisor so a fully white blend layer never divides
/// by zero.
pub const DODGE_EPSILON: u32 = 1;

// ============================================================================
// Color Dodge
// ============================================================================

/// Color dodge of one sample: `min(255, base * 255 / (255 - blend + 1))`.
///
/// Integer arithmetic with floor division. With a black blend layer the
/// result is `base * 255 / 256`, so white stays at 254.
#[inline]
pub fn color_dodge(base: u8, blend: u8) -> u8 {
    let divisor = 255 - blend as u32 + DODGE_EPSILON;
    (base as u32 * 255 / divisor).min(255) as u8
}

/// Color dodge `blend` onto `base`, per pixel.
///
/// # Arguments
/// * `base` - Bottom layer (height, width)
/// * `blend` - Top layer, same shape as `base`
///
/// # Returns
/// Dodged plane with the same dimensions
pub fn color_dodge_u8(base: ArrayView2<u8>, blend: ArrayView2<u8>) -> Array2<u8> {
    let (height, width) = base.dim();
    let mut output = Array2::<u8>::zeros((height, width));

    fill_rows(&mut output, |y, mut row| {
        for x in 0..width {
            row[x] = color_dodge(base[[y, x]], blend[[y, x]]);
        }
    });

    output
}

// ============================================================================
// Linear Mix
// ============================================================================

/// Linear mix of two images: `weight * a + (1 - weight) * b`.
///
/// # Arguments
/// * `a` - Image (height, width, channels)
/// * `b` - Image with the same shape as `a`
/// * `weight` - Weight of `a`, in `[0, 1]`
///
/// # Returns
/// Mixed image, rounded to nearest. `weight = 1` returns `a` exactly and
/// `weight = 0` returns `b` exactly.
pub fn mix_u8(a: ArrayView3<u8>, b: ArrayView3<u8>, weight: f32) -> Array3<u8> {
    let (height, width, channels) = a.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));
    let inverse = 1.0 - weight;

    fill_rows(&mut output, |y, mut row| {
        for x in 0..width {
            for c in 0..channels {
                let v = weight * a[[y, x, c]] as f32 + inverse * b[[y, x, c]] as f32;
                row[[x, c]] = to_u8(v);
            }
        }
    });

    output
}
