//! Pixel-wise tone adjustments.

use ndarray::{Array2, ArrayView2};

use super::core::fill_rows;

// ============================================================================
// Invert
// ============================================================================

/// Invert a grayscale plane: `255 - v`.
///
/// # Arguments
/// * `input` - Plane of shape (height, width)
///
/// # Returns
/// Inverted plane with the same dimensions
pub fn invert_u8(input: ArrayView2<u8>) -> Array2<u8> {
    let (height, width) = input.dim();
    let mut output = Array2::<u8>::zeros((height, width));

    fill_rows(&mut output, |y, mut row| {
        for x in 0..width {
            row[x] = 255 - input[[y, x]];
        }
    });

    output
}
