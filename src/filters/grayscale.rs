//! Grayscale conversion.
//!
//! Uses ITU-R BT.601 luma weights (0.299, 0.587, 0.114), the weighting
//! camera pipelines and OpenCV apply to 8-bit RGB. The weights are held in
//! thousandths so the conversion is exact integer arithmetic: white maps to
//! 255 and black to 0 with no float drift.

use ndarray::{Array2, Array3, ArrayView2, ArrayView3};

use super::core::fill_rows;

/// BT.601 luma weights, in thousandths
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;
const LUMA_SCALE: u32 = 1000;

/// Luma of one RGB sample, rounded to nearest.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    ((weighted + LUMA_SCALE / 2) / LUMA_SCALE) as u8
}

/// Convert an image to a single grayscale plane.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
///
/// # Returns
/// Plane of shape (height, width). One-channel input is copied through.
pub fn grayscale_plane_u8(input: ArrayView3<u8>) -> Array2<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array2::<u8>::zeros((height, width));

    fill_rows(&mut output, |y, mut row| {
        for x in 0..width {
            row[x] = if channels >= 3 {
                luma(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]])
            } else {
                input[[y, x, 0]]
            };
        }
    });

    output
}

/// Expand a grayscale plane to RGB with R=G=B.
pub fn gray_to_rgb_u8(input: ArrayView2<u8>) -> Array3<u8> {
    let (height, width) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 3));

    fill_rows(&mut output, |y, mut row| {
        for x in 0..width {
            let v = input[[y, x]];
            for c in 0..3 {
                row[[x, c]] = v;
            }
        }
    });

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(0, 0, 0), 0);
    }

    #[test]
    fn test_luma_primaries() {
        // 0.299 * 255 = 76.2
        assert_eq!(luma(255, 0, 0), 76);
        // 0.587 * 255 = 149.7
        assert_eq!(luma(0, 255, 0), 150);
        // 0.114 * 255 = 29.1
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn test_grayscale_rgb_plane() {
        let mut img = Array3::<u8>::zeros((1, 2, 3));
        img[[0, 0, 0]] = 200; // R
        img[[0, 0, 1]] = 100; // G
        img[[0, 0, 2]] = 50; // B
        img[[0, 1, 1]] = 255;

        let result = grayscale_plane_u8(img.view());

        // 59.8 + 58.7 + 5.7 = 124.2
        assert_eq!(result.dim(), (1, 2));
        assert_eq!(result[[0, 0]], 124);
        assert_eq!(result[[0, 1]], 150);
    }

    #[test]
    fn test_grayscale_single_channel_passthrough() {
        let img = Array3::from_shape_vec((2, 2, 1), vec![0u8, 64, 128, 255]).unwrap();
        let result = grayscale_plane_u8(img.view());
        assert_eq!(result.iter().copied().collect::<Vec<_>>(), vec![0, 64, 128, 255]);
    }

    #[test]
    fn test_gray_to_rgb() {
        let plane = Array2::from_shape_vec((1, 2), vec![12u8, 240]).unwrap();
        let result = gray_to_rgb_u8(plane.view());
        assert_eq!(result.dim(), (1, 2, 3));
        assert_eq!(result[[0, 0, 0]], 12);
        assert_eq!(result[[0, 0, 2]], 12);
        assert_eq!(result[[0, 1, 1]], 240);
    }
}
