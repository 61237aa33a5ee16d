//! Gaussian blur for single-channel 8-bit planes.
//!
//! Separable two-pass convolution (horizontal, then vertical) computed in
//! f32. Borders use edge replication: taps that fall outside the image read
//! the nearest edge pixel, so a constant plane blurs to itself. Taps past
//! the far edge all read that edge, so the kernel is folded down to the
//! image size and the cost follows the pixel count, not `kernel_size`.

use ndarray::{Array2, ArrayView2};

use super::core::{fill_rows, gaussian_kernel_1d, to_u8};

/// Apply Gaussian blur to a grayscale plane.
///
/// # Arguments
/// * `input` - Plane of shape (height, width)
/// * `kernel_size` - Number of taps per pass, odd
/// * `sigma` - Standard deviation of the Gaussian
///
/// # Returns
/// Blurred plane with the same dimensions, rounded to the nearest u8
pub fn gaussian_blur_u8(input: ArrayView2<u8>, kernel_size: usize, sigma: f64) -> Array2<u8> {
    let (height, width) = input.dim();
    let max_radius = height.max(width).saturating_sub(1);
    let kernel = gaussian_kernel_1d(kernel_size, sigma, max_radius);
    let half = kernel.len() / 2;

    // Horizontal pass
    let mut temp = Array2::<f32>::zeros((height, width));
    fill_rows(&mut temp, |y, mut row| {
        for x in 0..width {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let sx = (x as isize + ki as isize - half as isize)
                    .clamp(0, width as isize - 1) as usize;
                sum += input[[y, sx]] as f32 * kv;
            }
            row[x] = sum;
        }
    });

    // Vertical pass
    let mut output = Array2::<u8>::zeros((height, width));
    fill_rows(&mut output, |y, mut row| {
        for x in 0..width {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let sy = (y as isize + ki as isize - half as isize)
                    .clamp(0, height as isize - 1) as usize;
                sum += temp[[sy, x]] * kv;
            }
            row[x] = to_u8(sum);
        }
    });

    output
}
