//! Core utilities for the sketch filters.
//!
//! This module provides shared functionality used by multiple filters:
//! - Gaussian kernel generation
//! - Row-parallel output filling (rayon when the `parallel` feature is on)
//! - Float to 8-bit sample conversion

use ndarray::{Array, ArrayViewMut, Axis, RemoveAxis};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Taps summed one by one before a Gaussian tail switches to quadrature.
const EXACT_TAIL_TAPS: usize = 4096;

/// Generate a normalized 1D Gaussian kernel of an explicit size.
///
/// The kernel is symmetric around its center tap and its weights sum to 1.
/// An even `size` is treated as the next smaller odd size; sizes below 3
/// (or a non-positive sigma) produce the identity kernel `[1.0]`.
///
/// Taps further than `max_radius` from the center are folded into the two
/// outermost taps. Under edge replication every such tap reads the same
/// edge pixel as the tap at `max_radius`, so passing `len - 1` for an axis
/// of length `len` leaves the blur unchanged while bounding the kernel by
/// the image instead of by `size`.
///
/// # Arguments
/// * `size` - Number of taps, expected to be odd
/// * `sigma` - Standard deviation of the Gaussian
/// * `max_radius` - Largest distance from the center that gets its own tap
///
/// # Returns
/// Normalized kernel as Vec<f32>, at most `2 * max_radius + 1` long
pub fn gaussian_kernel_1d(size: usize, sigma: f64, max_radius: usize) -> Vec<f32> {
    let half = size.saturating_sub(1) / 2;
    if half == 0 || sigma <= 0.0 {
        return vec![1.0];
    }

    let denom = 2.0 * sigma * sigma;
    let radius = half.min(max_radius);
    let mut weights: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let x = i as f64 - radius as f64;
            // Keep the center tap finite when sigma squared underflows.
            if x == 0.0 {
                1.0
            } else {
                (-x * x / denom).exp()
            }
        })
        .collect();

    let tail = gaussian_tail_sum(radius + 1, half, denom);
    if tail > 0.0 {
        let last = weights.len() - 1;
        weights[0] += tail;
        weights[last] += tail;
    }

    let sum: f64 = weights.iter().sum();
    weights.iter().map(|w| (w / sum) as f32).collect()
}

/// Sum of `exp(-x^2 / denom)` for integer `x` in `from..=to`.
///
/// Terms past the point where the exponential underflows are skipped. Long
/// runs that remain are integrated with composite Simpson over
/// `[from - 0.5, to + 0.5]`; they only occur for sigmas large enough that
/// the Gaussian is flat at unit scale.
fn gaussian_tail_sum(from: usize, to: usize, denom: f64) -> f64 {
    // exp(-746) is zero in f64
    let cutoff = (denom * 746.0).sqrt().ceil();
    let to = if cutoff < to as f64 { cutoff as usize } else { to };
    if from > to {
        return 0.0;
    }

    let term = |x: f64| (-x * x / denom).exp();
    if to - from < EXACT_TAIL_TAPS {
        return (from..=to).map(|x| term(x as f64)).sum();
    }

    let a = from as f64 - 0.5;
    let b = to as f64 + 0.5;
    let steps = 2 * EXACT_TAIL_TAPS;
    let h = (b - a) / steps as f64;
    let inner: f64 = (1..steps)
        .map(|i| {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * term(a + i as f64 * h)
        })
        .sum();
    (term(a) + inner + term(b)) * h / 3.0
}

/// Fill `output` one outer-axis row at a time.
///
/// `f` receives the row index and a mutable view of that row. Rows are
/// independent, so with the `parallel` feature they run on the rayon pool;
/// the result is identical either way.
pub fn fill_rows<T, D, F>(output: &mut Array<T, D>, f: F)
where
    T: Send + Sync,
    D: RemoveAxis,
    F: Fn(usize, ArrayViewMut<'_, T, D::Smaller>) + Sync + Send,
{
    #[cfg(feature = "parallel")]
    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, row)| f(y, row));

    #[cfg(not(feature = "parallel"))]
    output
        .axis_iter_mut(Axis(0))
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}

/// Round a float sample to the nearest 8-bit value.
#[inline]
pub fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
