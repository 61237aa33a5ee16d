//! Pencil sketch pipelines.
//!
//! grayscale → invert → Gaussian blur → color dodge (gray over the blurred
//! inverse). The color variant then mixes the original image back in over
//! the sketch.
//!
//! All validation runs before any pixel work, so a rejected call has no
//! effect at all. Both pipelines are pure functions of their arguments.

use ndarray::{Array2, Axis};
use tracing::{debug, instrument};

use crate::buffer::{PixelBuffer, RGB_CHANNELS};
use crate::config::{ColorFilterConfig, FilterConfig};
use crate::error::{Result, SketchError};
use crate::filters::blend::{color_dodge_u8, mix_u8};
use crate::filters::blur::gaussian_blur_u8;
use crate::filters::color_adjust::invert_u8;
use crate::filters::grayscale::{gray_to_rgb_u8, grayscale_plane_u8};

/// Monochrome pencil sketch.
///
/// Accepts a grayscale or RGB image and returns a single-channel image of
/// the same size.
pub fn grayscale_sketch(image: &PixelBuffer, blur_kernel: i32, sigma: f64) -> Result<PixelBuffer> {
    grayscale_sketch_with(image, &FilterConfig::new(blur_kernel, sigma))
}

/// Color pencil sketch.
///
/// Accepts an RGB image and returns an RGB image of the same size.
/// `color_strength` weighs the original colors against the gray sketch.
pub fn color_sketch(
    image: &PixelBuffer,
    blur_kernel: i32,
    sigma: f64,
    color_strength: f64,
) -> Result<PixelBuffer> {
    color_sketch_with(image, &ColorFilterConfig::new(blur_kernel, sigma, color_strength))
}

/// [`grayscale_sketch`] with a prepared config.
#[instrument(
    skip(image),
    fields(width = image.width(), height = image.height(), channels = image.channels())
)]
pub fn grayscale_sketch_with(image: &PixelBuffer, config: &FilterConfig) -> Result<PixelBuffer> {
    config.validate().inspect_err(log_rejection)?;

    let sketch = sketch_plane(image, config);
    Ok(PixelBuffer::from_array_unchecked(sketch.insert_axis(Axis(2))))
}

/// [`color_sketch`] with a prepared config.
#[instrument(
    skip(image),
    fields(width = image.width(), height = image.height(), channels = image.channels())
)]
pub fn color_sketch_with(image: &PixelBuffer, config: &ColorFilterConfig) -> Result<PixelBuffer> {
    config.validate().inspect_err(log_rejection)?;
    if image.channels() != RGB_CHANNELS {
        let err = SketchError::invalid(format!(
            "color sketch requires a 3-channel image, got {}",
            image.channels()
        ));
        log_rejection(&err);
        return Err(err);
    }

    let sketch = sketch_plane(image, &config.filter);
    let sketch_rgb = gray_to_rgb_u8(sketch.view());

    let mixed = mix_u8(image.view(), sketch_rgb.view(), config.color_strength as f32);
    debug!(color_strength = config.color_strength, "mixed original color over sketch");

    Ok(PixelBuffer::from_array_unchecked(mixed))
}

/// Run the shared sketch stages on a validated config.
fn sketch_plane(image: &PixelBuffer, config: &FilterConfig) -> Array2<u8> {
    let gray = grayscale_plane_u8(image.view());
    debug!("converted to grayscale");

    let inverted = invert_u8(gray.view());
    let blurred = gaussian_blur_u8(inverted.view(), config.kernel_size(), config.sigma);
    debug!(
        blur_kernel = config.blur_kernel,
        sigma = config.sigma,
        "blurred inverted grayscale"
    );

    let sketch = color_dodge_u8(gray.view(), blurred.view());
    debug!("dodge blended");
    sketch
}

fn log_rejection(err: &SketchError) {
    debug!(reason = err.reason(), "rejected sketch request");
}
