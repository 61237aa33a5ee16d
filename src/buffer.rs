//! Decoded pixel buffers.
//!
//! A [`PixelBuffer`] is an `(height, width, channels)` array of 8-bit
//! samples with either one channel (grayscale intensity) or three (RGB).
//! The shape invariant is checked once at construction so the filters never
//! see an empty or oddly shaped image.

use ndarray::{Array3, ArrayView3, Axis};

use crate::error::{Result, SketchError};

/// Channel count of a grayscale buffer.
pub const GRAY_CHANNELS: usize = 1;
/// Channel count of an RGB buffer.
pub const RGB_CHANNELS: usize = 3;

/// Owned 8-bit image, grayscale or RGB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Wrap an existing `(height, width, channels)` array.
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        check_shape(data.dim())?;
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Self { data })
    }

    /// Build a buffer from interleaved, row-major samples.
    pub fn from_raw(width: usize, height: usize, channels: usize, samples: Vec<u8>) -> Result<Self> {
        check_shape((height, width, channels))?;

        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or_else(|| SketchError::invalid("image dimensions overflow"))?;
        if samples.len() != expected {
            return Err(SketchError::invalid(format!(
                "expected {expected} samples for a {width}x{height}x{channels} image, got {}",
                samples.len()
            )));
        }

        let data = Array3::from_shape_vec((height, width, channels), samples)
            .map_err(|err| SketchError::invalid(err.to_string()))?;
        Ok(Self { data })
    }

    /// A buffer where every pixel equals `pixel` (one sample per channel).
    pub fn filled(width: usize, height: usize, pixel: &[u8]) -> Result<Self> {
        check_shape((height, width, pixel.len()))?;
        let data = Array3::from_shape_fn((height, width, pixel.len()), |(_, _, c)| pixel[c]);
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    pub fn is_grayscale(&self) -> bool {
        self.channels() == GRAY_CHANNELS
    }

    /// Sample at column `x`, row `y`, or `None` when out of range.
    pub fn get(&self, x: usize, y: usize, channel: usize) -> Option<u8> {
        self.data.get([y, x, channel]).copied()
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    pub fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    pub fn into_array(self) -> Array3<u8> {
        self.data
    }

    /// Interleaved, row-major samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    /// Copy of this buffer with three channels; grayscale samples are
    /// replicated into R, G and B.
    pub fn to_rgb(&self) -> PixelBuffer {
        if self.channels() == RGB_CHANNELS {
            return self.clone();
        }
        let gray = self.data.index_axis(Axis(2), 0);
        let data = Array3::from_shape_fn((self.height(), self.width(), RGB_CHANNELS), |(y, x, _)| {
            gray[[y, x]]
        });
        PixelBuffer { data }
    }

    pub(crate) fn from_array_unchecked(data: Array3<u8>) -> Self {
        debug_assert!(check_shape(data.dim()).is_ok());
        Self { data }
    }
}

fn check_shape((height, width, channels): (usize, usize, usize)) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(SketchError::invalid("image dimensions must be positive"));
    }
    if channels != GRAY_CHANNELS && channels != RGB_CHANNELS {
        return Err(SketchError::invalid(format!(
            "image must have 1 or 3 channels, got {channels}"
        )));
    }
    Ok(())
}
