//! Filter configuration values.
//!
//! Both configs are plain data so hosts can keep them in their own settings
//! files. Nothing trusts a config until [`FilterConfig::validate`] (or the
//! color variant) has passed; every pipeline entry point calls it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SketchError};

/// Blur parameters shared by both sketch styles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Gaussian kernel size in pixels. Must be odd and positive.
    pub blur_kernel: i32,
    /// Gaussian standard deviation. Must be positive and finite.
    pub sigma: f64,
}

impl FilterConfig {
    pub fn new(blur_kernel: i32, sigma: f64) -> Self {
        Self { blur_kernel, sigma }
    }

    pub fn validate(&self) -> Result<()> {
        if self.blur_kernel <= 0 || self.blur_kernel % 2 == 0 {
            return Err(SketchError::invalid(format!(
                "blur kernel must be odd and positive, got {}",
                self.blur_kernel
            )));
        }
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(SketchError::invalid(format!(
                "sigma must be positive, got {}",
                self.sigma
            )));
        }
        Ok(())
    }

    /// Kernel size as an index type. Only meaningful after `validate`.
    pub(crate) fn kernel_size(&self) -> usize {
        self.blur_kernel.max(1) as usize
    }
}

/// Parameters for the color pencil sketch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorFilterConfig {
    #[serde(flatten)]
    pub filter: FilterConfig,
    /// Weight of the original color against the sketch, in `[0, 1]`.
    /// `0.0` yields the plain sketch, `1.0` the untouched original.
    pub color_strength: f64,
}

impl ColorFilterConfig {
    pub fn new(blur_kernel: i32, sigma: f64, color_strength: f64) -> Self {
        Self {
            filter: FilterConfig::new(blur_kernel, sigma),
            color_strength,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.filter.validate()?;
        if !(0.0..=1.0).contains(&self.color_strength) {
            return Err(SketchError::invalid(format!(
                "color strength must be in [0, 1], got {}",
                self.color_strength
            )));
        }
        Ok(())
    }
}
