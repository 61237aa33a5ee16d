//! Sketch Filters
//!
//! Pencil and color pencil sketch stylization over decoded pixel buffers,
//! with Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! - **Grayscale**: (height, width, 1) - single channel
//! - **RGB**: (height, width, 3) - 3 color channels
//!
//! Samples are `u8` (0-255). Decoding and encoding image files is left to
//! the caller.
//!
//! ## Pipeline
//! grayscale → invert → Gaussian blur → color dodge, optionally mixed with
//! the original colors. See [`sketch`] for the two entry points and
//! [`presets`] for slider-driven rendering.
//!
//! ```
//! use sketch_filters::{color_sketch, grayscale_sketch, PixelBuffer};
//!
//! let image = PixelBuffer::filled(4, 4, &[255, 255, 255])?;
//! let sketch = grayscale_sketch(&image, 5, 3.0)?;
//! assert!(sketch.view().iter().all(|&v| v == 254));
//!
//! let tinted = color_sketch(&image, 5, 3.0, 1.0)?;
//! assert_eq!(tinted, image);
//! # Ok::<(), sketch_filters::SketchError>(())
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod filters;
pub mod presets;
pub mod sketch;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::PixelBuffer;
pub use config::{ColorFilterConfig, FilterConfig};
pub use error::{Result, SketchError};
pub use presets::{render, render_preset, SketchParams, SketchPreset, SketchStyle};
pub use sketch::{color_sketch, color_sketch_with, grayscale_sketch, grayscale_sketch_with};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::buffer::PixelBuffer;
    use crate::error::SketchError;
    use crate::presets::{self, SketchPreset};
    use crate::sketch;

    impl From<SketchError> for PyErr {
        fn from(err: SketchError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    fn to_buffer(image: PyReadonlyArray3<'_, u8>) -> PyResult<PixelBuffer> {
        Ok(PixelBuffer::from_array(image.as_array().to_owned())?)
    }

    /// Pencil sketch of a (H, W, 1) or (H, W, 3) uint8 image.
    ///
    /// Returns a (H, W, 1) uint8 image. Raises ValueError on invalid input.
    #[pyfunction]
    pub fn pencil_sketch<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        blur_kernel: i32,
        sigma: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = to_buffer(image)?;
        let result = sketch::grayscale_sketch(&input, blur_kernel, sigma)?;
        Ok(result.into_array().into_pyarray(py))
    }

    /// Color pencil sketch of a (H, W, 3) uint8 image.
    ///
    /// `color_strength` in [0, 1] weighs the original colors against the
    /// sketch. Raises ValueError on invalid input.
    #[pyfunction]
    pub fn color_pencil_sketch<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        blur_kernel: i32,
        sigma: f64,
        color_strength: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = to_buffer(image)?;
        let result = sketch::color_sketch(&input, blur_kernel, sigma, color_strength)?;
        Ok(result.into_array().into_pyarray(py))
    }

    /// Render with a named preset such as "graphite_classic".
    ///
    /// `intensity` and `detail` default to the preset's own values.
    #[pyfunction]
    #[pyo3(signature = (image, preset, intensity=None, detail=None))]
    pub fn render_preset<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        preset: &str,
        intensity: Option<f64>,
        detail: Option<f64>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let preset: SketchPreset = preset.parse()?;
        let input = to_buffer(image)?;
        let result = presets::render_preset(&input, preset, intensity, detail)?;
        Ok(result.into_array().into_pyarray(py))
    }

    /// Sketch Filters Rust extension module
    #[pymodule]
    pub fn sketch_filters(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(pencil_sketch, m)?)?;
        m.add_function(wrap_pyfunction!(color_pencil_sketch, m)?)?;
        m.add_function(wrap_pyfunction!(render_preset, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::sketch_filters;
