//! Sketch presets and slider mapping.
//!
//! UIs rarely expose kernel sizes and sigmas directly. Instead they offer an
//! intensity and a detail slider (both `[0, 1]`) plus a handful of named
//! presets. This module maps those onto [`FilterConfig`] /
//! [`ColorFilterConfig`] and dispatches to the pipelines.
//!
//! | slider | parameter |
//! |--------|-----------|
//! | detail | `blur_kernel = clamp(round(9 + 30 * detail), 3, 39)`, made odd |
//! | intensity | `sigma = 18 + 62 * intensity` |
//! | intensity | `color_strength = 0.68 + 0.22 * intensity` (color only) |

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::buffer::PixelBuffer;
use crate::config::{ColorFilterConfig, FilterConfig};
use crate::error::{Result, SketchError};
use crate::sketch::{color_sketch_with, grayscale_sketch_with};

const MIN_KERNEL: i32 = 3;
const MAX_KERNEL: i32 = 39;

/// Output style of a sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SketchStyle {
    /// Monochrome graphite look.
    Pencil,
    /// Original colors over a pencil sketch.
    ColorPencil,
}

/// Named starting points for the two sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SketchPreset {
    GraphiteClassic,
    SoftPencil,
    CleanLine,
    ColorPencil,
    VividColor,
    PastelColor,
}

impl SketchPreset {
    pub const ALL: [SketchPreset; 6] = [
        SketchPreset::GraphiteClassic,
        SketchPreset::SoftPencil,
        SketchPreset::CleanLine,
        SketchPreset::ColorPencil,
        SketchPreset::VividColor,
        SketchPreset::PastelColor,
    ];

    /// Stable identifier, matching the serde name.
    pub fn as_str(self) -> &'static str {
        match self {
            SketchPreset::GraphiteClassic => "graphite_classic",
            SketchPreset::SoftPencil => "soft_pencil",
            SketchPreset::CleanLine => "clean_line",
            SketchPreset::ColorPencil => "color_pencil",
            SketchPreset::VividColor => "vivid_color",
            SketchPreset::PastelColor => "pastel_color",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SketchPreset::GraphiteClassic => "Classic Graphite",
            SketchPreset::SoftPencil => "Soft Sketch",
            SketchPreset::CleanLine => "Clean Line",
            SketchPreset::ColorPencil => "Color Pencil",
            SketchPreset::VividColor => "Vivid Color",
            SketchPreset::PastelColor => "Pastel Pencil",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            SketchPreset::GraphiteClassic => "Close to the store classic",
            SketchPreset::SoftPencil => "Gentler on skin tones",
            SketchPreset::CleanLine => "Crisper outlines",
            SketchPreset::ColorPencil => "Natural colored pencil",
            SketchPreset::VividColor => "Richer color",
            SketchPreset::PastelColor => "Light wash on paper",
        }
    }

    pub fn style(self) -> SketchStyle {
        match self {
            SketchPreset::GraphiteClassic | SketchPreset::SoftPencil | SketchPreset::CleanLine => {
                SketchStyle::Pencil
            }
            SketchPreset::ColorPencil | SketchPreset::VividColor | SketchPreset::PastelColor => {
                SketchStyle::ColorPencil
            }
        }
    }

    pub fn default_intensity(self) -> f64 {
        match self {
            SketchPreset::GraphiteClassic => 0.82,
            SketchPreset::SoftPencil => 0.58,
            SketchPreset::CleanLine => 0.74,
            SketchPreset::ColorPencil => 0.72,
            SketchPreset::VividColor => 0.88,
            SketchPreset::PastelColor => 0.55,
        }
    }

    pub fn default_detail(self) -> f64 {
        match self {
            SketchPreset::GraphiteClassic => 0.78,
            SketchPreset::SoftPencil => 0.42,
            SketchPreset::CleanLine => 0.9,
            SketchPreset::ColorPencil => 0.66,
            SketchPreset::VividColor => 0.72,
            SketchPreset::PastelColor => 0.48,
        }
    }
}

impl FromStr for SketchPreset {
    type Err = SketchError;

    fn from_str(name: &str) -> Result<Self> {
        SketchPreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == name)
            .ok_or_else(|| SketchError::invalid(format!("unknown preset: {name}")))
    }
}

/// Pipeline parameters derived from the sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum SketchParams {
    Pencil(FilterConfig),
    ColorPencil(ColorFilterConfig),
}

/// Odd blur kernel size for a detail value in `[0, 1]`.
pub fn kernel_for_detail(detail: f64) -> i32 {
    let raw = (9.0 + detail.clamp(0.0, 1.0) * 30.0).round() as i32;
    let clamped = raw.clamp(MIN_KERNEL, MAX_KERNEL);
    if clamped % 2 == 0 {
        clamped + 1
    } else {
        clamped
    }
}

/// Blur sigma for an intensity value in `[0, 1]`.
pub fn sigma_for_intensity(intensity: f64) -> f64 {
    18.0 + intensity.clamp(0.0, 1.0) * 62.0
}

/// Color strength for an intensity value in `[0, 1]`.
pub fn color_strength_for_intensity(intensity: f64) -> f64 {
    0.68 + intensity.clamp(0.0, 1.0) * 0.22
}

/// Map slider values onto pipeline parameters.
///
/// Out-of-range sliders are clamped to `[0, 1]`; NaN or infinite values are
/// rejected.
pub fn params_for(style: SketchStyle, intensity: f64, detail: f64) -> Result<SketchParams> {
    if !intensity.is_finite() {
        return Err(SketchError::invalid(format!(
            "intensity must be a finite number, got {intensity}"
        )));
    }
    if !detail.is_finite() {
        return Err(SketchError::invalid(format!(
            "detail must be a finite number, got {detail}"
        )));
    }

    let filter = FilterConfig::new(kernel_for_detail(detail), sigma_for_intensity(intensity));
    Ok(match style {
        SketchStyle::Pencil => SketchParams::Pencil(filter),
        SketchStyle::ColorPencil => SketchParams::ColorPencil(ColorFilterConfig {
            filter,
            color_strength: color_strength_for_intensity(intensity),
        }),
    })
}

/// Render `image` in `style` using slider values.
///
/// For the color style a grayscale image is expanded to RGB first.
#[instrument(
    skip(image),
    fields(width = image.width(), height = image.height(), channels = image.channels())
)]
pub fn render(image: &PixelBuffer, style: SketchStyle, intensity: f64, detail: f64) -> Result<PixelBuffer> {
    let params = params_for(style, intensity, detail)?;
    debug!(?params, "derived sketch parameters");

    match params {
        SketchParams::Pencil(config) => grayscale_sketch_with(image, &config),
        SketchParams::ColorPencil(config) if image.is_grayscale() => {
            color_sketch_with(&image.to_rgb(), &config)
        }
        SketchParams::ColorPencil(config) => color_sketch_with(image, &config),
    }
}

/// Render `image` with a preset, optionally overriding its slider defaults.
pub fn render_preset(
    image: &PixelBuffer,
    preset: SketchPreset,
    intensity: Option<f64>,
    detail: Option<f64>,
) -> Result<PixelBuffer> {
    render(
        image,
        preset.style(),
        intensity.unwrap_or_else(|| preset.default_intensity()),
        detail.unwrap_or_else(|| preset.default_detail()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketch::{color_sketch, grayscale_sketch};

    #[test]
    fn test_kernel_for_detail() {
        assert_eq!(kernel_for_detail(0.0), 9);
        // 9 + 15 = 24 -> 25
        assert_eq!(kernel_for_detail(0.5), 25);
        assert_eq!(kernel_for_detail(1.0), 39);
        // 9 + 23.4 = 32.4 -> 32 -> 33
        assert_eq!(kernel_for_detail(0.78), 33);
        assert_eq!(kernel_for_detail(-4.0), 9);
        assert_eq!(kernel_for_detail(12.0), 39);
    }

    #[test]
    fn test_kernel_always_valid() {
        for step in 0..=100 {
            let kernel = kernel_for_detail(step as f64 / 100.0);
            assert!(kernel % 2 == 1);
            assert!((MIN_KERNEL..=MAX_KERNEL).contains(&kernel));
        }
    }

    #[test]
    fn test_sigma_and_strength_ranges() {
        assert_eq!(sigma_for_intensity(0.0), 18.0);
        assert_eq!(sigma_for_intensity(1.0), 80.0);
        assert!((color_strength_for_intensity(0.0) - 0.68).abs() < 1e-12);
        assert!((color_strength_for_intensity(1.0) - 0.90).abs() < 1e-12);
        assert_eq!(sigma_for_intensity(7.0), 80.0);
    }

    #[test]
    fn test_params_for_styles() {
        match params_for(SketchStyle::Pencil, 0.5, 0.5).unwrap() {
            SketchParams::Pencil(config) => {
                assert_eq!(config.blur_kernel, 25);
                assert_eq!(config.sigma, 49.0);
            }
            other => panic!("unexpected params {other:?}"),
        }
        match params_for(SketchStyle::ColorPencil, 0.5, 0.5).unwrap() {
            SketchParams::ColorPencil(config) => {
                assert_eq!(config.filter.blur_kernel, 25);
                assert!((config.color_strength - 0.79).abs() < 1e-12);
                assert!(config.validate().is_ok());
            }
            other => panic!("unexpected params {other:?}"),
        }
    }

    #[test]
    fn test_params_reject_non_finite() {
        assert!(params_for(SketchStyle::Pencil, f64::NAN, 0.5).is_err());
        assert!(params_for(SketchStyle::ColorPencil, 0.5, f64::INFINITY).is_err());
    }

    #[test]
    fn test_every_preset_yields_valid_params() {
        for preset in SketchPreset::ALL {
            let params =
                params_for(preset.style(), preset.default_intensity(), preset.default_detail()).unwrap();
            match params {
                SketchParams::Pencil(config) => {
                    assert_eq!(preset.style(), SketchStyle::Pencil);
                    assert!(config.validate().is_ok());
                }
                SketchParams::ColorPencil(config) => {
                    assert_eq!(preset.style(), SketchStyle::ColorPencil);
                    assert!(config.validate().is_ok());
                }
            }
            assert!(!preset.title().is_empty());
            assert!(!preset.subtitle().is_empty());
        }
    }

    #[test]
    fn test_render_matches_direct_call() {
        let image = PixelBuffer::from_raw(
            4,
            2,
            3,
            (0..24).map(|i| (i * 10) as u8).collect(),
        )
        .unwrap();

        let pencil = render(&image, SketchStyle::Pencil, 0.0, 0.0).unwrap();
        assert_eq!(pencil, grayscale_sketch(&image, 9, 18.0).unwrap());

        let color = render(&image, SketchStyle::ColorPencil, 1.0, 1.0).unwrap();
        let expected = color_sketch(&image, 39, 80.0, color_strength_for_intensity(1.0)).unwrap();
        assert_eq!(color, expected);
    }

    #[test]
    fn test_render_color_promotes_grayscale() {
        let gray = PixelBuffer::from_raw(3, 3, 1, vec![0, 50, 100, 150, 200, 250, 30, 60, 90]).unwrap();
        let result = render(&gray, SketchStyle::ColorPencil, 0.5, 0.5).unwrap();
        assert_eq!(result.channels(), 3);
        assert_eq!(result.width(), 3);
    }

    #[test]
    fn test_render_preset_uses_defaults_and_overrides() {
        let image = PixelBuffer::filled(5, 5, &[120, 90, 60]).unwrap();
        let preset = SketchPreset::GraphiteClassic;

        let defaulted = render_preset(&image, preset, None, None).unwrap();
        let explicit =
            render(&image, SketchStyle::Pencil, preset.default_intensity(), preset.default_detail()).unwrap();
        assert_eq!(defaulted, explicit);

        let overridden = render_preset(&image, SketchPreset::VividColor, Some(0.0), None).unwrap();
        assert_eq!(overridden.channels(), 3);
    }

    #[test]
    fn test_preset_from_str() {
        for preset in SketchPreset::ALL {
            assert_eq!(preset.as_str().parse::<SketchPreset>().unwrap(), preset);
        }
        let err = "charcoal".parse::<SketchPreset>().unwrap_err();
        assert_eq!(err.reason(), "unknown preset: charcoal");
    }

    #[test]
    fn test_preset_serde_names() {
        let json = serde_json::to_string(&SketchPreset::VividColor).unwrap();
        assert_eq!(json, "\"vivid_color\"");
        let preset: SketchPreset = serde_json::from_str("\"clean_line\"").unwrap();
        assert_eq!(preset, SketchPreset::CleanLine);
    }
}
