//! Filter building blocks for the sketch pipeline.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Grayscale8 | (H, W, 1) | u8 | Single luminance channel, 0-255 |
//! | RGB8 | (H, W, 3) | u8 | Red, green, blue, 0-255 |
//! | Plane | (H, W) | u8 | Intermediate single-channel plane |
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Pure** - Inputs are borrowed views, outputs are freshly allocated
//! - **8-bit in, 8-bit out** - Float math stays inside a filter and is
//!   rounded to nearest on the way out
//! - **Row parallel** - Rows run on rayon when the `parallel` feature is on,
//!   with byte-identical results to the serial path

pub mod core;
pub mod grayscale;
pub mod color_adjust;
pub mod blur;
pub mod blend;
