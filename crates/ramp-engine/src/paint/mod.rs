//! Color model and colorspace primitives shared by the gradient engine.
//!
//! Scope:
//! - color representation (straight alpha, `f32` channels)
//! - conversions to HSV / HSL / CMYK
//! - scalar and color blend primitives
//! - hex color literals
//!
//! The gradient core only consumes the function signatures in [`blend`].

pub mod blend;
pub mod color;
pub mod parse;
pub mod space;

pub use color::Color;
pub use parse::ParseError;
pub use space::{Cmyka, Colorspace, Hsla, Hsva, Rgba};
