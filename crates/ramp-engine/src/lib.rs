//! Ramp engine crate.
//!
//! Evaluates multi-stop color gradients: weighted stops on a normalized axis,
//! discrete / linear / cubic blending in RGB, HSV, HSL or CMYK, and pad /
//! repeat / reflect spread outside `[0, 1]`.
//!
//! ```rust
//! use ramp_engine::gradient::{Gradient, SpreadMode};
//! use ramp_engine::paint::Color;
//!
//! let mut g = Gradient::default();
//! g.set_spread(SpreadMode::Reflect);
//! assert_eq!(g.at(0.0), Color::black());
//! assert_eq!(g.at(2.0), Color::black());
//! assert_eq!(g.render(3).len(), 3);
//! ```

pub mod float;
pub mod gradient;
pub mod logging;
pub mod paint;

pub use gradient::{Gradient, GradientError, InterpolationFunction, InterpolationMode, NormalizeMode, SpreadMode, Stop};
pub use paint::{Color, Colorspace};
