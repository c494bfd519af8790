use std::fmt;
use std::str::FromStr;

use crate::paint::{Colorspace, ParseError};

/// Shape of the blend between two neighbouring stops.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum InterpolationFunction {
    /// Hard step at the lower stop's weight.
    Discrete,
    /// Weighted linear blend.
    #[default]
    Linear,
    /// Weighted Catmull-Rom blend through the neighbouring stops.
    Cubic,
}

impl InterpolationFunction {
    pub const ALL: [InterpolationFunction; 3] = [
        InterpolationFunction::Discrete,
        InterpolationFunction::Linear,
        InterpolationFunction::Cubic,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            InterpolationFunction::Discrete => "discrete",
            InterpolationFunction::Linear => "linear",
            InterpolationFunction::Cubic => "cubic",
        }
    }
}

/// Blend function and colorspace, kept as two independent fields.
///
/// [`bits`](Self::bits) / [`from_bits`](Self::from_bits) provide the packed
/// single-integer form for formats that store the mode as one flag word:
///
/// | bits   | meaning  |
/// |--------|----------|
/// | `0x00` | linear   |
/// | `0x01` | discrete |
/// | `0x02` | cubic    |
/// | `0x00` | rgb      |
/// | `0x10` | hsv      |
/// | `0x20` | hsl      |
/// | `0x30` | cmyk     |
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct InterpolationMode {
    pub function: InterpolationFunction,
    pub colorspace: Colorspace,
}

impl InterpolationMode {
    pub const FUNCTION_MASK: u32 = 0x0f;
    pub const COLORSPACE_MASK: u32 = 0xf0;

    #[inline]
    pub const fn new(function: InterpolationFunction, colorspace: Colorspace) -> Self {
        Self { function, colorspace }
    }

    pub const fn bits(self) -> u32 {
        let function = match self.function {
            InterpolationFunction::Linear => 0x00,
            InterpolationFunction::Discrete => 0x01,
            InterpolationFunction::Cubic => 0x02,
        };
        let colorspace = match self.colorspace {
            Colorspace::Rgb => 0x00,
            Colorspace::Hsv => 0x10,
            Colorspace::Hsl => 0x20,
            Colorspace::Cmyk => 0x30,
        };
        function | colorspace
    }

    /// Decodes a packed mode. Unknown or extra bits yield `None`.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !(Self::FUNCTION_MASK | Self::COLORSPACE_MASK) != 0 {
            return None;
        }
        let function = match bits & Self::FUNCTION_MASK {
            0x00 => InterpolationFunction::Linear,
            0x01 => InterpolationFunction::Discrete,
            0x02 => InterpolationFunction::Cubic,
            _ => return None,
        };
        let colorspace = match bits & Self::COLORSPACE_MASK {
            0x00 => Colorspace::Rgb,
            0x10 => Colorspace::Hsv,
            0x20 => Colorspace::Hsl,
            0x30 => Colorspace::Cmyk,
            _ => return None,
        };
        Some(Self { function, colorspace })
    }
}

impl From<InterpolationFunction> for InterpolationMode {
    fn from(function: InterpolationFunction) -> Self {
        Self { function, colorspace: Colorspace::default() }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.function.name(), self.colorspace)
    }
}

impl FromStr for InterpolationMode {
    type Err = ParseError;

    /// Accepts `function` or `function-colorspace`, e.g. `cubic-hsv`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (function_src, space_src) = match s.split_once('-') {
            Some((f, c)) => (f, Some(c)),
            None => (s, None),
        };
        let function = InterpolationFunction::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(function_src))
            .ok_or_else(|| ParseError::new(format!("unknown interpolation function '{function_src}'"), 1))?;
        let colorspace = match space_src {
            Some(c) => c.parse().map_err(|e: ParseError| ParseError {
                column: function_src.len() + 2,
                ..e
            })?,
            None => Colorspace::default(),
        };
        Ok(Self { function, colorspace })
    }
}
