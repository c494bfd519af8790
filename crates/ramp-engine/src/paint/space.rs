use std::fmt;
use std::str::FromStr;

use palette::FromColor;
use palette::encoding;

use super::Color;
use super::parse::ParseError;

/// Component space in which color blending arithmetic is performed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Colorspace {
    #[default]
    Rgb,
    Hsv,
    Hsl,
    Cmyk,
}

impl Colorspace {
    pub const ALL: [Colorspace; 4] = [
        Colorspace::Rgb,
        Colorspace::Hsv,
        Colorspace::Hsl,
        Colorspace::Cmyk,
    ];

    /// Whether the first channel is an angular hue.
    #[inline]
    pub const fn has_hue(self) -> bool {
        matches!(self, Colorspace::Hsv | Colorspace::Hsl)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Colorspace::Rgb => "rgb",
            Colorspace::Hsv => "hsv",
            Colorspace::Hsl => "hsl",
            Colorspace::Cmyk => "cmyk",
        }
    }
}

impl fmt::Display for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colorspace {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colorspace::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::new(format!("unknown colorspace '{s}'"), 1))
    }
}

// ── component types ───────────────────────────────────────────────────────

// `palette` aliases in the sRGB encoding, `f32` throughout.
pub type Rgba = palette::rgb::Rgba<encoding::Srgb, f32>;
pub type Hsva = palette::hsv::Hsva<encoding::Srgb, f32>;
pub type Hsla = palette::hsl::Hsla<encoding::Srgb, f32>;

/// Subtractive cyan, magenta, yellow, key (black), plus alpha.
///
/// Naive device CMYK without a color profile.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Cmyka {
    pub c: f32,
    pub m: f32,
    pub y: f32,
    pub k: f32,
    pub a: f32,
}

impl Color {
    /// Clamped `palette` view of this color.
    #[inline]
    pub fn to_rgba(self) -> Rgba {
        let Color { r, g, b, a } = self.clamped();
        Rgba::new(r, g, b, a)
    }

    #[inline]
    pub fn from_rgba(rgba: Rgba) -> Self {
        Color::new(rgba.red, rgba.green, rgba.blue, rgba.alpha).clamped()
    }

    /// Hue in degrees, `[0, 360)` via `hue.into_positive_degrees()`.
    pub fn to_hsva(self) -> Hsva {
        Hsva::from_color(self.to_rgba())
    }

    pub fn from_hsva(hsva: Hsva) -> Self {
        Self::from_rgba(Rgba::from_color(hsva))
    }

    pub fn to_hsla(self) -> Hsla {
        Hsla::from_color(self.to_rgba())
    }

    pub fn from_hsla(hsla: Hsla) -> Self {
        Self::from_rgba(Rgba::from_color(hsla))
    }
}

impl From<Color> for Cmyka {
    fn from(color: Color) -> Self {
        let Color { r, g, b, a } = color.clamped();
        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            return Self { c: 0.0, m: 0.0, y: 0.0, k: 1.0, a };
        }
        let inv = 1.0 / (1.0 - k);
        Self {
            c: (1.0 - r - k) * inv,
            m: (1.0 - g - k) * inv,
            y: (1.0 - b - k) * inv,
            k,
            a,
        }
    }
}

impl From<Cmyka> for Color {
    fn from(cmyk: Cmyka) -> Self {
        let k = cmyk.k.clamp(0.0, 1.0);
        Color::new(
            (1.0 - cmyk.c.clamp(0.0, 1.0)) * (1.0 - k),
            (1.0 - cmyk.m.clamp(0.0, 1.0)) * (1.0 - k),
            (1.0 - cmyk.y.clamp(0.0, 1.0)) * (1.0 - k),
            cmyk.a,
        )
        .clamped()
    }
}

// ── flat channel view used by the blend primitives ────────────────────────

/// A color decomposed into the channels of one colorspace.
///
/// Layout: `[c0, c1, c2, c3, alpha]`. Three-channel spaces leave `c3` at 0.
/// For hue-bearing spaces `c0` is the hue in degrees and `achromatic` marks
/// colors whose hue carries no information.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Channels {
    pub values: [f32; 5],
    pub achromatic: bool,
}

impl Channels {
    pub fn decompose(color: Color, space: Colorspace) -> Self {
        let (values, achromatic) = match space {
            Colorspace::Rgb => ([color.r, color.g, color.b, 0.0, color.a], false),
            Colorspace::Hsv => {
                let c = color.to_hsva();
                let h = c.hue.into_positive_degrees();
                ([h, c.saturation, c.value, 0.0, c.alpha], c.saturation <= 0.0)
            }
            Colorspace::Hsl => {
                let c = color.to_hsla();
                let h = c.hue.into_positive_degrees();
                ([h, c.saturation, c.lightness, 0.0, c.alpha], c.saturation <= 0.0)
            }
            Colorspace::Cmyk => {
                let Cmyka { c, m, y, k, a } = color.into();
                ([c, m, y, k, a], false)
            }
        };
        Self { values, achromatic }
    }

    pub fn compose(self, space: Colorspace) -> Color {
        let [c0, c1, c2, c3, a] = self.values;
        let a = a.clamp(0.0, 1.0);
        match space {
            Colorspace::Rgb => Color::new(c0, c1, c2, a).clamped(),
            Colorspace::Hsv => {
                let (s, v) = (c1.clamp(0.0, 1.0), c2.clamp(0.0, 1.0));
                Color::from_hsva(Hsva::new(c0.rem_euclid(360.0), s, v, a))
            }
            Colorspace::Hsl => {
                let (s, l) = (c1.clamp(0.0, 1.0), c2.clamp(0.0, 1.0));
                Color::from_hsla(Hsla::new(c0.rem_euclid(360.0), s, l, a))
            }
            Colorspace::Cmyk => Cmyka { c: c0, m: c1, y: c2, k: c3, a }.into(),
        }
    }
}
