use std::fmt;

/// Straight-alpha RGBA color.
///
/// Invariant:
/// - all channels are expected in `[0, 1]`; `rgb` is *not* multiplied by `a`.
///
/// Rationale:
/// - gradient stops are blended in several colorspaces (HSV, HSL, CMYK), and
///   those conversions are only meaningful on straight-alpha components.
/// - premultiplication is left to whoever composites the result
///   (see [`to_premul`](Self::to_premul)).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    ///
    /// This is the preferred constructor for colors coming from hex literals,
    /// which produce `[u8; 4]` straight-alpha RGBA.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Returns the color as straight sRGB bytes, rounding to nearest.
    #[inline]
    pub fn to_srgb_u8(self) -> [u8; 4] {
        #[inline]
        fn byte(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }

    /// Returns premultiplied `[r, g, b, a]` components for compositing.
    #[inline]
    pub fn to_premul(self) -> [f32; 4] {
        let c = self.clamped();
        [c.r * c.a, c.g * c.a, c.b * c.a, c.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to `[0, 1]`. NaN channels become 0.
    #[inline]
    pub fn clamped(self) -> Self {
        #[inline]
        fn unit(v: f32) -> f32 {
            if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
        }
        Self::new(unit(self.r), unit(self.g), unit(self.b), unit(self.a))
    }

    /// Channel-wise comparison within `eps`.
    #[inline]
    pub fn approx_eq(self, other: Color, eps: f32) -> bool {
        (self.r - other.r).abs() <= eps
            && (self.g - other.g).abs() <= eps
            && (self.b - other.b).abs() <= eps
            && (self.a - other.a).abs() <= eps
    }
}

impl fmt::Display for Color {
    /// Formats as `#rrggbbaa`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_srgb_u8();
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}
