//! Scalar and color interpolation primitives.
//!
//! Every color blend converts its inputs into the requested [`Colorspace`],
//! interpolates channel by channel and converts back. Hue channels are
//! interpolated along the shorter arc of the color wheel.

use palette::RgbHue;

use super::space::{Channels, Colorspace};
use super::Color;

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn blend2(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Catmull-Rom segment from `b` (`t = 0`) to `c` (`t = 1`).
///
/// `a` and `d` are the outer control points that shape the tangents at `b`
/// and `c`. Not clamped: the curve may overshoot `[b, c]`.
#[inline]
pub fn blend4(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * b
        + (c - a) * t
        + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
        + (3.0 * b - a - 3.0 * c + d) * t3)
}

/// Blends two colors in `space`.
pub fn blend2_color(a: Color, b: Color, t: f64, space: Colorspace) -> Color {
    let mut ch = [Channels::decompose(a, space), Channels::decompose(b, space)];
    if space.has_hue() {
        align_hues(&mut ch, &[&[1], &[0]]);
    }

    let [ca, cb] = ch;
    let mut out = ca;
    for (o, (x, y)) in out.values.iter_mut().zip(ca.values.iter().zip(cb.values.iter())) {
        *o = blend2(*x as f64, *y as f64, t) as f32;
    }
    out.compose(space)
}

/// Blends four colors in `space` along a Catmull-Rom segment from `b` to `c`.
pub fn blend4_color(a: Color, b: Color, c: Color, d: Color, t: f64, space: Colorspace) -> Color {
    let mut ch = [
        Channels::decompose(a, space),
        Channels::decompose(b, space),
        Channels::decompose(c, space),
        Channels::decompose(d, space),
    ];
    if space.has_hue() {
        // Nearest chromatic neighbour first, preferring the inner pair.
        align_hues(&mut ch, &[&[1, 2, 3], &[2, 0, 3], &[1, 3, 0], &[2, 1, 0]]);
    }

    let mut out = ch[1];
    for (i, o) in out.values.iter_mut().enumerate() {
        *o = blend4(
            ch[0].values[i] as f64,
            ch[1].values[i] as f64,
            ch[2].values[i] as f64,
            ch[3].values[i] as f64,
            t,
        ) as f32;
    }
    out.compose(space)
}

/// Prepares the hue channel of a run of control colors for interpolation.
///
/// Achromatic entries borrow the hue of the first chromatic entry listed in
/// `donors[i]`, so blending toward gray keeps the hue. Hues are then unwrapped
/// so consecutive entries differ by at most 180°; `compose` wraps the blended
/// hue back into `[0, 360)`.
fn align_hues(ch: &mut [Channels], donors: &[&[usize]]) {
    let hues: Vec<Option<f32>> = ch
        .iter()
        .map(|c| (!c.achromatic).then_some(c.values[0]))
        .collect();

    for (i, c) in ch.iter_mut().enumerate() {
        if c.achromatic {
            c.values[0] = donors[i]
                .iter()
                .find_map(|&j| hues[j])
                .unwrap_or(0.0);
        }
    }

    for i in 1..ch.len() {
        let prev = ch[i - 1].values[0];
        let delta = RgbHue::from_degrees(ch[i].values[0]) - RgbHue::from_degrees(prev);
        ch[i].values[0] = prev + delta.into_degrees();
    }
}
