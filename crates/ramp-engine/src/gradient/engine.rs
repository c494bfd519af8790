//! Color evaluation for a resolved position.
//!
//! The caller applies the spread policy first; `evaluate` only ever sees
//! positions in `[0, 1]`.

use crate::float::{fuzzy_eq, safe_div};
use crate::paint::blend::{blend2, blend2_color, blend4, blend4_color};
use crate::paint::{Color, Colorspace};

use super::mode::{InterpolationFunction, InterpolationMode};
use super::stop::{Stop, StopStore};

/// Color of the stop set at the resolved position `pos`.
///
/// - no stops: transparent
/// - one stop: its color, whatever `pos` is
/// - a position outside the stored range (end stops removed by the caller)
///   takes the color of the nearest end stop
pub(crate) fn evaluate(stops: &StopStore, mode: InterpolationMode, pos: f64) -> Color {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Color::transparent(),
    };
    if stops.len() < 2 {
        return first.color;
    }

    let Some(upper) = stops.upper_bound(pos) else {
        return last.color;
    };
    if fuzzy_eq(pos, upper.position) {
        return upper.color;
    }
    let Some(lower) = stops.before(upper.position) else {
        return upper.color;
    };

    let t = ((pos - lower.position) / (upper.position - lower.position)).clamp(0.0, 1.0);

    // Rounding can leave `pos` a hair below `lower`.
    if fuzzy_eq(pos, lower.position) {
        return lower.color;
    }

    let space = mode.colorspace;
    match mode.function {
        InterpolationFunction::Discrete => {
            if t < lower.weight { lower.color } else { upper.color }
        }
        InterpolationFunction::Linear => {
            blend2_color(lower.color, upper.color, skew(t, lower.weight), space)
        }
        InterpolationFunction::Cubic => {
            let prev = stops.before(lower.position).unwrap_or(lower);
            let next = stops.after(upper.position).unwrap_or(upper);
            cubic(prev, lower, upper, next, t, space)
        }
    }
}

/// Remaps `t` so the colorspace midpoint (`0.5`) falls at `t == weight`.
#[inline]
fn skew(t: f64, weight: f64) -> f64 {
    if t > weight {
        blend2(0.5, 1.0, safe_div(t - weight, 1.0 - weight, 1.0))
    } else {
        blend2(0.0, 0.5, safe_div(t, weight, 0.0))
    }
}

/// Weighted cubic blend across `lower..upper`.
///
/// The interval is split at `lower.weight` into two halves that meet at the
/// midpoint color `cm`. Each half runs a Catmull-Rom segment whose outer
/// control points come from the neighbouring intervals (`prev`, `next`), so
/// the ramp stays smooth across stop boundaries. Positions go through the
/// same curve first so the color parameter follows the stop spacing.
fn cubic(prev: &Stop, lower: &Stop, upper: &Stop, next: &Stop, t: f64, space: Colorspace) -> Color {
    let w = lower.weight;

    let (cb, cc) = (lower.color, upper.color);
    let ca = blend2_color(prev.color, cb, 0.5, space);
    let cd = blend2_color(next.color, cc, 0.5, space);
    let cm = blend2_color(cb, cc, 0.5, space);

    let (pb, pc) = (lower.position, upper.position);
    let pa = blend2(prev.position, pb, prev.weight);
    let pd = blend2(next.position, pc, upper.weight);
    let pm = blend2(pb, pc, w);

    if t > w {
        let s = safe_div(t - w, 1.0 - w, 1.0);
        let u = blend4(pb, pm, pc, pd, s);
        let u = safe_div(u - pm, pc - pm, s).clamp(0.0, 1.0);
        blend4_color(cb, cm, cc, cd, u, space)
    } else {
        let s = safe_div(t, w, 0.0);
        let u = blend4(pa, pb, pm, pc, s);
        let u = safe_div(u - pb, pm - pb, s).clamp(0.0, 1.0);
        blend4_color(ca, cb, cm, cc, u, space)
    }
}
