//! Floating point helpers for position arithmetic.

/// Relative tolerance used by [`fuzzy_eq`].
pub const FUZZY_EPSILON: f64 = 1e-12;

/// Tolerance-based equality for stop positions.
///
/// Relative to the smaller magnitude, with an absolute floor of
/// [`FUZZY_EPSILON`] so values near zero still compare equal to zero.
/// Keyed stop removal deliberately does *not* use this.
#[inline]
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= FUZZY_EPSILON * a.abs().min(b.abs()).max(1.0)
}

/// `num / denom`, or `default` when `denom` is not strictly positive.
#[inline(always)]
pub fn safe_div(num: f64, denom: f64, default: f64) -> f64 {
    if denom > 0.0 {
        num / denom
    } else {
        default
    }
}
