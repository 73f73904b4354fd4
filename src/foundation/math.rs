use std::f64::consts::TAU;

/// Fold an angle in radians into `[0, 2π)`.
///
/// Negative input wraps up from `2π`. Results that round onto `2π` fold to `0`
/// and `-0.0` comes back as `+0.0`. Non-finite input propagates as NaN.
pub fn normalize_rotation(angle: f64) -> f64 {
    let r = angle % TAU;
    let r = if r < 0.0 { r + TAU } else { r };
    if r >= TAU { 0.0 } else { r + 0.0 }
}

/// Clamp to `[0, 1]`. NaN passes through unchanged.
#[inline]
pub fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Absolute-tolerance float comparison.
#[cfg(test)]
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
