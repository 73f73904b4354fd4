//! Affine matrix primitive.
//!
//! Matrices are [`kurbo::Affine`] values with coefficients `[a, b, c, d, e, f]`.
//!
//! # Rotation sign
//!
//! [`rotate`] builds on [`Affine::rotate`], which maps the x axis onto
//! `(cos θ, sin θ)`: positive angles are counter-clockwise in the `(a, b, c, d)`
//! math convention (clockwise on a y-down screen). Placement attributes use the
//! same convention, so callers pass their angle through unchanged.

use crate::foundation::core::{Affine, Coeffs};

#[inline]
/// Compose two transforms so that `b` applies first, then `a`.
pub fn compose(a: Affine, b: Affine) -> Affine {
    a * b
}

#[inline]
/// Build a transform from raw `[a, b, c, d, e, f]` coefficients.
pub fn from_coeffs(coeffs: Coeffs) -> Affine {
    Affine::new(coeffs)
}

#[inline]
/// Value-copy `src` into `dst`.
pub fn copy(dst: &mut Affine, src: &Affine) {
    *dst = *src;
}

#[inline]
/// Rotate `m` in place by `angle` radians about the local origin.
///
/// The rotation applies after `m`, so the translation part is rotated as well.
pub fn rotate(m: &mut Affine, angle: f64) {
    *m = compose(Affine::rotate(angle), *m);
}

#[inline]
/// Replace the translation components of `m`.
pub fn with_translation(m: Affine, e: f64, f: f64) -> Affine {
    let [a, b, c, d, _, _] = m.as_coeffs();
    Affine::new([a, b, c, d, e, f])
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
