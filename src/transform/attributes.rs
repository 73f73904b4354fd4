//! Decomposed placement attributes with a lazily derived affine matrix.
//!
//! A [`TransformAttributes`] holds position, scale, skew, rotation and transform
//! origin as plain scalars. The equivalent [`Affine`] is derived on demand and
//! cached until an attribute changes. A ready-made matrix can be pushed in with
//! [`TransformAttributes::set_transform`], which decomposes it back into the
//! scalars so that incremental edits keep working afterwards.
//!
//! # Matrix layout
//!
//! The derived matrix is, in order of application to a point:
//!
//! 1. translate by `-origin` (scaled),
//! 2. scale by `(scale_x, scale_y)` with `skew` shearing x by y,
//! 3. rotate by `rotation` about the local origin,
//! 4. translate by `origin + (x, y)`.
//!
//! # Cache contract
//!
//! [`TransformAttributes::transform`] returns the cached matrix by value. The
//! cache slot is reused in place on every recomputation; callers own their copy.

use crate::foundation::core::{Affine, Coeffs};
use crate::foundation::error::PlacementResult;
use crate::foundation::math::{clamp_unit, normalize_rotation};
use crate::transform::affine;
use crate::transform::angle::{Rotation, parse_angle};

/// Placement state of one visual object.
///
/// Equality compares the attributes only, not the cache or its counters.
#[derive(Clone, Debug)]
pub struct TransformAttributes {
    opacity: f64,
    scale_x: f64,
    scale_y: f64,
    skew: f64,
    rotation: f64,
    origin_x: f64,
    origin_y: f64,
    x: f64,
    y: f64,
    // Valid iff `!dirty`.
    transform: Option<Affine>,
    dirty: bool,
    recomputes: u64,
}

impl Default for TransformAttributes {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale_x: 1.0,
            scale_y: 1.0,
            skew: 0.0,
            rotation: 0.0,
            origin_x: 0.0,
            origin_y: 0.0,
            x: 0.0,
            y: 0.0,
            transform: None,
            dirty: false,
            recomputes: 0,
        }
    }
}

impl PartialEq for TransformAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.opacity == other.opacity
            && self.scale_x == other.scale_x
            && self.scale_y == other.scale_y
            && self.skew == other.skew
            && self.rotation == other.rotation
            && self.origin_x == other.origin_x
            && self.origin_y == other.origin_y
            && self.x == other.x
            && self.y == other.y
    }
}

impl TransformAttributes {
    /// Identity placement: full opacity, unit scale, everything else zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn mark(&mut self, changed: bool) {
        self.dirty |= changed;
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Store `v` clamped to `[0, 1]` and return it. Does not touch the matrix.
    pub fn set_opacity(&mut self, v: f64) -> f64 {
        self.opacity = clamp_unit(v);
        self.opacity
    }

    /// Horizontal scale factor.
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Set the horizontal scale factor.
    pub fn set_scale_x(&mut self, v: f64) -> f64 {
        self.mark(v != self.scale_x);
        self.scale_x = v;
        v
    }

    /// Vertical scale factor.
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Set the vertical scale factor.
    pub fn set_scale_y(&mut self, v: f64) -> f64 {
        self.mark(v != self.scale_y);
        self.scale_y = v;
        v
    }

    /// The uniform scale, or `None` when `scale_x != scale_y`.
    ///
    /// `None` means no single scale value exists; it is not an error.
    pub fn scale(&self) -> Option<f64> {
        (self.scale_x == self.scale_y).then_some(self.scale_x)
    }

    /// Set both scale factors to `v`.
    pub fn set_scale(&mut self, v: f64) -> f64 {
        self.mark(v != self.scale_x || v != self.scale_y);
        self.scale_x = v;
        self.scale_y = v;
        v
    }

    /// Shear coefficient of x relative to y.
    pub fn skew(&self) -> f64 {
        self.skew
    }

    /// Set the raw shear coefficient (not clamped).
    pub fn set_skew(&mut self, v: f64) -> f64 {
        self.mark(v != self.skew);
        self.skew = v;
        v
    }

    /// Rotation in radians, always in `[0, 2π)`.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Set the rotation in radians and return the normalized stored value.
    ///
    /// The change test runs on the raw input, so writing `r + 2π` over `r`
    /// still schedules a recomputation.
    pub fn set_rotation(&mut self, radians: f64) -> f64 {
        self.mark(radians != self.rotation);
        self.rotation = normalize_rotation(radians);
        self.rotation
    }

    /// Set the rotation from text such as `"45deg"` or `"0.25turn"`.
    ///
    /// On a parse error nothing is modified.
    pub fn set_rotation_str(&mut self, text: &str) -> PlacementResult<f64> {
        let radians = parse_angle(text)?;
        Ok(self.set_rotation(radians))
    }

    /// Set the rotation from either form of [`Rotation`].
    pub fn set_rotation_value(&mut self, value: &Rotation) -> PlacementResult<f64> {
        let radians = value.to_radians()?;
        Ok(self.set_rotation(radians))
    }

    /// Horizontal translation.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Set the horizontal translation.
    pub fn set_x(&mut self, v: f64) -> f64 {
        self.mark(v != self.x);
        self.x = v;
        v
    }

    /// Vertical translation.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Set the vertical translation.
    pub fn set_y(&mut self, v: f64) -> f64 {
        self.mark(v != self.y);
        self.y = v;
        v
    }

    /// Pivot x in local coordinates.
    pub fn transform_origin_x(&self) -> f64 {
        self.origin_x
    }

    /// Move the pivot x.
    ///
    /// No compensating translation is applied, so the apparent position shifts
    /// whenever scale or rotation are not identity.
    pub fn set_transform_origin_x(&mut self, v: f64) -> f64 {
        self.mark(v != self.origin_x);
        self.origin_x = v;
        v
    }

    /// Pivot y in local coordinates.
    pub fn transform_origin_y(&self) -> f64 {
        self.origin_y
    }

    /// Move the pivot y. See [`Self::set_transform_origin_x`].
    pub fn set_transform_origin_y(&mut self, v: f64) -> f64 {
        self.mark(v != self.origin_y);
        self.origin_y = v;
        v
    }

    /// Pivot as `(x, y)`.
    pub fn transform_origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    /// Move both pivot components.
    pub fn set_transform_origin(&mut self, origin: (f64, f64)) -> (f64, f64) {
        let (ox, oy) = origin;
        self.mark(ox != self.origin_x || oy != self.origin_y);
        self.origin_x = ox;
        self.origin_y = oy;
        origin
    }

    /// Whether the cached matrix is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of times the matrix has been rebuilt from the attributes.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// The raw cache slot, without recomputing. `None` until a matrix was
    /// first requested or pushed in.
    pub fn cached_transform(&self) -> Option<Affine> {
        self.transform
    }

    /// The affine matrix for the current attributes.
    ///
    /// Rebuilds only when an attribute changed since the last call.
    pub fn transform(&mut self) -> Affine {
        if !self.dirty {
            // A never-touched instance is the identity.
            return *self.transform.get_or_insert(Affine::IDENTITY);
        }

        let (ox, oy) = (self.origin_x, self.origin_y);
        let (sx, sy) = (self.scale_x, self.scale_y);

        let slot = self.transform.get_or_insert(Affine::IDENTITY);
        *slot = affine::from_coeffs([sx, 0.0, self.skew * sx, sy, -ox * sx, -oy * sy]);
        if self.rotation != 0.0 {
            affine::rotate(slot, self.rotation);
        }
        let [_, _, _, _, e, f] = slot.as_coeffs();
        *slot = affine::with_translation(*slot, e + self.x + ox, f + self.y + oy);

        let m = *slot;
        self.dirty = false;
        self.recomputes += 1;
        tracing::trace!(
            recomputes = self.recomputes,
            coeffs = ?m.as_coeffs(),
            "recomputed transform"
        );
        m
    }

    /// Decompose `m` into the placement attributes and cache `m` verbatim.
    ///
    /// Rotation and skew are entangled in a general affine matrix. The two
    /// candidate angles `atan2(b, a)` and `-atan2(c, d)` are computed and the
    /// larger one wins; the linear part is then un-rotated to read back scale
    /// and skew. A matrix with a zero x scale decomposes to `skew = 0`.
    ///
    /// Opacity and transform origin are left untouched. Until the next
    /// attribute change, [`Self::transform`] returns `m` bit for bit.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn set_transform(&mut self, m: Affine) -> Affine {
        let mut scratch = m;
        let [a, b, c, d, e, f]: Coeffs = scratch.as_coeffs();

        self.x = e;
        self.y = f;
        scratch = affine::with_translation(scratch, 0.0, 0.0);

        let a1 = b.atan2(a);
        let a2 = -c.atan2(d);
        let angle = normalize_rotation(if a1 > a2 { a1 } else { a2 });
        self.rotation = angle;
        affine::rotate(&mut scratch, -angle);

        let [sx, _, shear, sy, _, _] = scratch.as_coeffs();
        self.scale_x = sx;
        self.scale_y = sy;
        self.skew = if sx == 0.0 {
            tracing::debug!(?m, "decomposed matrix has zero x scale; skew set to 0");
            0.0
        } else {
            shear / sx
        };

        let slot = self.transform.get_or_insert(Affine::IDENTITY);
        affine::copy(slot, &m);
        self.dirty = false;
        m
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/attributes.rs"]
mod tests;
