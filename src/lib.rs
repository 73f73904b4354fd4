//! Decomposed 2D placement for visual objects.
//!
//! A [`TransformAttributes`] keeps position, scale, skew, rotation and transform
//! origin as independent scalars and lazily derives the affine matrix a renderer
//! consumes. It also accepts a ready-made matrix and decomposes it back into
//! those scalars, so an edit such as "rotate by another 5°" stays well defined
//! after a matrix was pushed in.
//!
//! # Overview
//!
//! - **Attributes**: validated setters; opacity is clamped to `[0, 1]` and
//!   rotation is normalized to `[0, 2π)`. Writes that change a value mark the
//!   matrix dirty.
//! - **Compose**: [`TransformAttributes::transform`] rebuilds the matrix only
//!   when dirty and otherwise returns the cached one.
//! - **Decompose**: [`TransformAttributes::set_transform`] splits a matrix into
//!   translation, rotation, scale and skew, and caches the matrix verbatim.
//! - **Text and JSON**: angles with unit suffixes via [`parse_angle`], named
//!   property access via [`AttributeKey`], and [`TransformProps`] snapshots.
//!
//! The design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total numerics**: numeric writes never fail; NaN and infinities propagate.
//! - **Single owner**: one instance per visual object, no interior locking.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
/// Placement attributes plus the matrix and angle helpers they use.
pub mod transform;

pub use foundation::core::{Affine, Coeffs, Point};
pub use foundation::error::{PlacementError, PlacementResult};
pub use foundation::math::normalize_rotation;
pub use transform::angle::{AngleUnit, Rotation, parse_angle};
pub use transform::attributes::TransformAttributes;
pub use transform::property::AttributeKey;
pub use transform::props::TransformProps;
