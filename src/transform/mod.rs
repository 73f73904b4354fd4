//! Placement attributes and the matrix and angle primitives they build on.

pub mod affine;
pub mod angle;
pub mod attributes;
pub mod property;
pub mod props;
