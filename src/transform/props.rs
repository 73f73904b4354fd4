//! Serializable attribute snapshots.
//!
//! [`TransformProps`] is the JSON-facing form of [`TransformAttributes`]. Field
//! names follow the property surface (`scaleX`, `transformOriginY`, ...), every
//! field is optional and defaults to the identity placement.

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Affine, Coeffs};
use crate::foundation::error::PlacementResult;
use crate::transform::angle::Rotation;
use crate::transform::attributes::TransformAttributes;

/// Plain snapshot of every placement attribute.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TransformProps {
    /// Opacity; clamped to `[0, 1]` when applied.
    pub opacity: f64,
    /// Horizontal translation.
    pub x: f64,
    /// Vertical translation.
    pub y: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Shear coefficient.
    pub skew: f64,
    /// Radians, or text with a unit suffix such as `"90deg"`.
    pub rotation: Rotation,
    /// Pivot x.
    pub transform_origin_x: f64,
    /// Pivot y.
    pub transform_origin_y: f64,
    /// Full matrix `[a, b, c, d, e, f]`; applied last and overrides the
    /// decomposed fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Coeffs>,
}

impl Default for TransformProps {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            skew: 0.0,
            rotation: Rotation::default(),
            transform_origin_x: 0.0,
            transform_origin_y: 0.0,
            transform: None,
        }
    }
}

impl TransformProps {
    /// Parse a JSON snapshot.
    pub fn from_json_str(s: &str) -> PlacementResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON snapshot from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> PlacementResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read placement props '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> PlacementResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl TransformAttributes {
    /// Build attributes from a snapshot, validating every field.
    pub fn from_props(props: &TransformProps) -> PlacementResult<Self> {
        let mut attrs = Self::new();
        attrs.apply_props(props)?;
        Ok(attrs)
    }

    /// Write every field of `props` through the setters.
    ///
    /// The rotation is resolved first, so a bad angle leaves `self` untouched.
    pub fn apply_props(&mut self, props: &TransformProps) -> PlacementResult<()> {
        let rotation = props.rotation.to_radians()?;

        self.set_opacity(props.opacity);
        self.set_x(props.x);
        self.set_y(props.y);
        self.set_scale_x(props.scale_x);
        self.set_scale_y(props.scale_y);
        self.set_skew(props.skew);
        self.set_rotation(rotation);
        self.set_transform_origin((props.transform_origin_x, props.transform_origin_y));
        if let Some(coeffs) = props.transform {
            self.set_transform(Affine::new(coeffs));
        }
        Ok(())
    }

    /// Snapshot the current attributes. The matrix is not included.
    pub fn props(&self) -> TransformProps {
        let (ox, oy) = self.transform_origin();
        TransformProps {
            opacity: self.opacity(),
            x: self.x(),
            y: self.y(),
            scale_x: self.scale_x(),
            scale_y: self.scale_y(),
            skew: self.skew(),
            rotation: Rotation::Radians(self.rotation()),
            transform_origin_x: ox,
            transform_origin_y: oy,
            transform: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/props.rs"]
mod tests;
