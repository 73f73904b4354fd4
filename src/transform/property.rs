//! Name-based property access for host animation and scripting layers.

use std::str::FromStr;

use crate::foundation::error::PlacementError;
use crate::transform::attributes::TransformAttributes;

/// Scalar placement properties addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeKey {
    /// `opacity`
    Opacity,
    /// `x`
    X,
    /// `y`
    Y,
    /// `scaleX`
    ScaleX,
    /// `scaleY`
    ScaleY,
    /// `scale` (both axes)
    Scale,
    /// `skew`
    Skew,
    /// `rotation`, in radians
    Rotation,
    /// `transformOriginX`
    TransformOriginX,
    /// `transformOriginY`
    TransformOriginY,
}

impl AttributeKey {
    /// Every key, in declaration order.
    pub const ALL: [AttributeKey; 10] = [
        Self::Opacity,
        Self::X,
        Self::Y,
        Self::ScaleX,
        Self::ScaleY,
        Self::Scale,
        Self::Skew,
        Self::Rotation,
        Self::TransformOriginX,
        Self::TransformOriginY,
    ];

    /// Property name as exposed to hosts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::X => "x",
            Self::Y => "y",
            Self::ScaleX => "scaleX",
            Self::ScaleY => "scaleY",
            Self::Scale => "scale",
            Self::Skew => "skew",
            Self::Rotation => "rotation",
            Self::TransformOriginX => "transformOriginX",
            Self::TransformOriginY => "transformOriginY",
        }
    }
}

impl FromStr for AttributeKey {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim() {
            "opacity" => Self::Opacity,
            "x" => Self::X,
            "y" => Self::Y,
            "scaleX" | "scale_x" => Self::ScaleX,
            "scaleY" | "scale_y" => Self::ScaleY,
            "scale" => Self::Scale,
            "skew" => Self::Skew,
            "rotation" => Self::Rotation,
            "transformOriginX" | "transform_origin_x" => Self::TransformOriginX,
            "transformOriginY" | "transform_origin_y" => Self::TransformOriginY,
            other => {
                return Err(PlacementError::validation(format!(
                    "unknown attribute '{other}'"
                )));
            }
        };
        Ok(key)
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransformAttributes {
    /// Read a property by key. `None` only for a non-uniform `scale`.
    pub fn get(&self, key: AttributeKey) -> Option<f64> {
        let v = match key {
            AttributeKey::Opacity => self.opacity(),
            AttributeKey::X => self.x(),
            AttributeKey::Y => self.y(),
            AttributeKey::ScaleX => self.scale_x(),
            AttributeKey::ScaleY => self.scale_y(),
            AttributeKey::Scale => return self.scale(),
            AttributeKey::Skew => self.skew(),
            AttributeKey::Rotation => self.rotation(),
            AttributeKey::TransformOriginX => self.transform_origin_x(),
            AttributeKey::TransformOriginY => self.transform_origin_y(),
        };
        Some(v)
    }

    /// Write a property by key through its validating setter; returns the
    /// stored value.
    pub fn set(&mut self, key: AttributeKey, v: f64) -> f64 {
        match key {
            AttributeKey::Opacity => self.set_opacity(v),
            AttributeKey::X => self.set_x(v),
            AttributeKey::Y => self.set_y(v),
            AttributeKey::ScaleX => self.set_scale_x(v),
            AttributeKey::ScaleY => self.set_scale_y(v),
            AttributeKey::Scale => self.set_scale(v),
            AttributeKey::Skew => self.set_skew(v),
            AttributeKey::Rotation => self.set_rotation(v),
            AttributeKey::TransformOriginX => self.set_transform_origin_x(v),
            AttributeKey::TransformOriginY => self.set_transform_origin_y(v),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/property.rs"]
mod tests;
