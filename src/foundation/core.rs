pub use kurbo::{Affine, Point};

/// Raw affine coefficients `[a, b, c, d, e, f]`.
///
/// The map is `(x, y) -> (a*x + c*y + e, b*x + d*y + f)`, which is the layout
/// of [`Affine::as_coeffs`].
pub type Coeffs = [f64; 6];

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
