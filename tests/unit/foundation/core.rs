use super::*;

#[test]
fn coeff_layout_matches_point_mapping() {
    let m = Affine::new([2.0, 0.5, 0.25, 3.0, 10.0, 20.0]);
    let [a, b, c, d, e, f]: Coeffs = m.as_coeffs();
    let p = m * Point::new(1.0, 2.0);
    assert_eq!(p.x, a * 1.0 + c * 2.0 + e);
    assert_eq!(p.y, b * 1.0 + d * 2.0 + f);
}
