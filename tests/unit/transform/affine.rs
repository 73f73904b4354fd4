use super::*;
use crate::foundation::core::Point;
use crate::foundation::math::approx_eq;
use std::f64::consts::FRAC_PI_2;

fn assert_coeffs_close(m: Affine, expected: Coeffs) {
    for (got, want) in m.as_coeffs().into_iter().zip(expected) {
        assert!(approx_eq(got, want, 1e-12), "{m:?} != {expected:?}");
    }
}

#[test]
fn rotate_is_counter_clockwise_in_math_convention() {
    let mut m = Affine::IDENTITY;
    rotate(&mut m, FRAC_PI_2);
    assert_coeffs_close(m, [0.0, 1.0, -1.0, 0.0, 0.0, 0.0]);

    let p = m * Point::new(1.0, 0.0);
    assert!(approx_eq(p.x, 0.0, 1e-12));
    assert!(approx_eq(p.y, 1.0, 1e-12));
}

#[test]
fn rotate_carries_translation() {
    let mut m = from_coeffs([1.0, 0.0, 0.0, 1.0, 10.0, 0.0]);
    rotate(&mut m, FRAC_PI_2);
    assert_coeffs_close(m, [0.0, 1.0, -1.0, 0.0, 0.0, 10.0]);
}

#[test]
fn rotate_then_inverse_rotate_restores_linear_part() {
    let mut m = from_coeffs([2.0, 0.0, 0.6, 3.0, 0.0, 0.0]);
    rotate(&mut m, 0.7);
    rotate(&mut m, -0.7);
    assert_coeffs_close(m, [2.0, 0.0, 0.6, 3.0, 0.0, 0.0]);
}

#[test]
fn copy_is_a_value_copy() {
    let src = from_coeffs([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let mut dst = Affine::IDENTITY;
    copy(&mut dst, &src);
    assert_eq!(dst, src);

    rotate(&mut dst, 1.0);
    assert_eq!(src.as_coeffs(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn with_translation_keeps_linear_part() {
    let m = with_translation(from_coeffs([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), -1.0, -2.0);
    assert_eq!(m.as_coeffs(), [1.0, 2.0, 3.0, 4.0, -1.0, -2.0]);
}

#[test]
fn compose_applies_right_operand_first() {
    let s = Affine::scale(2.0);
    let t = Affine::translate((1.0, 0.0));
    let p = compose(t, s) * Point::new(1.0, 1.0);
    assert_eq!(p, Point::new(3.0, 2.0));
}
