use super::*;
use std::f64::consts::TAU;

#[test]
fn names_round_trip_through_from_str() {
    for key in AttributeKey::ALL {
        assert_eq!(key.as_str().parse::<AttributeKey>().unwrap(), key);
        assert_eq!(key.to_string(), key.as_str());
    }
}

#[test]
fn snake_case_aliases_parse() {
    assert_eq!(
        "scale_x".parse::<AttributeKey>().unwrap(),
        AttributeKey::ScaleX
    );
    assert_eq!(
        " transform_origin_y ".parse::<AttributeKey>().unwrap(),
        AttributeKey::TransformOriginY
    );
}

#[test]
fn unknown_name_is_validation_error() {
    let err = "width".parse::<AttributeKey>().unwrap_err();
    assert!(matches!(err, PlacementError::Validation(_)));
    assert!(err.to_string().contains("width"));
}

#[test]
fn set_dispatches_through_validating_setters() {
    let mut t = TransformAttributes::new();
    assert_eq!(t.set(AttributeKey::Opacity, 3.0), 1.0);
    assert!(!t.is_dirty());

    let r = t.set(AttributeKey::Rotation, -1.0);
    assert!((r - (TAU - 1.0)).abs() < 1e-12);
    assert!(t.is_dirty());

    t.set(AttributeKey::ScaleX, 2.0);
    assert_eq!(t.get(AttributeKey::Scale), None);
    t.set(AttributeKey::Scale, 4.0);
    assert_eq!(t.get(AttributeKey::Scale), Some(4.0));
    assert_eq!(t.get(AttributeKey::ScaleY), Some(4.0));
}

#[test]
fn get_reads_every_key() {
    let mut t = TransformAttributes::new();
    for (i, key) in AttributeKey::ALL.into_iter().enumerate() {
        if key == AttributeKey::Opacity || key == AttributeKey::Scale {
            continue;
        }
        let v = 0.1 * (i as f64 + 1.0);
        t.set(key, v);
        assert_eq!(t.get(key), Some(v), "{key}");
    }
}

#[test]
fn only_opacity_leaves_matrix_alone() {
    for key in AttributeKey::ALL {
        let mut t = TransformAttributes::new();
        t.set(key, 0.5);
        assert_eq!(t.is_dirty(), key != AttributeKey::Opacity, "{key}");
    }
}
