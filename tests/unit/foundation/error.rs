use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PlacementError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PlacementError::angle("x")
            .to_string()
            .contains("angle error:")
    );
    assert!(
        PlacementError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PlacementError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = PlacementError::from(err);
    assert!(matches!(err, PlacementError::Serde(_)));
}
