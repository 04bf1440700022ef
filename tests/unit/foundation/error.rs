use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VitalityError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(VitalityError::render("x").to_string().contains("render error:"));
    assert!(
        VitalityError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VitalityError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
