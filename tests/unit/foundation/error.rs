use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TrailError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(TrailError::surface("x").to_string().contains("surface error:"));
    assert!(TrailError::config("x").to_string().contains("config error:"));
    assert!(TrailError::script("x").to_string().contains("script error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TrailError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
