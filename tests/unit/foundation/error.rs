use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BlendoverError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BlendoverError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        BlendoverError::fetch("x")
            .to_string()
            .contains("frame fetch error:")
    );
    assert!(
        BlendoverError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BlendoverError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
