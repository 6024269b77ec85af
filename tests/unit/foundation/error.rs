use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PictoplaceError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PictoplaceError::data_source("x")
            .to_string()
            .contains("data source error:")
    );
    assert!(
        PictoplaceError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(
        PictoplaceError::UnknownLocation("north".to_string()).to_string(),
        "unknown location 'north'"
    );
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = PictoplaceError::from(err);
    assert!(matches!(err, PictoplaceError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PictoplaceError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
