// Preset registry tests
// Covers file loading, builtin merging and the unknown-name policy

use std::io::Write;

use rendition::transform::registry::RegistryError;
use rendition::PresetRegistry;

const SAMPLE: &str = "https://res.cloudinary.com/demo/image/upload/v1/sample.jpg";

#[test]
fn test_default_registry_applies_builtin_preset() {
    let registry = PresetRegistry::default();
    assert_eq!(
        registry.apply(SAMPLE, "thumbnail"),
        "https://res.cloudinary.com/demo/image/upload/w_300,h_200,c_fill,f_webp,q_auto/v1/sample.jpg"
    );
}

#[test]
fn test_registry_names_include_builtins() {
    let registry = PresetRegistry::default();
    let names: Vec<&str> = registry.names().collect();

    assert!(names.contains(&"avatar"));
    assert!(names.contains(&"gallery"));
}

#[test]
fn test_yaml_file_merges_over_builtins() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
presets:
  og-image:
    width: 1200
    height: 630
    format: jpeg
    quality: "80"
"#
    )
    .unwrap();

    let registry = PresetRegistry::from_file(file.path()).unwrap();

    // User preset resolves
    assert_eq!(
        registry.apply(SAMPLE, "og-image"),
        "https://res.cloudinary.com/demo/image/upload/w_1200,h_630,c_fill,f_jpeg,q_80/v1/sample.jpg"
    );
    // Builtins still present
    assert!(registry.get("avatar").is_some());
}

#[test]
fn test_json_file_is_parsed_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("presets.json");
    std::fs::write(
        &path,
        r#"{"presets": {"strip": {"width": 320, "height": 50, "crop": "crop"}}}"#,
    )
    .unwrap();

    let registry = PresetRegistry::from_file(&path).unwrap();
    let strip = registry.get("strip").unwrap();

    assert_eq!(strip.segment(), "w_320,h_50,c_crop,f_webp,q_auto");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = PresetRegistry::from_file("/nonexistent/presets.yaml").unwrap_err();
    assert!(matches!(err, RegistryError::Io(_)));
}

#[test]
fn test_malformed_yaml_is_rejected() {
    let err = PresetRegistry::from_yaml_str("presets: [not, a, map]").unwrap_err();
    assert!(matches!(err, RegistryError::Yaml(_)));
}

#[test]
fn test_unknown_crop_token_names_offending_preset() {
    let yaml = r#"
presets:
  bad:
    crop: diagonal
"#;
    let err = PresetRegistry::from_yaml_str(yaml).unwrap_err();
    assert!(err.to_string().contains("crop") || err.to_string().contains("bad"));
}

#[test]
fn test_unknown_name_passes_url_through() {
    let registry = PresetRegistry::default();
    assert_eq!(registry.apply(SAMPLE, "missing"), SAMPLE);
}
