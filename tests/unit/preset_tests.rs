// Builtin preset tests

use rendition::{apply_preset, optimize_url, preset_options, TransformOptions};

const SAMPLE: &str = "https://res.cloudinary.com/demo/image/upload/v1/sample.jpg";

#[test]
fn test_avatar_preset_equals_explicit_options() {
    let mut options = TransformOptions::default();
    options.width = Some(80);
    options.height = Some(80);

    assert_eq!(
        apply_preset(SAMPLE, "avatar"),
        optimize_url(SAMPLE, &options)
    );
}

#[test]
fn test_avatar_preset_segment() {
    assert_eq!(
        apply_preset(SAMPLE, "avatar"),
        "https://res.cloudinary.com/demo/image/upload/w_80,h_80,c_fill,f_webp,q_auto/v1/sample.jpg"
    );
}

#[test]
fn test_every_builtin_preset_has_dimensions() {
    for name in ["avatar", "profile-card", "thumbnail", "hero", "card", "gallery"] {
        let options = preset_options(name).expect(name);
        assert!(options.width.is_some(), "{} has no width", name);
        assert!(options.height.is_some(), "{} has no height", name);
    }
}

#[test]
fn test_legacy_camel_case_spelling_resolves() {
    assert_eq!(
        apply_preset(SAMPLE, "profileCard"),
        apply_preset(SAMPLE, "profile-card")
    );
}

#[test]
fn test_unknown_preset_returns_url_unchanged() {
    // Advisory warning only; the caller always gets a usable URL back
    assert_eq!(apply_preset(SAMPLE, "doesNotExist"), SAMPLE);
}

#[test]
fn test_preset_on_local_url_passes_through() {
    assert_eq!(
        apply_preset("/static/images/logo.png", "hero"),
        "/static/images/logo.png"
    );
}
