// URL rewriting tests
// Exercises the pass-through policy and segment insertion end to end

use rstest::rstest;

use rendition::{optimize_url, TransformOptions};

const SAMPLE: &str = "https://res.cloudinary.com/demo/image/upload/v1/sample.jpg";

#[rstest]
#[case("")]
#[case("/static/images/logo.png")]
#[case("https://example.com/images/pic.jpg")]
// Has an /upload/ marker but belongs to another host
#[case("https://example.com/files/upload/pic.jpg")]
fn test_non_media_urls_pass_through(#[case] url: &str) {
    let mut options = TransformOptions::default();
    options.width = Some(400);

    assert_eq!(optimize_url(url, &options), url);
}

#[rstest]
#[case("https://res.cloudinary.com/demo/image/sample.jpg")]
#[case("https://res.cloudinary.com/demo/raw/fetch/v1/sample.jpg")]
fn test_media_urls_without_upload_marker_pass_through(#[case] url: &str) {
    assert_eq!(optimize_url(url, &TransformOptions::default()), url);
}

#[test]
fn test_literal_example() {
    let mut options = TransformOptions::default();
    options.width = Some(200);
    options.height = Some(200);

    assert_eq!(
        optimize_url(SAMPLE, &options),
        "https://res.cloudinary.com/demo/image/upload/w_200,h_200,c_fill,f_webp,q_auto/v1/sample.jpg"
    );
}

#[test]
fn test_default_options_insert_standard_segment() {
    assert_eq!(
        optimize_url(SAMPLE, &TransformOptions::default()),
        "https://res.cloudinary.com/demo/image/upload/c_fill,f_webp,q_auto/v1/sample.jpg"
    );
}

#[test]
fn test_directive_ordering_is_fixed() {
    let mut options = TransformOptions::default();
    options.width = Some(400);
    options.height = Some(300);

    let url = optimize_url(SAMPLE, &options);
    assert!(url.contains("/upload/w_400,h_300,c_fill,f_webp,q_auto/"));
}

#[test]
fn test_double_application_inserts_two_segments() {
    // Re-applying is NOT idempotent: a second segment lands in front of
    // the first. Expected behavior, not a bug - callers keep the raw URL.
    let mut options = TransformOptions::default();
    options.width = Some(200);
    options.height = Some(200);

    let once = optimize_url(SAMPLE, &options);
    let twice = optimize_url(&once, &options);

    assert_eq!(
        twice,
        "https://res.cloudinary.com/demo/image/upload/w_200,h_200,c_fill,f_webp,q_auto/w_200,h_200,c_fill,f_webp,q_auto/v1/sample.jpg"
    );
}

#[test]
fn test_cleared_options_leave_empty_slot() {
    // Every directive cleared: the segment slot remains as a doubled slash
    assert_eq!(
        optimize_url(SAMPLE, &TransformOptions::empty()),
        "https://res.cloudinary.com/demo/image/upload//v1/sample.jpg"
    );
}

#[test]
fn test_identical_inputs_produce_identical_output() {
    let mut options = TransformOptions::default();
    options.width = Some(640);

    assert_eq!(optimize_url(SAMPLE, &options), optimize_url(SAMPLE, &options));
}
