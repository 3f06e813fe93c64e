//! Delivery URL rewriting
//!
//! Inserts a transformation segment immediately after the `/upload/` path
//! marker of a media-host URL. URLs that do not look like media-host
//! delivery URLs pass through untouched, so the rendering layer can route
//! every image (remote or locally hosted) through one code path.

use crate::constants::{HOST_MARKER, UPLOAD_PATH_MARKER};
use crate::transform::options::TransformOptions;

/// Rewrite `url` with the transformation segment for `options`.
///
/// Pass-through cases, by policy rather than error:
/// - `url` is empty or does not contain the media-host domain token
/// - `url` has no `/upload/` path marker to insert after
///
/// This function never fails and performs no I/O; it sits on the image
/// rendering path where a hard failure would break display.
///
/// Not idempotent: re-applying inserts a second segment in front of the
/// first. Callers keep the original URL around if they need to re-derive
/// renditions.
///
/// # Examples
///
/// ```
/// use rendition::{optimize_url, TransformOptions};
///
/// let mut options = TransformOptions::default();
/// options.width = Some(200);
/// options.height = Some(200);
///
/// let url = optimize_url(
///     "https://res.cloudinary.com/demo/image/upload/v1/sample.jpg",
///     &options,
/// );
/// assert_eq!(
///     url,
///     "https://res.cloudinary.com/demo/image/upload/w_200,h_200,c_fill,f_webp,q_auto/v1/sample.jpg"
/// );
/// ```
pub fn optimize_url(url: &str, options: &TransformOptions) -> String {
    if url.is_empty() || !url.contains(HOST_MARKER) {
        return url.to_string();
    }

    let insert_at = match url.find(UPLOAD_PATH_MARKER) {
        Some(idx) => idx + UPLOAD_PATH_MARKER.len(),
        None => return url.to_string(),
    };

    // Keep the marker in the prefix; the segment takes over the slot
    // directly after it. An empty segment still occupies the slot.
    let (prefix, suffix) = url.split_at(insert_at);
    format!("{}{}/{}", prefix, options.segment(), suffix)
}
