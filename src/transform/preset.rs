//! Named rendition presets
//!
//! A static, process-wide table of fixed option sets for the renditions
//! the application requests most often. The table is immutable after
//! process start; any number of threads may read it concurrently.

use tracing::warn;

use crate::constants::{
    AVATAR_SIZE, CARD_HEIGHT, CARD_WIDTH, GALLERY_HEIGHT, GALLERY_WIDTH, HERO_HEIGHT, HERO_WIDTH,
    PROFILE_CARD_SIZE, THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH,
};
use crate::transform::options::TransformOptions;
use crate::transform::url::optimize_url;

/// Builtin preset table, in lookup order
const BUILTIN_PRESETS: &[(&str, TransformOptions)] = &[
    ("avatar", TransformOptions::fixed(AVATAR_SIZE, AVATAR_SIZE)),
    (
        "profile-card",
        TransformOptions::fixed(PROFILE_CARD_SIZE, PROFILE_CARD_SIZE),
    ),
    (
        "thumbnail",
        TransformOptions::fixed(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT),
    ),
    ("hero", TransformOptions::fixed(HERO_WIDTH, HERO_HEIGHT)),
    ("card", TransformOptions::fixed(CARD_WIDTH, CARD_HEIGHT)),
    (
        "gallery",
        TransformOptions::fixed(GALLERY_WIDTH, GALLERY_HEIGHT),
    ),
];

/// Map legacy camelCase spellings onto the canonical kebab-case names.
///
/// Call sites migrated from the JavaScript helper still pass
/// "profileCard"; both spellings resolve to the same entry.
pub(crate) fn canonical_name(name: &str) -> &str {
    match name {
        "profileCard" => "profile-card",
        other => other,
    }
}

/// Look up a builtin preset by name
pub fn preset_options(name: &str) -> Option<&'static TransformOptions> {
    let canonical = canonical_name(name);
    BUILTIN_PRESETS
        .iter()
        .find(|(entry, _)| *entry == canonical)
        .map(|(_, options)| options)
}

/// Iterate the builtin table, in table order
pub(crate) fn builtin_presets() -> impl Iterator<Item = (&'static str, &'static TransformOptions)> {
    BUILTIN_PRESETS.iter().map(|(name, options)| (*name, options))
}

/// Apply a named builtin preset to `url`.
///
/// Unknown preset names emit a single warning and leave the URL
/// untouched: a typo'd name must not break image display.
///
/// # Examples
///
/// ```
/// use rendition::apply_preset;
///
/// let url = apply_preset(
///     "https://res.cloudinary.com/demo/image/upload/v1/sample.jpg",
///     "avatar",
/// );
/// assert_eq!(
///     url,
///     "https://res.cloudinary.com/demo/image/upload/w_80,h_80,c_fill,f_webp,q_auto/v1/sample.jpg"
/// );
/// ```
pub fn apply_preset(url: &str, name: &str) -> String {
    match preset_options(name) {
        Some(options) => optimize_url(url, options),
        None => {
            warn!(preset = name, "unknown rendition preset, returning URL unchanged");
            url.to_string()
        }
    }
}
