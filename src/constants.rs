// Constants module - centralized default values for URL transformation
//
// This module defines all default values used throughout the codebase.
// Using constants instead of magic numbers improves maintainability
// and makes it easier to understand and modify defaults.

// =============================================================================
// URL markers
// =============================================================================

/// Domain token identifying URLs served by the media host.
///
/// URLs that do not contain this token pass through `optimize_url`
/// unchanged (callers route locally hosted images through the same path).
pub const HOST_MARKER: &str = "cloudinary.com";

/// Path marker after which the transformation segment is inserted
pub const UPLOAD_PATH_MARKER: &str = "/upload/";

// =============================================================================
// Quality bounds
// =============================================================================

/// Minimum fixed quality value
pub const QUALITY_MIN: u8 = 1;

/// Maximum fixed quality value
pub const QUALITY_MAX: u8 = 100;

// =============================================================================
// Builtin preset dimensions
// =============================================================================

/// Avatar rendition (square)
pub const AVATAR_SIZE: u32 = 80;

/// Profile card rendition (square)
pub const PROFILE_CARD_SIZE: u32 = 150;

/// Thumbnail rendition
pub const THUMBNAIL_WIDTH: u32 = 300;
pub const THUMBNAIL_HEIGHT: u32 = 200;

/// Hero banner rendition
pub const HERO_WIDTH: u32 = 1920;
pub const HERO_HEIGHT: u32 = 600;

/// Content card rendition
pub const CARD_WIDTH: u32 = 400;
pub const CARD_HEIGHT: u32 = 300;

/// Gallery rendition
pub const GALLERY_WIDTH: u32 = 800;
pub const GALLERY_HEIGHT: u32 = 600;
