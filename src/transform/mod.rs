//! URL transformation module
//!
//! Builds delivery URLs for the media host by inserting a comma-joined
//! transformation segment after the `/upload/` path marker:
//!
//! ```text
//! https://res.cloudinary.com/demo/image/upload/v1/sample.jpg
//!   -> https://res.cloudinary.com/demo/image/upload/w_200,h_200,c_fill,f_webp,q_auto/v1/sample.jpg
//! ```
//!
//! Two entry points:
//! - [`optimize_url`] for an explicit [`TransformOptions`] set
//! - [`apply_preset`] for the named renditions in the builtin table
//!
//! URLs from other hosts, or without an `/upload/` marker, pass through
//! unchanged so the rendering layer can route every image URL through one
//! code path.

pub mod directive;
pub mod options;
pub mod preset;
pub mod registry;
pub mod url;

// Re-export commonly used types
pub use directive::Directive;
pub use options::{CropMode, OutputFormat, Quality, TransformOptions};
pub use preset::{apply_preset, preset_options};
pub use registry::{PresetFileEntry, PresetRegistry, RegistryError};
pub use url::optimize_url;
