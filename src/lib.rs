// Rendition - delivery URL transformation builder

pub mod constants;
pub mod error;
pub mod logging;
pub mod transform;

// Re-export the two entry points and the option types at the crate root
pub use error::TransformError;
pub use transform::{
    apply_preset, optimize_url, preset_options, CropMode, Directive, OutputFormat, PresetRegistry,
    Quality, TransformOptions,
};
