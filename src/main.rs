use std::path::PathBuf;
use std::process;

use clap::Parser;

use rendition::{optimize_url, PresetRegistry, TransformError, TransformOptions};

/// Rendition - build media delivery URLs with transformation directives
#[derive(Parser, Debug)]
#[command(name = "rendition")]
#[command(version, about, long_about = None)]
struct Args {
    /// Asset URL to rewrite
    url: String,

    /// Named preset to apply instead of individual directive flags
    #[arg(
        short,
        long,
        conflicts_with_all = ["width", "height", "crop", "format", "quality"]
    )]
    preset: Option<String>,

    /// Target width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Target height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Crop mode (fill, fit, scale, crop, thumb, limit, pad)
    #[arg(short, long)]
    crop: Option<String>,

    /// Output format (webp, jpeg, png, avif, auto)
    #[arg(short, long)]
    format: Option<String>,

    /// Delivery quality ("auto" or 1-100)
    #[arg(short, long)]
    quality: Option<String>,

    /// Preset registry file (YAML, or JSON with a .json extension)
    #[arg(long)]
    presets: Option<PathBuf>,
}

fn options_from_args(args: &Args) -> Result<TransformOptions, TransformError> {
    let mut options = TransformOptions::default();
    options.width = args.width;
    options.height = args.height;

    if let Some(crop) = &args.crop {
        options.crop = Some(crop.parse()?);
    }
    if let Some(format) = &args.format {
        options.format = Some(format.parse()?);
    }
    if let Some(quality) = &args.quality {
        options.quality = Some(quality.parse()?);
    }

    Ok(options)
}

fn main() {
    // Initialize logging subsystem
    rendition::logging::init_subscriber().expect("Failed to initialize logging subsystem");

    // Parse command-line arguments
    let args = Args::parse();

    // Load the preset registry (builtins unless a file is given)
    let registry = match &args.presets {
        Some(path) => PresetRegistry::from_file(path).unwrap_or_else(|e| {
            eprintln!("Failed to load preset registry: {}", e);
            process::exit(1);
        }),
        None => PresetRegistry::default(),
    };

    let result = match &args.preset {
        Some(name) => registry.apply(&args.url, name),
        None => {
            let options = options_from_args(&args).unwrap_or_else(|e| {
                eprintln!("Invalid transformation options: {}", e);
                process::exit(1);
            });
            optimize_url(&args.url, &options)
        }
    };

    tracing::debug!(input = %args.url, output = %result, "URL rewritten");
    println!("{}", result);
}
