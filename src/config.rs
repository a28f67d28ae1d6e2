//! CLI configuration.
//!
//! All options can also be supplied through environment variables with the
//! `DZ_` prefix:
//!
//! - `DZ_OUTPUT_DIR` - Root for the generated tree (default: source dir)
//! - `DZ_FORMAT` - Tile format/extension (default: jpg)
//! - `DZ_QUALITY` - Encode quality, 0-1 fraction or 1-100 (default: 75)
//! - `DZ_TILE_SIZE` - Tile core size in pixels (default: 254)
//! - `DZ_OVERLAP` - Overlap halo in pixels (default: 1)

use std::path::PathBuf;

use clap::Parser;

use crate::error::SliceError;
use crate::slicer::SliceOptions;

// =============================================================================
// Default Values
// =============================================================================

/// Default tile format/extension.
pub const DEFAULT_FORMAT: &str = "jpg";

/// Default encode quality.
pub const DEFAULT_QUALITY: f32 = 75.0;

/// Default pixel size of each tile's non-overlap core.
pub const DEFAULT_TILE_SIZE: u32 = 254;

/// Default overlap halo in pixels per shared edge.
pub const DEFAULT_OVERLAP: u32 = 1;

// =============================================================================
// CLI Arguments
// =============================================================================

/// dzslicer - Slice an image into a Deep Zoom tile pyramid.
///
/// Generates `<basename>_files/<level>/<col>_<row>.<ext>` tile trees plus a
/// `<basename>.xml` descriptor compatible with OpenSeadragon and other Deep
/// Zoom viewers.
///
/// WARNING: slicing deletes and overwrites any previously generated tiles
/// and descriptor for the same source.
#[derive(Parser, Debug, Clone)]
#[command(name = "dzslicer")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Source image to slice.
    pub source: PathBuf,

    /// Root directory for the generated tree.
    ///
    /// Defaults to the source image's directory.
    #[arg(long, env = "DZ_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Tile format (file extension selects the encoding).
    #[arg(long, default_value = DEFAULT_FORMAT, env = "DZ_FORMAT")]
    pub format: String,

    /// Encode quality: a 0-1 fraction (scaled by 100) or a 1-100 value.
    #[arg(long, default_value_t = DEFAULT_QUALITY, env = "DZ_QUALITY")]
    pub quality: f32,

    /// Width and height of each tile's non-overlap core, in pixels.
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE, env = "DZ_TILE_SIZE")]
    pub tile_size: u32,

    /// Overlap halo added per tile per shared edge, in pixels (0-10 typical).
    #[arg(long, default_value_t = DEFAULT_OVERLAP, env = "DZ_OVERLAP")]
    pub overlap: u32,

    /// Remove previously generated artifacts instead of slicing.
    #[arg(long, default_value_t = false)]
    pub remove: bool,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Convert CLI arguments into validated library options.
    pub fn slice_options(&self) -> Result<SliceOptions, SliceError> {
        Ok(SliceOptions {
            output_dir: self.output_dir.clone(),
            format: Some(self.format.clone()),
            quality: normalize_quality(self.quality)?,
            tile_size: self.tile_size,
            overlap: self.overlap,
        })
    }
}

/// Normalize a quality value to the 1-100 scale.
///
/// Values strictly between 0 and 1 are treated as fractions and scaled by
/// 100; everything else is taken as-is. Out-of-range results are rejected.
pub fn normalize_quality(quality: f32) -> Result<u8, SliceError> {
    let scaled = if quality > 0.0 && quality < 1.0 {
        quality * 100.0
    } else {
        quality
    };

    let rounded = scaled.round();
    if !(1.0..=100.0).contains(&rounded) {
        return Err(SliceError::config(format!(
            "quality must be a 0-1 fraction or between 1 and 100, got {quality}"
        )));
    }
    Ok(rounded as u8)
}

// =============================================================================
// Tests
// =============================================================================
