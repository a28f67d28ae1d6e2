//! Top-level slicing API.
//!
//! [`DeepZoomSlicer`] ties the pieces together: it validates the source and
//! options at construction, derives the output paths from the source
//! basename, and exposes the two operations a caller needs, [`slice`] and
//! [`remove_artifacts`].
//!
//! [`slice`]: DeepZoomSlicer::slice
//! [`remove_artifacts`]: DeepZoomSlicer::remove_artifacts

use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info};

use crate::artifacts::clean_artifacts;
use crate::descriptor::write_descriptor;
use crate::error::SliceError;
use crate::pyramid::{generate_pyramid, max_level, PyramidParams};
use crate::raster::Raster;

/// Options for a slicing run.
///
/// `format: None` reuses the source image's extension for tiles.
#[derive(Debug, Clone)]
pub struct SliceOptions {
    /// Root directory for the generated tree; defaults to the source
    /// image's directory.
    pub output_dir: Option<PathBuf>,
    /// Tile extension/encoding; `None` reuses the source extension.
    pub format: Option<String>,
    /// Encode quality, 1-100.
    pub quality: u8,
    /// Pixel width/height of each tile's non-overlap core.
    pub tile_size: u32,
    /// Pixel halo per tile per shared edge.
    pub overlap: u32,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            format: Some("jpg".to_string()),
            quality: 75,
            tile_size: 254,
            overlap: 1,
        }
    }
}

/// Summary of a completed slicing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceReport {
    /// Index of the full-resolution level.
    pub max_level: u32,
    /// Total tiles written across all levels.
    pub tiles_written: u64,
}

/// Slices one source image into a Deep Zoom pyramid plus descriptor.
///
/// # Example
///
/// ```no_run
/// use dzslicer::{DeepZoomSlicer, SliceOptions};
///
/// let slicer = DeepZoomSlicer::new("photos/sample.jpg", SliceOptions::default())?;
/// let report = slicer.slice()?;
/// println!("{} tiles across {} levels", report.tiles_written, report.max_level + 1);
/// # Ok::<(), dzslicer::SliceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DeepZoomSlicer {
    source: PathBuf,
    levels_root: PathBuf,
    descriptor_path: PathBuf,
    extension: String,
    tile_size: u32,
    overlap: u32,
    quality: u8,
}

impl DeepZoomSlicer {
    /// Validate options and derive output paths.
    ///
    /// # Errors
    ///
    /// - [`SliceError::InvalidInput`] if `source` is not an existing file.
    /// - [`SliceError::InvalidConfiguration`] for a zero tile size, an
    ///   overlap not smaller than the tile size, a quality outside 1-100,
    ///   or a tile format no encoder is known for.
    pub fn new(source: impl Into<PathBuf>, options: SliceOptions) -> Result<Self, SliceError> {
        let source = source.into();
        if !source.is_file() {
            return Err(SliceError::InvalidInput { path: source });
        }

        if options.tile_size == 0 {
            return Err(SliceError::config("tile_size must be greater than 0"));
        }
        // Keeps every grid step (extent - 2*overlap) positive.
        if options.overlap >= options.tile_size {
            return Err(SliceError::config(format!(
                "overlap ({}) must be smaller than tile_size ({})",
                options.overlap, options.tile_size
            )));
        }
        if options.quality == 0 || options.quality > 100 {
            return Err(SliceError::config("quality must be between 1 and 100"));
        }

        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| SliceError::config("source filename is not valid UTF-8"))?
            .to_string();
        let source_extension = source
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("jpg")
            .to_string();

        let extension = options.format.unwrap_or(source_extension);
        if ImageFormat::from_extension(&extension).is_none() {
            return Err(SliceError::config(format!(
                "unknown tile format: {extension}"
            )));
        }

        let output_root = match options.output_dir {
            Some(dir) => dir,
            None => source_dir(&source),
        };
        let levels_root = output_root.join(format!("{stem}_files"));
        let descriptor_path = output_root.join(format!("{stem}.xml"));

        Ok(Self {
            source,
            levels_root,
            descriptor_path,
            extension,
            tile_size: options.tile_size,
            overlap: options.overlap,
            quality: options.quality,
        })
    }

    /// Run full pyramid plus descriptor generation.
    ///
    /// Destructive to prior artifacts at the same paths: any existing level
    /// tree and descriptor are removed before generation, so two runs with
    /// identical options produce identical structures with no leftovers.
    pub fn slice(&self) -> Result<SliceReport, SliceError> {
        let raster = Raster::open(&self.source)?;
        // Captured before the working raster starts shrinking.
        let (orig_width, orig_height) = (raster.width(), raster.height());
        if orig_width == 0 || orig_height == 0 {
            return Err(SliceError::config("source image has a zero dimension"));
        }

        if clean_artifacts(&self.descriptor_path, &self.levels_root)? {
            debug!("removed artifacts from a previous run");
        }

        let params = PyramidParams {
            tile_size: self.tile_size,
            overlap: self.overlap,
            extension: &self.extension,
            quality: self.quality,
        };
        let tiles_written = generate_pyramid(raster, &params, &self.levels_root)?;

        write_descriptor(
            &self.descriptor_path,
            self.tile_size,
            self.overlap,
            &self.extension,
            orig_width,
            orig_height,
        )?;

        let report = SliceReport {
            max_level: max_level(orig_width, orig_height),
            tiles_written,
        };
        info!(
            "wrote {} tiles across {} levels, descriptor at {}",
            report.tiles_written,
            report.max_level + 1,
            self.descriptor_path.display()
        );
        Ok(report)
    }

    /// Remove previously generated artifacts.
    ///
    /// Returns `true` iff the descriptor or the level tree existed.
    /// Idempotent: a second call finds nothing and returns `false`.
    pub fn remove_artifacts(&self) -> Result<bool, SliceError> {
        clean_artifacts(&self.descriptor_path, &self.levels_root)
    }

    /// Root directory holding the per-level tile directories.
    pub fn levels_root(&self) -> &Path {
        &self.levels_root
    }

    /// Path of the XML descriptor.
    pub fn descriptor_path(&self) -> &Path {
        &self.descriptor_path
    }

    /// Tile extension in effect for this slicer.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// Directory containing `source`, falling back to `.` for bare filenames.
fn source_dir(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn write_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 200])
        });
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_missing_source_is_invalid_input() {
        let result = DeepZoomSlicer::new("no/such/file.jpg", SliceOptions::default());
        assert!(matches!(result, Err(SliceError::InvalidInput { .. })));
    }

    #[test]
    fn test_zero_tile_size_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_test_image(dir.path(), "sample.png", 8, 8);

        let options = SliceOptions {
            tile_size: 0,
            ..SliceOptions::default()
        };
        let result = DeepZoomSlicer::new(&source, options);
        assert!(matches!(
            result,
            Err(SliceError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_overlap_must_be_smaller_than_tile_size() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_test_image(dir.path(), "sample.png", 8, 8);

        let options = SliceOptions {
            tile_size: 16,
            overlap: 16,
            ..SliceOptions::default()
        };
        let result = DeepZoomSlicer::new(&source, options);
        assert!(matches!(
            result,
            Err(SliceError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_test_image(dir.path(), "sample.png", 8, 8);

        let options = SliceOptions {
            format: Some("xyz".to_string()),
            ..SliceOptions::default()
        };
        let result = DeepZoomSlicer::new(&source, options);
        assert!(matches!(
            result,
            Err(SliceError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_paths_derived_from_basename() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_test_image(dir.path(), "sample.png", 8, 8);

        let slicer = DeepZoomSlicer::new(&source, SliceOptions::default()).unwrap();
        assert_eq!(slicer.levels_root(), dir.path().join("sample_files"));
        assert_eq!(slicer.descriptor_path(), dir.path().join("sample.xml"));
    }

    #[test]
    fn test_format_none_reuses_source_extension() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_test_image(dir.path(), "sample.png", 8, 8);

        let options = SliceOptions {
            format: None,
            ..SliceOptions::default()
        };
        let slicer = DeepZoomSlicer::new(&source, options).unwrap();
        assert_eq!(slicer.extension(), "png");
    }

    #[test]
    fn test_output_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let source = write_test_image(dir.path(), "sample.png", 8, 8);

        let options = SliceOptions {
            output_dir: Some(out.path().to_path_buf()),
            ..SliceOptions::default()
        };
        let slicer = DeepZoomSlicer::new(&source, options).unwrap();
        assert_eq!(slicer.levels_root(), out.path().join("sample_files"));
        assert_eq!(slicer.descriptor_path(), out.path().join("sample.xml"));
    }
}
