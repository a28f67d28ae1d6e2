//! Raster collaborator wrapping the `image` crate.
//!
//! The pyramid algorithm never touches pixels directly; it asks this module
//! to load, crop, halve, and encode. Two properties the algorithm relies on:
//!
//! - Decoding to a pixel buffer drops embedded metadata (EXIF, palettes), so
//!   a freshly opened [`Raster`] carries no stripping obligation forward.
//! - [`Raster::crop`] returns a fresh buffer with no positional metadata, so
//!   repeated crops from the same raster never accumulate offset drift.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use crate::error::SliceError;

/// An in-memory raster, the working buffer for one pyramid level.
#[derive(Debug, Clone)]
pub struct Raster {
    image: DynamicImage,
}

impl Raster {
    /// Decode an image file into a raster.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SliceError> {
        let image = image::open(path)?;
        Ok(Self { image })
    }

    /// Wrap an already decoded image.
    pub fn from_image(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Crop a region, clipped to the raster bounds.
    ///
    /// Requested extents that run past the right or bottom edge are reduced
    /// to the available pixels; a request starting outside the raster yields
    /// an empty region on that axis.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Raster {
        let clipped_width = width.min(self.width().saturating_sub(x));
        let clipped_height = height.min(self.height().saturating_sub(y));
        Raster {
            image: self.image.crop_imm(x, y, clipped_width, clipped_height),
        }
    }

    /// Consume this raster and produce the next pyramid level's raster:
    /// both dimensions halved, rounded up, floor of one pixel.
    pub fn halve(self) -> Raster {
        let width = self.width().div_ceil(2).max(1);
        let height = self.height().div_ceil(2).max(1);
        Raster {
            image: self.image.resize_exact(width, height, FilterType::Lanczos3),
        }
    }

    /// Encode this raster to `path` in the format named by `extension`.
    ///
    /// JPEG honors `quality` (1-100); other formats encode at their
    /// defaults. Unknown extensions are rejected as a configuration error.
    pub fn encode_to(
        &self,
        path: &Path,
        extension: &str,
        quality: u8,
    ) -> Result<(), SliceError> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => {
                let file = File::create(path)?;
                let mut writer = BufWriter::new(file);
                let mut encoder = JpegEncoder::new_with_quality(&mut writer, quality);
                // JPEG has no alpha channel
                encoder.encode_image(&self.image.to_rgb8())?;
                Ok(())
            }
            other => {
                let format = ImageFormat::from_extension(other).ok_or_else(|| {
                    SliceError::config(format!("unknown tile format: {other}"))
                })?;
                self.image.save_with_format(path, format)?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn test_raster(width: u32, height: u32) -> Raster {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        Raster::from_image(DynamicImage::ImageRgb8(img))
    }

    #[test]
    fn test_crop_within_bounds() {
        let raster = test_raster(100, 80);
        let cropped = raster.crop(10, 20, 30, 40);
        assert_eq!((cropped.width(), cropped.height()), (30, 40));
    }

    #[test]
    fn test_crop_clips_at_edges() {
        let raster = test_raster(100, 80);
        // 256x256 requested at (90, 70): only 10x10 remain
        let cropped = raster.crop(90, 70, 256, 256);
        assert_eq!((cropped.width(), cropped.height()), (10, 10));
    }

    #[test]
    fn test_crop_outside_bounds_is_empty() {
        let raster = test_raster(100, 80);
        let cropped = raster.crop(200, 0, 50, 50);
        assert_eq!(cropped.width(), 0);
    }

    #[test]
    fn test_halve_rounds_up() {
        let raster = test_raster(101, 50);
        let halved = raster.halve();
        assert_eq!((halved.width(), halved.height()), (51, 25));
    }

    #[test]
    fn test_halve_floors_at_one_pixel() {
        let mut raster = test_raster(3, 1);
        raster = raster.halve();
        assert_eq!((raster.width(), raster.height()), (2, 1));
        raster = raster.halve();
        assert_eq!((raster.width(), raster.height()), (1, 1));
        raster = raster.halve();
        assert_eq!((raster.width(), raster.height()), (1, 1));
    }

    #[test]
    fn test_encode_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.jpg");

        let raster = test_raster(16, 16);
        raster.encode_to(&path, "jpg", 75).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // SOI marker
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.png");

        let raster = test_raster(16, 16);
        raster.encode_to(&path, "png", 75).unwrap();

        let reopened = Raster::open(&path).unwrap();
        assert_eq!((reopened.width(), reopened.height()), (16, 16));
    }

    #[test]
    fn test_encode_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.xyz");

        let raster = test_raster(16, 16);
        let result = raster.encode_to(&path, "xyz", 75);
        assert!(matches!(
            result,
            Err(SliceError::InvalidConfiguration { .. })
        ));
    }
}
