//! Pyramid generation: level iteration, tile extraction, raster handoff.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::SliceError;
use crate::pyramid::grid::TileGrid;
use crate::pyramid::level::max_level;
use crate::raster::Raster;

/// Parameters shared by every tile written during one generation run.
#[derive(Debug, Clone, Copy)]
pub struct PyramidParams<'a> {
    /// Pixel width/height of each tile's non-overlap core.
    pub tile_size: u32,
    /// Pixel halo added per tile per shared edge.
    pub overlap: u32,
    /// Tile file extension, which also selects the encoding.
    pub extension: &'a str,
    /// Encode quality (1-100), honored by JPEG.
    pub quality: u8,
}

/// Generate every pyramid level under `levels_root`.
///
/// Walks levels from full resolution down to the 1x1 level. Each level owns
/// a working raster; after its tiles are written the raster is consumed by
/// the halving step that produces the next level's raster, so no two level
/// rasters are ever alive at once. Returns the number of tiles written.
///
/// The base dimensions for the descriptor must be captured by the caller
/// before this function runs; the working raster shrinks as generation
/// proceeds.
pub fn generate_pyramid(
    mut raster: Raster,
    params: &PyramidParams<'_>,
    levels_root: &Path,
) -> Result<u64, SliceError> {
    let top = max_level(raster.width(), raster.height());
    let mut tiles_written = 0u64;

    for level in (0..=top).rev() {
        let (width, height) = (raster.width(), raster.height());
        info!("level {} is {} x {}", level, width, height);

        let level_dir = levels_root.join(level.to_string());
        fs::create_dir_all(&level_dir)?;

        for tile in TileGrid::new(width, height, params.tile_size, params.overlap) {
            let dest = level_dir.join(format!(
                "{}_{}.{}",
                tile.col, tile.row, params.extension
            ));
            let cropped = raster.crop(tile.x, tile.y, tile.width, tile.height);
            cropped.encode_to(&dest, params.extension, params.quality)?;

            debug!(
                "tile {}_{} at ({}, {}) stored {}x{}",
                tile.col,
                tile.row,
                tile.x,
                tile.y,
                cropped.width(),
                cropped.height()
            );
            tiles_written += 1;
        }

        // The 1x1 level is the last one; nothing left to derive.
        if level > 0 {
            raster = raster.halve();
        }
    }

    Ok(tiles_written)
}
