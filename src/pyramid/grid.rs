//! Tile grid enumeration for a single pyramid level.
//!
//! Tiles are enumerated lazily in column-major-outer / row-major-inner order:
//! the outer cursor walks columns left to right, the inner cursor walks rows
//! top to bottom. Destination filenames encode `{col}_{row}`, and Deep Zoom
//! viewers address tiles the same way, so this ordering is part of the wire
//! contract.
//!
//! # Extent rule
//!
//! A tile whose start is 0 on an axis (top row or left column) extends
//! `tile_size + overlap` on that axis; every other tile extends
//! `tile_size + 2*overlap`, carrying the halo on both the leading and the
//! trailing edge. The cursor then advances by `extent - 2*overlap`, which
//! makes the very first step `tile_size - overlap` rather than `tile_size`.
//! The asymmetric first step matches the established slicer behavior that
//! shipped viewers expect; see DESIGN.md before "fixing" it.
//!
//! Emitted extents are not clipped to the level bounds here. Tiles along the
//! right and bottom edges may claim more pixels than the raster has; the crop
//! operation clips them to the available region.

/// Position and extent of one tile within a level, in level-pixel
/// coordinates. Width and height include the overlap halo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBounds {
    /// Zero-based column index.
    pub col: u32,
    /// Zero-based row index.
    pub row: u32,
    /// Horizontal offset of the tile's upper-left corner.
    pub x: u32,
    /// Vertical offset of the tile's upper-left corner.
    pub y: u32,
    /// Stored width, before clipping at the raster boundary.
    pub width: u32,
    /// Stored height, before clipping at the raster boundary.
    pub height: u32,
}

/// Lazy iterator over the tiles of one level.
///
/// # Example
///
/// ```
/// use dzslicer::pyramid::TileGrid;
///
/// // A 500px-wide level at the default tile size yields two columns,
/// // stepping from x=0 to x=253.
/// let columns: Vec<u32> = TileGrid::new(500, 100, 254, 1)
///     .filter(|t| t.row == 0)
///     .map(|t| t.x)
///     .collect();
/// assert_eq!(columns, vec![0, 253]);
/// ```
#[derive(Debug, Clone)]
pub struct TileGrid {
    level_width: u32,
    level_height: u32,
    tile_size: u32,
    overlap: u32,
    x: u32,
    y: u32,
    col: u32,
    row: u32,
}

impl TileGrid {
    /// Create a tile enumeration for a level of the given dimensions.
    ///
    /// The caller must ensure `overlap < tile_size`; the cursor step is
    /// `extent - 2*overlap` and must stay positive for the walk to
    /// terminate. [`crate::slicer::DeepZoomSlicer`] validates this before
    /// any grid is built.
    pub fn new(level_width: u32, level_height: u32, tile_size: u32, overlap: u32) -> Self {
        debug_assert!(overlap < tile_size, "overlap must be smaller than tile_size");
        Self {
            level_width,
            level_height,
            tile_size,
            overlap,
            x: 0,
            y: 0,
            col: 0,
            row: 0,
        }
    }

    /// Stored extent of a tile starting at `start` on one axis.
    fn extent(&self, start: u32) -> u32 {
        if start > 0 {
            self.tile_size + 2 * self.overlap
        } else {
            self.tile_size + self.overlap
        }
    }
}

impl Iterator for TileGrid {
    type Item = TileBounds;

    fn next(&mut self) -> Option<TileBounds> {
        if self.x >= self.level_width || self.level_height == 0 {
            return None;
        }

        let width = self.extent(self.x);
        let height = self.extent(self.y);
        let tile = TileBounds {
            col: self.col,
            row: self.row,
            x: self.x,
            y: self.y,
            width,
            height,
        };

        // Advance the row cursor; when it runs off the bottom, move to the
        // next column. The column step uses this column's tile width, which
        // is constant down the column since it depends only on x.
        self.y += height - 2 * self.overlap;
        self.row += 1;
        if self.y >= self.level_height {
            self.y = 0;
            self.row = 0;
            self.x += width - 2 * self.overlap;
            self.col += 1;
        }

        Some(tile)
    }
}
