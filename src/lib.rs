//! # dzslicer
//!
//! Slices a single large raster image into a Deep Zoom (DZI) pyramid:
//! a stack of resolution levels, each carved into fixed-size overlapping
//! tiles, plus an XML descriptor. The output is compatible with
//! OpenSeadragon, Seadragon, and other Deep Zoom viewers, which fetch only
//! the tiles needed for the current view and zoom level.
//!
//! ## Output layout
//!
//! ```text
//! <output_root>/<basename>_files/<level>/<col>_<row>.<ext>
//! <output_root>/<basename>.xml
//! ```
//!
//! Levels run from 0 (a single pixel) up to `max_level` (full resolution);
//! each level is half the size of the one above it, rounded up.
//!
//! ## Architecture
//!
//! - [`pyramid`] - level planning, tile grid enumeration, generation
//! - [`raster`] - image collaborator (decode, crop, halve, encode)
//! - [`descriptor`] - DZI XML descriptor
//! - [`artifacts`] - idempotent cleanup of prior output
//! - [`slicer`] - validated top-level API
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```no_run
//! use dzslicer::{DeepZoomSlicer, SliceOptions};
//!
//! let slicer = DeepZoomSlicer::new("path/to/sample.jpg", SliceOptions::default())?;
//! slicer.slice()?;
//!
//! // Later: clean up everything the slice produced.
//! let removed = slicer.remove_artifacts()?;
//! assert!(removed);
//! # Ok::<(), dzslicer::SliceError>(())
//! ```

pub mod artifacts;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod pyramid;
pub mod raster;
pub mod slicer;

// Re-export commonly used types
pub use artifacts::clean_artifacts;
pub use config::{
    normalize_quality, Config, DEFAULT_FORMAT, DEFAULT_OVERLAP, DEFAULT_QUALITY, DEFAULT_TILE_SIZE,
};
pub use descriptor::{descriptor_xml, write_descriptor, DEEPZOOM_XMLNS};
pub use error::SliceError;
pub use pyramid::{
    generate_pyramid, level_dimensions, max_level, PyramidParams, TileBounds, TileGrid,
};
pub use raster::Raster;
pub use slicer::{DeepZoomSlicer, SliceOptions, SliceReport};
