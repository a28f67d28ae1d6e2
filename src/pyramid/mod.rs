//! Pyramid construction.
//!
//! A Deep Zoom pyramid is a stack of resolution levels, numbered from
//! `max_level` (the source resolution) down to 0 (a single pixel), each
//! level half the size of the one above it, rounded up. Every level is
//! carved into fixed-size tiles with an overlap halo so a viewer can render
//! seamlessly across tile boundaries.
//!
//! # Components
//!
//! - [`level`]: level count and per-level dimensions
//! - [`grid`]: lazy tile enumeration for one level
//! - [`generator`]: drives levels top-down, cropping and encoding tiles

pub mod generator;
pub mod grid;
pub mod level;

pub use generator::{generate_pyramid, PyramidParams};
pub use grid::{TileBounds, TileGrid};
pub use level::{level_dimensions, max_level};
