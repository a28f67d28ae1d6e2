//! Deep Zoom XML descriptor.
//!
//! The descriptor is the single document a viewer reads to reconstruct the
//! tile grid: tile size, overlap, tile format, and the base image
//! dimensions. Attribute names, casing, and the namespace literal are the
//! wire contract shared with OpenSeadragon/Seadragon-class viewers and must
//! not change.

use std::fs;
use std::path::Path;

use crate::error::SliceError;

/// Namespace identifier for Deep Zoom descriptors.
pub const DEEPZOOM_XMLNS: &str = "http://schemas.microsoft.com/deepzoom/2008";

/// Render the descriptor document as a single line, without the trailing
/// newline added by [`write_descriptor`].
pub fn descriptor_xml(
    tile_size: u32,
    overlap: u32,
    format: &str,
    width: u32,
    height: u32,
) -> String {
    format!(
        r#"<Image TileSize="{tile_size}" Overlap="{overlap}" Format="{format}" xmlns="{DEEPZOOM_XMLNS}"><Size Width="{width}" Height="{height}"/></Image>"#
    )
}

/// Write the descriptor to `path`, UTF-8, single line with a trailing
/// newline. Any existing file at `path` is overwritten unconditionally.
pub fn write_descriptor(
    path: &Path,
    tile_size: u32,
    overlap: u32,
    format: &str,
    width: u32,
    height: u32,
) -> Result<(), SliceError> {
    let mut xml = descriptor_xml(tile_size, overlap, format, width, height);
    xml.push('\n');
    fs::write(path, xml)?;
    Ok(())
}
