//! COLR version 0 tables.

use crate::BeBuffer;

/// Size of the version 0 header.
pub const HEADER_LEN: usize = 14;

/// Build a COLR v0 table.
///
/// `base_glyphs` holds `(glyph id, first layer index, layer count)` and
/// `layers` holds `(layer glyph id, palette index)`. The base glyph array
/// immediately follows the header and the layer array follows that.
pub fn build(base_glyphs: &[(u16, u16, u16)], layers: &[(u16, u16)]) -> BeBuffer {
    let base_offset = HEADER_LEN as u32;
    let layer_offset = base_offset + base_glyphs.len() as u32 * 6;
    let mut buf = BeBuffer::new()
        .push(0u16) // version
        .push_with_tag(base_glyphs.len() as u16, "num_base_glyph_records")
        .push_with_tag(base_offset, "base_glyph_records_offset")
        .push_with_tag(layer_offset, "layer_records_offset")
        .push(layers.len() as u16);
    for (gid, first, count) in base_glyphs {
        buf = buf.push(*gid).push(*first).push(*count);
    }
    for (gid, palette_ix) in layers {
        buf = buf.push(*gid).push(*palette_ix);
    }
    buf
}

/// A table with `count` base glyphs, each with a single layer.
///
/// Base glyph `i` has glyph id `100 + i` and uses layer `i`, whose glyph
/// id is `200 + i` and palette index is `i`.
pub fn sequential(count: u16) -> BeBuffer {
    let bases: Vec<_> = (0..count).map(|i| (100 + i, i, 1)).collect();
    let layers: Vec<_> = (0..count).map(|i| (200 + i, i)).collect();
    build(&bases, &layers)
}

/// Byte offset of the end of base glyph record `index` within a table
/// made by [`build`].
pub fn base_glyph_record_end(index: usize) -> usize {
    HEADER_LEN + (index + 1) * 6
}
