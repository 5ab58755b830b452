//! CPAL tables.

use crate::BeBuffer;

/// Size of the fixed part of the header, before the palette indices.
pub const FIXED_HEADER_LEN: usize = 12;

/// Build a version 0 CPAL table.
///
/// Each palette is a list of `[b, g, r, a]` color records; all palettes
/// must have the same length. Color records are stored palette after
/// palette, so `colorRecordIndices[i]` is `i * numPaletteEntries`.
pub fn build(palettes: &[&[[u8; 4]]]) -> BeBuffer {
    let entries = palettes.first().map(|p| p.len()).unwrap_or_default() as u16;
    assert!(
        palettes.iter().all(|p| p.len() == entries as usize),
        "palettes must have equal length"
    );
    let num_records = entries as usize * palettes.len();
    let header_len = FIXED_HEADER_LEN + 2 * palettes.len();
    let mut buf = BeBuffer::new()
        .push(0u16) // version
        .push(entries)
        .push(palettes.len() as u16)
        .push(num_records as u16)
        .push_with_tag(header_len as u32, "color_records_array_offset");
    for i in 0..palettes.len() {
        buf = buf.push(i as u16 * entries);
    }
    for palette in palettes {
        buf = buf.extend(palette.iter().copied());
    }
    buf
}

/// A single palette of `count` colors where color `i` is the record
/// `[i, i, i, 0xFF]`.
pub fn grayscale(count: u16) -> BeBuffer {
    let colors: Vec<[u8; 4]> = (0..count)
        .map(|i| {
            let v = i as u8;
            [v, v, v, 0xFF]
        })
        .collect();
    build(&[&colors])
}

/// Byte offset of the end of color record `index` in the first palette of a
/// single-palette table made by [`build`].
pub fn color_record_end(index: usize) -> usize {
    FIXED_HEADER_LEN + 2 + (index + 1) * 4
}
