#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use read_colr::{decode_color_tables, ColorTables, FontData, FontRef};

/// Tables at arbitrary offsets in an arbitrary buffer, no sfnt required.
#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    colr_offset: u16,
    cpal_offset: u16,
    data: Vec<u8>,
}

fn walk(tables: &ColorTables) {
    for record in tables.base_glyphs() {
        let _ = tables.base_glyph(record.glyph_id);
        for layer in tables.layers(record).flatten() {
            let _ = tables.palette().resolve(layer.palette_index, Default::default());
        }
    }
}

fuzz_target!(|input: Input| {
    let data = FontData::new(&input.data);
    if let Ok(tables) = decode_color_tables(
        data,
        input.colr_offset as usize,
        input.cpal_offset as usize,
    ) {
        walk(&tables);
    }

    // and the same bytes read as a font
    if let Ok(font) = FontRef::new(&input.data) {
        if let Ok(Some(tables)) = ColorTables::from_font(&font) {
            walk(&tables);
        }
    }
});
