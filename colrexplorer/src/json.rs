//! JSON output, built from the serde impls of the decoded records.

use std::io::{self, Write};

use read_colr::{
    tables::{
        colr::{BaseGlyphRecord, LayerRecord},
        cpal::Palette,
    },
    types::Argb,
    ColorTables,
};
use serde::Serialize;

use crate::GlyphFilter;

#[derive(Serialize)]
struct ColorFont<'a> {
    version: u16,
    base_glyphs: Vec<ColorGlyph>,
    palette: &'a Palette,
}

#[derive(Serialize)]
struct ColorGlyph {
    #[serde(flatten)]
    record: BaseGlyphRecord,
    layers: Vec<Layer>,
}

#[derive(Serialize)]
struct Layer {
    #[serde(flatten)]
    record: LayerRecord,
    /// `None` for foreground layers and out of range palette indices.
    color: Option<Argb>,
}

fn color_font<'a>(tables: &'a ColorTables, filter: &GlyphFilter) -> ColorFont<'a> {
    let palette = tables.palette();
    let base_glyphs = tables
        .base_glyphs()
        .iter()
        .filter(|rec| filter.should_print(rec.glyph_id))
        .map(|record| ColorGlyph {
            record: *record,
            // unreadable layer records are left out
            layers: tables
                .layers(record)
                .filter_map(Result::ok)
                .map(|layer| Layer {
                    record: layer,
                    color: palette.get(layer.palette_index as usize),
                })
                .collect(),
        })
        .collect();
    ColorFont {
        version: tables.colr().version(),
        base_glyphs,
        palette,
    }
}

pub fn print_json(w: &mut impl Write, tables: &ColorTables, filter: &GlyphFilter) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, &color_font(tables, filter))?;
    writeln!(w)
}
