//! plain text output

use std::io::{self, Write};

use read_colr::{tables::colr::LayerRecord, ColorTables, FontRef};

use crate::GlyphFilter;

pub fn list_tables(w: &mut impl Write, font: &FontRef) -> io::Result<()> {
    writeln!(w, "Tag  Offset  Length  Checksum")?;
    writeln!(w, "-------------------------------")?;

    // pad offsets to fit the largest one in the directory
    let offset_pad = hex_width(
        font.table_directory()
            .table_records()
            .map(|rec| rec.offset)
            .max()
            .unwrap_or_default(),
    );

    for record in font.table_directory().table_records() {
        writeln!(
            w,
            "{0} 0x{1:02$X} {3:8} 0x{4:08X}",
            record.tag, record.offset, offset_pad, record.length, record.checksum
        )?;
    }
    Ok(())
}

fn hex_width(val: u32) -> usize {
    match val {
        0..=0xffff => 4usize,
        0x10000..=0xffff_ff => 6,
        0x1000000.. => 8,
    }
}

pub fn print_summary(
    w: &mut impl Write,
    tables: &ColorTables,
    filter: &GlyphFilter,
) -> io::Result<()> {
    let colr = tables.colr();
    let palette = tables.palette();
    if *filter == GlyphFilter::All {
        writeln!(
            w,
            "COLR version {}: {} base glyphs, {} layer records",
            colr.version(),
            colr.num_base_glyph_records(),
            colr.num_layer_records()
        )?;
        if tables.base_glyphs().len() < colr.num_base_glyph_records() as usize {
            writeln!(
                w,
                "  (only {} base glyph records are readable)",
                tables.base_glyphs().len()
            )?;
        }
    }

    for record in tables
        .base_glyphs()
        .iter()
        .filter(|rec| filter.should_print(rec.glyph_id))
    {
        let plural = if record.num_layers == 1 { "" } else { "s" };
        writeln!(w, "{}: {} layer{plural}", record.glyph_id, record.num_layers)?;
        for (j, layer) in tables.layers(record).enumerate() {
            match layer {
                Ok(layer) => writeln!(w, "  {j:>3}  {}", describe_layer(&layer, tables))?,
                Err(e) => writeln!(w, "  {j:>3}  <{e}>")?,
            }
        }
    }

    writeln!(w, "Palette: {} colors", palette.len())?;
    for (i, color) in palette.colors().iter().enumerate() {
        writeln!(w, "  {i:>3}  {color}")?;
    }
    Ok(())
}

fn describe_layer(layer: &LayerRecord, tables: &ColorTables) -> String {
    let color = if layer.uses_foreground() {
        "foreground".to_string()
    } else {
        match tables.palette().get(layer.palette_index as usize) {
            Some(color) => color.to_string(),
            None => "<out of range>".to_string(),
        }
    };
    format!(
        "{:<9} palette {:>5}  {color}",
        layer.glyph_id.to_string(),
        layer.palette_index
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use read_colr::types::GlyphId16;

    fn summary(font: &[u8], filter: GlyphFilter) -> String {
        let font = FontRef::new(font).unwrap();
        let tables = ColorTables::from_font(&font).unwrap().unwrap();
        let mut out = Vec::new();
        print_summary(&mut out, &tables, &filter).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn offset_width() {
        assert_eq!(hex_width(0), 4);
        assert_eq!(hex_width(0x1_0000), 6);
        assert_eq!(hex_width(u32::MAX), 8);
    }

    #[test]
    fn lists_directory() {
        let bytes = colr_test_data::simple_color_font();
        let font = FontRef::new(&bytes).unwrap();
        let mut out = Vec::new();
        list_tables(&mut out, &font).unwrap();
        let out = String::from_utf8(out).unwrap();
        let tags: Vec<_> = out.lines().skip(2).map(|line| &line[..4]).collect();
        assert_eq!(tags, ["COLR", "CPAL"]);
    }

    #[test]
    fn one_glyph() {
        let out = summary(
            &colr_test_data::simple_color_font(),
            GlyphFilter::Only(GlyphId16::new(colr_test_data::gids::SQUARE_WITH_DOT)),
        );
        pretty_assertions::assert_eq!(
            out,
            "GID_10: 2 layers\n\
             \x20   0  GID_1     palette     0  #000000FF\n\
             \x20   1  GID_2     palette     1  #FFFFFFFF\n\
             Palette: 3 colors\n\
             \x20   0  #000000FF\n\
             \x20   1  #FFFFFFFF\n\
             \x20   2  #FF0000FF\n"
        );
    }

    #[test]
    fn all_glyphs() {
        let out = summary(&colr_test_data::simple_color_font(), GlyphFilter::All);
        assert!(out.starts_with("COLR version 0: 4 base glyphs, 4 layer records\n"));
        assert!(out.contains("GID_12: 0 layers\n"));
        assert!(out.contains("GID_13: 1 layer\n"));
        assert!(out.contains("palette 65535  foreground\n"));
    }
}
