//! The decoded model of a font's layered color glyphs.

use std::ops::Range;

use types::GlyphId16;

use crate::{
    tables::{
        colr::{self, BaseGlyphRecord, Colr, LayerRecord},
        cpal::{self, Cpal, Palette},
    },
    FontData, FontRef, ReadError,
};

/// Base glyph records and the first palette of a font.
///
/// Base glyph records are decoded eagerly, in table order. Layer records
/// are not: they are read on demand from the still borrowed font data with
/// [`layer`](Self::layer) or [`layers`](Self::layers).
#[derive(Clone, Debug)]
pub struct ColorTables<'a> {
    colr: Colr<'a>,
    base_glyphs: Vec<BaseGlyphRecord>,
    palette: Palette,
}

/// Decode the COLR table at `colr_offset` and the CPAL table at
/// `cpal_offset` in `data`.
///
/// A header that cannot be read fails the whole decode with
/// [`ReadError::MalformedTable`]. Arrays that are truncated part way are
/// not errors: decoding stops at the first record that is out of bounds and
/// the records before it are kept.
pub fn decode_color_tables(
    data: FontData<'_>,
    colr_offset: usize,
    cpal_offset: usize,
) -> Result<ColorTables<'_>, ReadError> {
    let colr = Colr::read(data, colr_offset)?;
    if colr.num_base_glyph_records() == 0 {
        return Ok(ColorTables {
            colr,
            base_glyphs: Vec::new(),
            palette: Palette::default(),
        });
    }

    let base_glyphs: Vec<_> = colr.base_glyph_records().collect();
    if base_glyphs.len() < colr.num_base_glyph_records() as usize {
        log::debug!(
            "COLR base glyph array truncated at record {} of {} (array offset {})",
            base_glyphs.len(),
            colr.num_base_glyph_records(),
            colr.base_glyph_records_offset()
        );
    }

    let cpal = Cpal::read(data, cpal_offset)?;
    let palette = cpal.first_palette();
    if cpal.num_palettes() > 0 && palette.len() < cpal.num_palette_entries() as usize {
        log::debug!(
            "CPAL color array truncated at entry {} of {} (array offset {})",
            palette.len(),
            cpal.num_palette_entries(),
            cpal.color_records_offset()
        );
    }

    Ok(ColorTables {
        colr,
        base_glyphs,
        palette,
    })
}

impl<'a> ColorTables<'a> {
    /// Locate and decode the color tables of `font`.
    ///
    /// Returns `Ok(None)` if the font does not have both a `COLR` and a `CPAL`
    /// table; such a font has no color glyphs.
    pub fn from_font(font: &FontRef<'a>) -> Result<Option<Self>, ReadError> {
        let (Some(colr_offset), Some(cpal_offset)) =
            (font.table_offset(colr::TAG), font.table_offset(cpal::TAG))
        else {
            return Ok(None);
        };
        decode_color_tables(font.data(), colr_offset, cpal_offset).map(Some)
    }

    /// Like [`from_font`](Self::from_font), but reports absent tables as
    /// [`ReadError::TableIsMissing`].
    pub fn from_font_required(font: &FontRef<'a>) -> Result<Self, ReadError> {
        for tag in [colr::TAG, cpal::TAG] {
            if font.table_offset(tag).is_none() {
                return Err(ReadError::TableIsMissing(tag));
            }
        }
        Self::from_font(font)?.ok_or(ReadError::TableIsMissing(colr::TAG))
    }

    /// The font data the tables were decoded from.
    pub fn data(&self) -> FontData<'a> {
        self.colr.data()
    }

    pub fn colr(&self) -> &Colr<'a> {
        &self.colr
    }

    /// The base glyph records, in table order.
    pub fn base_glyphs(&self) -> &[BaseGlyphRecord] {
        &self.base_glyphs
    }

    /// Returns the first base glyph record for `glyph_id`, searching in
    /// table order.
    pub fn base_glyph(&self, glyph_id: GlyphId16) -> Option<&BaseGlyphRecord> {
        self.base_glyphs
            .iter()
            .find(|record| record.glyph_id == glyph_id)
    }

    /// Absolute offset of the layer record array in the font data.
    pub fn layer_records_offset(&self) -> usize {
        self.colr.layer_records_offset()
    }

    /// The first palette of the font.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Consume the tables, returning the decoded palette.
    pub fn into_palette(self) -> Palette {
        self.palette
    }

    /// Read layer `j` of `record`, where layer 0 is painted first.
    pub fn layer(&self, record: &BaseGlyphRecord, j: usize) -> Result<LayerRecord, ReadError> {
        if j >= record.num_layers as usize {
            return Err(ReadError::OutOfBounds);
        }
        let index = (record.first_layer_index as usize)
            .checked_add(j)
            .ok_or(ReadError::OutOfBounds)?;
        self.colr.layer_record(index)
    }

    /// Returns an iterator over the layers of `record` in paint order.
    pub fn layers(&self, record: &BaseGlyphRecord) -> Layers<'_, 'a> {
        Layers {
            tables: self,
            record: *record,
            next: 0..record.num_layers as usize,
        }
    }
}

/// Iterator over the layers of a base glyph, in paint order.
///
/// Each item is the result of reading one layer record; a record that is
/// out of bounds yields an error without ending the iteration.
#[derive(Clone, Debug)]
pub struct Layers<'t, 'a> {
    tables: &'t ColorTables<'a>,
    record: BaseGlyphRecord,
    next: Range<usize>,
}

impl Iterator for Layers<'_, '_> {
    type Item = Result<LayerRecord, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let j = self.next.next()?;
        Some(self.tables.layer(&self.record, j))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.next.size_hint()
    }
}

impl ExactSizeIterator for Layers<'_, '_> {}
