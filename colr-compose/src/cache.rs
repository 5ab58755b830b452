//! Storage for the composed color glyphs of a font.

use std::collections::{HashMap, HashSet};

use read_colr::{
    tables::cpal::Palette,
    types::{Argb, GlyphId16},
    ColorTables, FontRef, ReadError,
};

use crate::{ComposeError, ComposedGlyph, Compositor, GlyphRasterizer};

/// The composed color glyphs of a font, keyed by base glyph id.
///
/// All glyphs are composed when the cache is built; lookups do no
/// rendering work.
#[derive(Clone, Debug, Default)]
pub struct ColorGlyphCache {
    glyphs: Vec<ComposedGlyph>,
    index: HashMap<GlyphId16, usize>,
    failures: Vec<ComposeError>,
    palette: Palette,
}

impl ColorGlyphCache {
    /// Compose every base glyph in `tables`, in table order.
    ///
    /// A glyph that fails to compose is recorded in
    /// [`failures`](Self::failures) and does not affect the others. If a
    /// glyph id appears more than once, the first record wins.
    pub fn build(
        tables: ColorTables<'_>,
        foreground: Argb,
        rasterizer: &mut impl GlyphRasterizer,
    ) -> Self {
        let mut glyphs = Vec::with_capacity(tables.base_glyphs().len());
        let mut index = HashMap::with_capacity(tables.base_glyphs().len());
        let mut failures = Vec::new();
        let mut seen = HashSet::new();
        let compositor = Compositor::new(&tables).with_foreground(foreground);

        for record in tables.base_glyphs() {
            if !seen.insert(record.glyph_id) {
                log::debug!("ignoring duplicate base glyph record for {}", record.glyph_id);
                continue;
            }
            match compositor.composite(record, rasterizer) {
                Ok(glyph) => {
                    index.insert(record.glyph_id, glyphs.len());
                    glyphs.push(glyph);
                }
                Err(e) => {
                    log::warn!("{e}");
                    failures.push(e);
                }
            }
        }
        log::debug!(
            "composed {} color glyphs, {} failed",
            glyphs.len(),
            failures.len()
        );

        ColorGlyphCache {
            glyphs,
            index,
            failures,
            palette: tables.into_palette(),
        }
    }

    /// Decode the color tables of `font` and compose all of its color glyphs.
    ///
    /// Returns `Ok(None)` if the font has no color tables, in which case
    /// the caller should fall back to monochrome rendering.
    pub fn from_font(
        font: &FontRef<'_>,
        foreground: Argb,
        rasterizer: &mut impl GlyphRasterizer,
    ) -> Result<Option<Self>, ReadError> {
        Ok(ColorTables::from_font(font)?
            .map(|tables| Self::build(tables, foreground, rasterizer)))
    }

    /// Returns the composed glyph for `glyph_id`.
    pub fn get(&self, glyph_id: GlyphId16) -> Option<&ComposedGlyph> {
        self.index.get(&glyph_id).and_then(|ix| self.glyphs.get(*ix))
    }

    pub fn contains(&self, glyph_id: GlyphId16) -> bool {
        self.index.contains_key(&glyph_id)
    }

    /// Returns an iterator over the composed glyphs, in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ComposedGlyph> + '_ {
        self.glyphs.iter()
    }

    /// The number of composed glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The glyphs that could not be composed.
    pub fn failures(&self) -> &[ComposeError] {
        &self.failures
    }

    /// The palette the glyphs were painted with.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl<'a> IntoIterator for &'a ColorGlyphCache {
    type Item = &'a ComposedGlyph;
    type IntoIter = std::slice::Iter<'a, ComposedGlyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}
