//! Painting the layers of one color glyph.

use read_colr::{
    tables::colr::BaseGlyphRecord,
    types::{Argb, GlyphId16},
    ColorTables,
};

use crate::{
    blend::{flatten_over, paint_layer},
    raster::try_filled,
    ComposeError, CoverageMask, Extent, GlyphRasterizer, RasterError,
};

/// A color glyph, painted into a straight-alpha ARGB bitmap.
///
/// Pixels are stored row-major, top row first, with no padding between rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedGlyph {
    glyph_id: GlyphId16,
    width: u32,
    height: u32,
    pixels: Vec<Argb>,
}

impl ComposedGlyph {
    /// The base glyph this bitmap was composed from.
    pub fn glyph_id(&self) -> GlyphId16 {
        self.glyph_id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    /// The pixels as bytes: each pixel is a native-endian `0xAARRGGBB` word.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Argb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Returns an iterator over the rows of the bitmap, from the top.
    pub fn rows(&self) -> impl Iterator<Item = &[Argb]> + '_ {
        // an empty bitmap has no pixels, so the chunk size never matters
        self.pixels.chunks_exact((self.width as usize).max(1))
    }

    /// Blend the glyph over an opaque background, producing opaque pixels
    /// ready to copy to a display surface.
    pub fn flatten_onto(&self, background: Argb) -> Vec<Argb> {
        self.pixels
            .iter()
            .map(|pixel| flatten_over(*pixel, background))
            .collect()
    }
}

/// Paints color glyphs from decoded color tables.
#[derive(Clone, Debug)]
pub struct Compositor<'t, 'a> {
    tables: &'t ColorTables<'a>,
    foreground: Argb,
}

impl<'t, 'a> Compositor<'t, 'a> {
    /// Create a compositor that paints foreground layers opaque black.
    pub fn new(tables: &'t ColorTables<'a>) -> Self {
        Self {
            tables,
            foreground: Argb::BLACK,
        }
    }

    /// Set the color used for layers with palette index `0xFFFF`.
    pub fn with_foreground(mut self, foreground: Argb) -> Self {
        self.foreground = foreground;
        self
    }

    pub fn foreground(&self) -> Argb {
        self.foreground
    }

    /// Compose the color glyph for `record`.
    ///
    /// The bitmap has the extent of the base glyph. Layers are painted in
    /// table order, so the last layer ends up on top. A layer is skipped
    /// (and logged) if its record cannot be read, its palette index is out
    /// of range, or the rasterizer fails on it; only a failure to size the
    /// base glyph fails the whole glyph.
    pub fn composite(
        &self,
        record: &BaseGlyphRecord,
        rasterizer: &mut impl GlyphRasterizer,
    ) -> Result<ComposedGlyph, ComposeError> {
        let glyph_id = record.glyph_id;
        let failed = |source| ComposeError::RasterizeFailed { glyph_id, source };
        let extent = rasterizer.glyph_extent(glyph_id).map_err(failed)?;
        let too_large = || failed(RasterError::ExtentTooLarge(extent));
        let mut pixels = extent
            .area()
            .and_then(|area| try_filled(area, Argb::TRANSPARENT))
            .ok_or_else(too_large)?;
        let mut mask = CoverageMask::new(extent).ok_or_else(too_large)?;
        let palette = self.tables.palette();

        for (j, layer) in self.tables.layers(record).enumerate() {
            let layer = match layer {
                Ok(layer) => layer,
                Err(e) => {
                    log::warn!("{glyph_id}: skipping unreadable layer {j}: {e}");
                    continue;
                }
            };
            let Some(color) = palette.resolve(layer.palette_index, self.foreground) else {
                log::warn!(
                    "{glyph_id}: skipping layer {j} ({}), palette index {} out of range for {} colors",
                    layer.glyph_id,
                    layer.palette_index,
                    palette.len()
                );
                continue;
            };
            mask.clear();
            if let Err(e) = rasterizer.rasterize(layer.glyph_id, &mut mask) {
                log::warn!("{glyph_id}: skipping layer {j} ({}): {e}", layer.glyph_id);
                continue;
            }
            paint_layer(&mut pixels, mask.data(), color);
        }

        Ok(ComposedGlyph {
            glyph_id,
            width: extent.width,
            height: extent.height,
            pixels,
        })
    }

    /// Compose the first base glyph with the given id, if there is one.
    pub fn composite_glyph(
        &self,
        glyph_id: GlyphId16,
        rasterizer: &mut impl GlyphRasterizer,
    ) -> Option<Result<ComposedGlyph, ComposeError>> {
        let record = self.tables.base_glyph(glyph_id)?;
        Some(self.composite(record, rasterizer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(width: u32, height: u32, pixels: Vec<Argb>) -> ComposedGlyph {
        ComposedGlyph {
            glyph_id: GlyphId16::new(1),
            width,
            height,
            pixels,
        }
    }

    #[test]
    fn pixel_access() {
        let red = Argb::new(0xFF, 0xFF, 0, 0);
        let g = glyph(2, 2, vec![Argb::BLACK, red, Argb::WHITE, Argb::TRANSPARENT]);
        assert_eq!(g.pixel(1, 0), Some(red));
        assert_eq!(g.pixel(0, 1), Some(Argb::WHITE));
        assert_eq!(g.pixel(2, 0), None);
        let rows: Vec<_> = g.rows().collect();
        assert_eq!(rows, vec![&[Argb::BLACK, red][..], &[Argb::WHITE, Argb::TRANSPARENT][..]]);
        assert_eq!(g.as_bytes().len(), 16);
        assert_eq!(&g.as_bytes()[..4], &0xFF00_0000u32.to_ne_bytes());
    }

    #[test]
    fn empty_glyph_has_no_rows() {
        let g = glyph(0, 0, Vec::new());
        assert_eq!(g.rows().count(), 0);
        assert!(g.as_bytes().is_empty());
    }

    #[test]
    fn flatten_onto_white() {
        let g = glyph(2, 1, vec![Argb::TRANSPARENT, Argb::BLACK]);
        assert_eq!(g.flatten_onto(Argb::WHITE), vec![Argb::WHITE, Argb::BLACK]);
    }
}
