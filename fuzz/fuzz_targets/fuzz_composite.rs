#![no_main]
use colr_compose::{
    raw::{
        types::{Argb, GlyphId16},
        FontRef,
    },
    ColorGlyphCache, CoverageMask, Extent, GlyphRasterizer, RasterError,
};
use libfuzzer_sys::fuzz_target;

// keeps allocations small no matter what the glyph ids are
const MAX_SIZE: u32 = 32;

/// Derives extents and coverage from the glyph id, and fails for some ids.
struct GlyphIdRasterizer;

impl GlyphRasterizer for GlyphIdRasterizer {
    fn glyph_extent(&mut self, glyph_id: GlyphId16) -> Result<Extent, RasterError> {
        let gid = glyph_id.to_u16() as u32;
        if gid % 7 == 3 {
            return Err(RasterError::GlyphNotFound(glyph_id));
        }
        Ok(Extent::new(gid % MAX_SIZE, (gid / MAX_SIZE) % MAX_SIZE))
    }

    fn rasterize(
        &mut self,
        glyph_id: GlyphId16,
        mask: &mut CoverageMask,
    ) -> Result<(), RasterError> {
        let gid = glyph_id.to_u16();
        if gid % 5 == 1 {
            return Err(RasterError::Backend("fuzz".into()));
        }
        for (i, coverage) in mask.data_mut().iter_mut().enumerate() {
            *coverage = (i as u16).wrapping_mul(gid) as u8;
        }
        Ok(())
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(font) = FontRef::new(data) else {
        return;
    };
    let foreground = Argb::new(0x80, 0x10, 0x20, 0x30);
    let Ok(Some(cache)) = ColorGlyphCache::from_font(&font, foreground, &mut GlyphIdRasterizer)
    else {
        return;
    };
    for glyph in cache.iter() {
        let _ = glyph.flatten_onto(Argb::WHITE);
        assert_eq!(glyph.pixels().len(), (glyph.width() * glyph.height()) as usize);
    }
});
