use colr_compose::{
    raw::{
        decode_color_tables,
        types::{Argb, GlyphId16},
        FontData,
    },
    ColorGlyphCache, Compositor, CoverageMask, Extent, GlyphRasterizer, RasterError,
};
use criterion::{criterion_group, criterion_main, Criterion};

const GLYPH_COUNT: u16 = 256;

fn composite(c: &mut Criterion) {
    let colr = colr_test_data::colr::sequential(GLYPH_COUNT);
    let mut data = colr.to_vec();
    data.extend_from_slice(&colr_test_data::cpal::grayscale(GLYPH_COUNT));
    let tables = decode_color_tables(FontData::new(&data), 0, colr.len()).unwrap();

    for size in [16, 64] {
        let mut rasterizer = FillRasterizer(Extent::new(size, size));
        c.bench_function(&format!("composite_{size}px"), |b| {
            let compositor = Compositor::new(&tables);
            b.iter(|| {
                for record in tables.base_glyphs() {
                    let _ = compositor.composite(record, &mut rasterizer).unwrap();
                }
            })
        });
        c.bench_function(&format!("build_cache_{size}px"), |b| {
            b.iter(|| ColorGlyphCache::build(tables.clone(), Argb::BLACK, &mut rasterizer))
        });
    }
}

criterion_group!(benches, composite);
criterion_main!(benches);

/// Covers every pixel of every glyph at partial coverage.
struct FillRasterizer(Extent);

impl GlyphRasterizer for FillRasterizer {
    fn glyph_extent(&mut self, _: GlyphId16) -> Result<Extent, RasterError> {
        Ok(self.0)
    }

    fn rasterize(&mut self, _: GlyphId16, mask: &mut CoverageMask) -> Result<(), RasterError> {
        mask.fill(200);
        Ok(())
    }
}
