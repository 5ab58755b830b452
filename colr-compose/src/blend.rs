//! Integer alpha compositing of straight-alpha colors.

use read_colr::types::Argb;

/// Paint `color`, masked by `coverage`, over `dst`.
///
/// The source alpha is `coverage * color.alpha / 255` and the result is
/// the source-over rule on straight alpha:
///
/// ```text
/// out.a = src.a + dst.a * (255 - src.a) / 255
/// out.c = (src.c * src.a + dst.c * (255 - src.a)) / 255
/// ```
///
/// All divisions truncate.
pub fn source_over(dst: Argb, coverage: u8, color: Argb) -> Argb {
    let src_a = coverage as u32 * color.alpha() as u32 / 255;
    let inv_a = 255 - src_a;
    let alpha = src_a + dst.alpha() as u32 * inv_a / 255;
    let channel = |src: u8, dst: u8| ((src as u32 * src_a + dst as u32 * inv_a) / 255) as u8;
    Argb::new(
        alpha as u8,
        channel(color.red(), dst.red()),
        channel(color.green(), dst.green()),
        channel(color.blue(), dst.blue()),
    )
}

/// Paint one layer: `color` masked by `mask`, over `pixels`.
///
/// Pixels with zero coverage are left untouched.
pub(crate) fn paint_layer(pixels: &mut [Argb], mask: &[u8], color: Argb) {
    for (dst, coverage) in pixels.iter_mut().zip(mask) {
        if *coverage != 0 {
            *dst = source_over(*dst, *coverage, color);
        }
    }
}

/// Blend a straight-alpha pixel over an opaque `background`.
///
/// The result is always opaque; fully transparent pixels become the
/// background.
pub fn flatten_over(pixel: Argb, background: Argb) -> Argb {
    let alpha = pixel.alpha() as u32;
    if alpha == 0 {
        return background.with_alpha(0xFF);
    }
    let channel = |src: u8, dst: u8| ((src as u32 * alpha + dst as u32 * (255 - alpha)) / 255) as u8;
    Argb::new(
        0xFF,
        channel(pixel.red(), background.red()),
        channel(pixel.green(), background.green()),
        channel(pixel.blue(), background.blue()),
    )
}
