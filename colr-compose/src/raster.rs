//! The interface to an outline rasterizer.

use read_colr::types::GlyphId16;

/// Size of a glyph bitmap, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The number of pixels, or `None` if that does not fit in a `usize`.
    pub fn area(&self) -> Option<usize> {
        let width = usize::try_from(self.width).ok()?;
        let height = usize::try_from(self.height).ok()?;
        width.checked_mul(height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An 8-bit per pixel coverage image, stored row-major from the top.
///
/// Each value is how much of the pixel is covered by the glyph outline,
/// where 255 is fully covered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageMask {
    extent: Extent,
    data: Vec<u8>,
}

impl CoverageMask {
    /// Create an empty (all zero) mask.
    ///
    /// Returns `None` if the mask cannot be allocated.
    pub fn new(extent: Extent) -> Option<Self> {
        Some(Self {
            extent,
            data: try_filled(extent.area()?, 0)?,
        })
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn width(&self) -> u32 {
        self.extent.width
    }

    pub fn height(&self) -> u32 {
        self.extent.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The coverage values, for a rasterizer to write into.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.index(x, y).map(|ix| self.data[ix])
    }

    /// Set the coverage of one pixel. Writes outside the mask are ignored.
    pub fn set(&mut self, x: u32, y: u32, coverage: u8) {
        if let Some(ix) = self.index(x, y) {
            self.data[ix] = coverage;
        }
    }

    /// Set every pixel of the mask to `coverage`.
    pub fn fill(&mut self, coverage: u8) {
        self.data.fill(coverage);
    }

    /// Reset every pixel to zero coverage.
    pub fn clear(&mut self) {
        self.fill(0);
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.extent.width && y < self.extent.height)
            .then(|| y as usize * self.extent.width as usize + x as usize)
    }
}

/// A vector of `len` copies of `value`, or `None` if the allocation fails.
///
/// Glyph extents come from the rasterizer, so bitmap sizes are untrusted.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Option<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).ok()?;
    buf.resize(len, value);
    Some(buf)
}

/// An error reported by a [`GlyphRasterizer`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    /// The glyph is not present in the font.
    #[error("glyph {0} was not found")]
    GlyphNotFound(GlyphId16),
    /// The glyph's bitmap would be too large to allocate.
    #[error("a {}x{} bitmap is too large", .0.width, .0.height)]
    ExtentTooLarge(Extent),
    /// Any other failure in the rasterizer.
    #[error("rasterizer failed: {0}")]
    Backend(String),
}

/// Interface to a rasterizer for single glyph outlines.
///
/// The rasterizer is configured externally (font, scale, orientation); the
/// compositor only asks it for glyph sizes and coverage.
pub trait GlyphRasterizer {
    /// Returns the size of the bitmap for `glyph_id` at the configured scale.
    ///
    /// This is called once per color glyph, with the base glyph id, and
    /// determines the size of the composed bitmap and of every layer mask.
    fn glyph_extent(&mut self, glyph_id: GlyphId16) -> Result<Extent, RasterError>;

    /// Render the coverage of `glyph_id` into `mask`.
    ///
    /// The mask has the extent of the base glyph and is all zero on entry.
    fn rasterize(&mut self, glyph_id: GlyphId16, mask: &mut CoverageMask)
        -> Result<(), RasterError>;
}

impl<T: GlyphRasterizer + ?Sized> GlyphRasterizer for &mut T {
    fn glyph_extent(&mut self, glyph_id: GlyphId16) -> Result<Extent, RasterError> {
        (**self).glyph_extent(glyph_id)
    }

    fn rasterize(
        &mut self,
        glyph_id: GlyphId16,
        mask: &mut CoverageMask,
    ) -> Result<(), RasterError> {
        (**self).rasterize(glyph_id, mask)
    }
}
