//! Compositing errors.

use read_colr::types::GlyphId16;

use crate::RasterError;

/// An error that prevents a color glyph from being composed.
///
/// Problems with individual layers are not errors: the layer is skipped and
/// the rest of the glyph is still painted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ComposeError {
    /// The rasterizer could not size the base glyph.
    #[error("failed to rasterize base glyph {glyph_id}: {source}")]
    RasterizeFailed {
        glyph_id: GlyphId16,
        #[source]
        source: RasterError,
    },
}

impl ComposeError {
    /// The base glyph that could not be composed.
    pub fn glyph_id(&self) -> GlyphId16 {
        match self {
            ComposeError::RasterizeFailed { glyph_id, .. } => *glyph_id,
        }
    }
}
