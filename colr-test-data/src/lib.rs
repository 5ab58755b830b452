//! test data shared between the colr crates.
//!
//! Everything here is built in memory from big-endian primitives, so tests
//! can describe exactly which bytes are present (and which are missing).

mod be_buffer;
pub mod colr;
pub mod cpal;
pub mod sfnt;

pub use be_buffer::{BeBuffer, BeScalar};

/// Glyph ids used by [`simple_color_font`].
pub mod gids {
    /// base glyph with two layers: a full black square and a white dot.
    pub const SQUARE_WITH_DOT: u16 = 10;
    /// base glyph with a single red layer.
    pub const RED_CIRCLE: u16 = 11;
    /// base glyph with no layers.
    pub const EMPTY: u16 = 12;
    /// base glyph whose layer uses the foreground color.
    pub const FOREGROUND: u16 = 13;

    pub const LAYER_SQUARE: u16 = 1;
    pub const LAYER_DOT: u16 = 2;
    pub const LAYER_CIRCLE: u16 = 3;
}

/// Palette used by [`simple_color_font`], in `[b, g, r, a]` record order.
pub const SIMPLE_PALETTE: [[u8; 4]; 3] = [
    [0x00, 0x00, 0x00, 0xFF], // black
    [0xFF, 0xFF, 0xFF, 0xFF], // white
    [0x00, 0x00, 0xFF, 0xFF], // red
];

/// The COLR table of [`simple_color_font`].
pub fn simple_colr() -> BeBuffer {
    use gids::*;
    colr::build(
        &[
            (SQUARE_WITH_DOT, 0, 2),
            (RED_CIRCLE, 2, 1),
            (EMPTY, 3, 0),
            (FOREGROUND, 3, 1),
        ],
        &[
            (LAYER_SQUARE, 0),
            (LAYER_DOT, 1),
            (LAYER_CIRCLE, 2),
            (LAYER_SQUARE, 0xFFFF),
        ],
    )
}

/// The CPAL table of [`simple_color_font`].
pub fn simple_cpal() -> BeBuffer {
    cpal::build(&[&SIMPLE_PALETTE])
}

/// A complete sfnt containing a COLR table with four base glyphs and a
/// CPAL table with a single three color palette.
pub fn simple_color_font() -> Vec<u8> {
    sfnt::build(&[
        (*b"COLR", simple_colr().as_slice()),
        (*b"CPAL", simple_cpal().as_slice()),
    ])
}

/// An sfnt with no color tables.
pub fn monochrome_font() -> Vec<u8> {
    let head = BeBuffer::new().extend([0u32; 4]);
    sfnt::build(&[(*b"head", head.as_slice())])
}
