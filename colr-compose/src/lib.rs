//! Compositing of layered color glyphs.
//!
//! A COLR version 0 color glyph is a stack of ordinary glyph outlines, each
//! painted with a single palette color. This crate paints those stacks into
//! straight-alpha ARGB bitmaps:
//!
//! - [`GlyphRasterizer`] is the seam to an outline rasterizer, which turns
//!   one glyph into an 8-bit [`CoverageMask`].
//! - [`Compositor`] paints the layers of one base glyph back to front with
//!   the [`source_over`] rule.
//! - [`ColorGlyphCache`] composes every base glyph of a font up front and
//!   owns the results.
//!
//! The font tables themselves are read by the [`raw`] crate.
//!
//! ```no_run
//! use colr_compose::{
//!     raw::{types::Argb, FontRef},
//!     ColorGlyphCache, GlyphRasterizer,
//! };
//!
//! fn load(font_bytes: &[u8], rasterizer: &mut impl GlyphRasterizer) {
//!     let font = FontRef::new(font_bytes).expect("not a font");
//!     match ColorGlyphCache::from_font(&font, Argb::BLACK, rasterizer).expect("malformed tables") {
//!         Some(cache) => {
//!             for glyph in cache.iter() {
//!                 println!("{}: {}x{}", glyph.glyph_id(), glyph.width(), glyph.height());
//!             }
//!         }
//!         None => println!("no color glyphs, fall back to monochrome rendering"),
//!     }
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod blend;
mod cache;
mod composite;
mod error;
mod raster;

/// Expose our "raw" underlying parser crate.
pub extern crate read_colr as raw;

pub use blend::{flatten_over, source_over};
pub use cache::ColorGlyphCache;
pub use composite::{ComposedGlyph, Compositor};
pub use error::ComposeError;
pub use raster::{CoverageMask, Extent, GlyphRasterizer, RasterError};
