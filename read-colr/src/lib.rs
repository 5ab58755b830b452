//! Reading color font tables
//!
//! This crate provides memory safe parsing of the layered color glyph
//! tables of an OpenType font: [`COLR`][colr] (base glyph to layer list)
//! and [`CPAL`][cpal] (color palettes).
//!
//! All access to font bytes goes through [`FontData`], which bounds checks
//! every read. Font data is treated as untrusted: headers that cannot be
//! read are reported as [`ReadError::MalformedTable`], while arrays that are
//! truncated part way through produce the records that could be read.
//!
//! Compositing the layers into pixels lives in the `colr-compose` crate.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use read_colr::{ColorTables, FontRef};
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let font = FontRef::new(&font_bytes).expect("failed to read font data");
//! match ColorTables::from_font(&font).expect("malformed color tables") {
//!     Some(tables) => println!("{} color glyphs", tables.base_glyphs().len()),
//!     None => println!("no color glyphs"),
//! }
//! ```
//!
//! [colr]: https://learn.microsoft.com/en-us/typography/opentype/spec/colr
//! [cpal]: https://learn.microsoft.com/en-us/typography/opentype/spec/cpal

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod color_tables;
mod font_data;
mod font_ref;
mod read;
pub mod tables;

/// Public re-export of the colr-types crate.
pub extern crate colr_types as types;

pub use color_tables::{decode_color_tables, ColorTables, Layers};
pub use font_data::FontData;
pub use font_ref::{FontRef, TableDirectory, TableRecord};
pub use read::ReadError;
