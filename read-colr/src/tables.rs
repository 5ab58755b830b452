//! The color font tables.

pub mod colr;
pub mod cpal;
