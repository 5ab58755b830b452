//! Errors that occur when interpreting font data

use types::Tag;

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// An offset or length pointed outside the data.
    OutOfBounds,
    /// A table header could not be read; the table is unusable.
    MalformedTable(Tag),
    /// The font does not contain a required table.
    TableIsMissing(Tag),
    /// The data does not begin with a known sfnt version.
    InvalidSfnt(u32),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::MalformedTable(tag) => write!(f, "the {tag} table header is malformed"),
            ReadError::TableIsMissing(tag) => write!(f, "the {tag} table is missing"),
            ReadError::InvalidSfnt(ver) => write!(f, "Invalid sfnt version 0x{ver:08X}"),
        }
    }
}

impl std::error::Error for ReadError {}
