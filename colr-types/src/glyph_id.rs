//! Glyph identifiers, as stored in base glyph and layer records.

/// A 16-bit glyph identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphId16(u16);

impl GlyphId16 {
    /// Construct a new `GlyphId16`.
    pub const fn new(raw: u16) -> Self {
        GlyphId16(raw)
    }

    /// The identifier as a u16.
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    const fn from_raw_inner(raw: u16) -> Self {
        GlyphId16(raw)
    }
}

impl std::fmt::Display for GlyphId16 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GID_{}", self.0)
    }
}

crate::raw::newtype_scalar!(GlyphId16, u16);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scalar;

    #[test]
    fn display() {
        assert_eq!(GlyphId16::new(42).to_string(), "GID_42");
    }

    #[test]
    fn read_be() {
        assert_eq!(GlyphId16::read(&[0x01, 0x02]), Some(GlyphId16::new(0x0102)));
    }
}
