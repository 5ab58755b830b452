use std::fmt::{Debug, Display, Formatter};

/// An OpenType table tag.
///
/// Tags read from a font are not validated, since malformed fonts may
/// contain anything. Non-printable bytes are escaped when displayed.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Tag([u8; 4]);

impl Tag {
    /// Construct a `Tag` from raw bytes.
    pub const fn new(src: &[u8; 4]) -> Tag {
        Tag(*src)
    }

    /// Return the memory representation of this tag.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0
    }

    const fn from_raw_inner(raw: u32) -> Self {
        Tag(raw.to_be_bytes())
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for byte in self.0 {
            if (0x20..=0x7E).contains(&byte) {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "{{0x{byte:02X}}}")?;
            }
        }
        Ok(())
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tag({self})")
    }
}

crate::raw::newtype_scalar!(Tag, u32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scalar;

    #[test]
    fn display() {
        assert_eq!(Tag::new(b"CPAL").to_string(), "CPAL");
        assert_eq!(Tag::new(&[b'a', 0, b'b', 0xFF]).to_string(), "a{0x00}b{0xFF}");
        assert_eq!(format!("{:?}", Tag::new(b"COLR")), "Tag(COLR)");
    }

    #[test]
    fn read_from_font_bytes() {
        assert_eq!(Tag::read(b"COLR"), Some(Tag::new(b"COLR")));
        assert_eq!(Tag::read(b"CPA"), None);
        // sorting by tag matches sorting the big-endian integers
        assert!(Tag::new(b"COLR") < Tag::new(b"CPAL"));
    }
}
