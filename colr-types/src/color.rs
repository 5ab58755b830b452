//! Packed 32-bit colors.

use bytemuck::{Pod, Zeroable};

/// A color with straight (non-premultiplied) alpha, packed as `0xAARRGGBB`.
///
/// This is the pixel format of composed color glyphs and the in-memory
/// format of palette entries.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Argb(u32);

impl Argb {
    /// Fully transparent black, the value of a cleared accumulator.
    pub const TRANSPARENT: Argb = Argb(0);
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Create a color from its channels.
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Argb(u32::from_be_bytes([alpha, red, green, blue]))
    }

    /// Create a color from bytes stored in blue, green, red, alpha order.
    ///
    /// This is the layout of a CPAL color record.
    pub const fn from_bgra(bytes: [u8; 4]) -> Self {
        let [blue, green, red, alpha] = bytes;
        Self::new(alpha, red, green, blue)
    }

    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    pub const fn red(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    pub const fn green(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    pub const fn blue(self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    /// Returns this color with the alpha channel replaced.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::new(alpha, self.red(), self.green(), self.blue())
    }

    const fn from_raw_inner(raw: [u8; 4]) -> Self {
        Self::from_bgra(raw)
    }
}

// a CPAL color record is four single bytes, not a big-endian integer
impl crate::Scalar for Argb {
    const RAW_BYTE_LEN: usize = 4;

    fn read(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(Self::from_raw_inner)
    }
}

impl std::fmt::Debug for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl std::fmt::Display for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scalar;

    #[test]
    fn channels() {
        let color = Argb::new(0x80, 0x11, 0x22, 0x33);
        assert_eq!(bytemuck::cast::<Argb, u32>(color), 0x8011_2233);
        assert_eq!(
            [color.alpha(), color.red(), color.green(), color.blue()],
            [0x80, 0x11, 0x22, 0x33]
        );
    }

    #[test]
    fn bgra_reorders_channels() {
        let color = Argb::from_bgra([0x33, 0x22, 0x11, 0x80]);
        assert_eq!(color, Argb::new(0x80, 0x11, 0x22, 0x33));
        assert_eq!(Argb::read(&[0xFF, 0x00, 0x00, 0xFF]), Some(Argb::new(0xFF, 0, 0, 0xFF)));
    }

    #[test]
    fn display_is_css_order() {
        assert_eq!(Argb::new(0x80, 0x11, 0x22, 0x33).to_string(), "#11223380");
        assert_eq!(format!("{:?}", Argb::BLACK), "#FF000000");
    }

    #[test]
    fn as_bytes() {
        let pixels = [Argb::WHITE, Argb::TRANSPARENT];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[..4], &[0xFF; 4]);
    }
}
