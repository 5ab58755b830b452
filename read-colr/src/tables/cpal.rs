//! The [CPAL](https://docs.microsoft.com/en-us/typography/opentype/spec/cpal) table

use types::{Argb, Tag};

use crate::{FontData, ReadError};

/// 'CPAL'
pub const TAG: Tag = Tag::new(b"CPAL");

/// Size of the header fields that precede the palette index array.
pub const FIXED_HEADER_LEN: usize = 12;

const COLOR_RECORD_LEN: usize = 4;

/// A view of a CPAL table within a font.
#[derive(Clone, Debug)]
pub struct Cpal<'a> {
    data: FontData<'a>,
    version: u16,
    num_palette_entries: u16,
    num_palettes: u16,
    num_color_records: u16,
    color_records_offset: usize,
    first_palette_start: Option<u16>,
}

impl<'a> Cpal<'a> {
    /// Read the header of the CPAL table starting at `offset` in `data`.
    ///
    /// The header includes the start index of the first palette when the
    /// table declares any palettes. Fails with [`ReadError::MalformedTable`]
    /// if those fields are not entirely inside the data.
    pub fn read(data: FontData<'a>, offset: usize) -> Result<Self, ReadError> {
        let malformed = |_| ReadError::MalformedTable(TAG);
        if !data.is_safe_range(offset, FIXED_HEADER_LEN) {
            return Err(ReadError::MalformedTable(TAG));
        }
        let version = data.read_u16(offset).map_err(malformed)?;
        let num_palette_entries = data.read_u16(offset + 2).map_err(malformed)?;
        let num_palettes = data.read_u16(offset + 4).map_err(malformed)?;
        let num_color_records = data.read_u16(offset + 6).map_err(malformed)?;
        let color_records_offset = data.read_u32(offset + 8).map_err(malformed)?;
        let color_records_offset = usize::try_from(color_records_offset)
            .ok()
            .and_then(|rel| offset.checked_add(rel))
            .ok_or(ReadError::MalformedTable(TAG))?;
        let first_palette_start = if num_palettes > 0 {
            if !data.is_safe_range(offset + FIXED_HEADER_LEN, 2) {
                return Err(ReadError::MalformedTable(TAG));
            }
            Some(data.read_u16(offset + FIXED_HEADER_LEN).map_err(malformed)?)
        } else {
            None
        };
        Ok(Cpal {
            data,
            version,
            num_palette_entries,
            num_palettes,
            num_color_records,
            color_records_offset,
            first_palette_start,
        })
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    /// Number of colors in each palette.
    pub fn num_palette_entries(&self) -> u16 {
        self.num_palette_entries
    }

    pub fn num_palettes(&self) -> u16 {
        self.num_palettes
    }

    /// Total number of color records, combined for all palettes.
    pub fn num_color_records(&self) -> u16 {
        self.num_color_records
    }

    /// Absolute offset of the color record array.
    pub fn color_records_offset(&self) -> usize {
        self.color_records_offset
    }

    /// Returns the color record at `index` in the color record array.
    pub fn color_record(&self, index: usize) -> Result<Argb, ReadError> {
        if index >= self.num_color_records as usize {
            return Err(ReadError::OutOfBounds);
        }
        let pos = index
            .checked_mul(COLOR_RECORD_LEN)
            .and_then(|rel| self.color_records_offset.checked_add(rel))
            .ok_or(ReadError::OutOfBounds)?;
        if !self.data.is_safe_range(pos, COLOR_RECORD_LEN) {
            return Err(ReadError::OutOfBounds);
        }
        self.data.read_at(pos)
    }

    /// Decode the first palette.
    ///
    /// Decoding stops at the first color record that cannot be read, so a
    /// truncated color array yields a shorter palette rather than an error.
    pub fn first_palette(&self) -> Palette {
        let Some(start) = self.first_palette_start else {
            return Palette::default();
        };
        let start = start as usize;
        (start..start + self.num_palette_entries as usize)
            .map_while(|index| self.color_record(index).ok())
            .collect()
    }
}

/// An ordered set of colors, referenced by index from layer records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    colors: Vec<Argb>,
}

impl Palette {
    pub fn new(colors: Vec<Argb>) -> Self {
        Palette { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Argb> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[Argb] {
        &self.colors
    }

    /// Resolve a layer's palette index to a color.
    ///
    /// The index `0xFFFF` selects `foreground`. Any other index must be less
    /// than the palette length; otherwise this returns `None`.
    pub fn resolve(&self, palette_index: u16, foreground: Argb) -> Option<Argb> {
        if palette_index == super::colr::LayerRecord::FOREGROUND_PALETTE_INDEX {
            Some(foreground)
        } else {
            self.get(palette_index as usize)
        }
    }
}

impl FromIterator<Argb> for Palette {
    fn from_iter<T: IntoIterator<Item = Argb>>(iter: T) -> Self {
        Palette {
            colors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colr_test_data::{cpal, BeBuffer};
    use pretty_assertions::assert_eq;

    #[test]
    fn read_sample() {
        let buf = cpal::build(&[
            &[[0x00, 0x00, 0xFF, 0xFF], [0x00, 0xFF, 0xFF, 0xFF]],
            &[[0xAA, 0x00, 0xFF, 0xFF], [0xAA, 0xFF, 0xFF, 0x80]],
        ]);
        let table = Cpal::read(FontData::new(&buf), 0).unwrap();
        assert_eq!(table.version(), 0);
        assert_eq!(table.num_palette_entries(), 2);
        assert_eq!(table.num_palettes(), 2);
        assert_eq!(table.num_color_records(), 4);
        assert_eq!(table.color_records_offset(), 16);
        assert_eq!(
            table.color_record(3).unwrap(),
            Argb::new(0x80, 0xFF, 0xFF, 0xAA)
        );

        // only the first palette is decoded
        let palette = table.first_palette();
        assert_eq!(
            palette.colors(),
            &[
                Argb::new(0xFF, 0xFF, 0x00, 0x00),
                Argb::new(0xFF, 0xFF, 0xFF, 0x00)
            ]
        );
    }

    #[test]
    fn short_header_is_malformed() {
        let buf = cpal::grayscale(2);
        for len in [0, 11, 13] {
            assert_eq!(
                Cpal::read(FontData::new(&buf[..len]), 0).err(),
                Some(ReadError::MalformedTable(TAG)),
                "header truncated to {len} bytes"
            );
        }
    }

    #[test]
    fn no_palettes() {
        let buf = cpal::build(&[]);
        let table = Cpal::read(FontData::new(&buf[..cpal::FIXED_HEADER_LEN]), 0).unwrap();
        assert_eq!(table.num_palettes(), 0);
        assert!(table.first_palette().is_empty());
    }

    #[test]
    fn truncated_color_array() {
        let buf = cpal::grayscale(6);
        let truncated = &buf[..cpal::color_record_end(2) + 1];
        let palette = Cpal::read(FontData::new(truncated), 0)
            .unwrap()
            .first_palette();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.get(2), Some(Argb::new(0xFF, 2, 2, 2)));
    }

    /// One palette of two entries starting at record 2 of four.
    fn offset_palette(num_color_records: u16) -> BeBuffer {
        BeBuffer::new()
            .push(0u16) // version
            .push(2u16) // numPaletteEntries
            .push(1u16) // numPalettes
            .push(num_color_records)
            .push(14u32) // colorRecordsArrayOffset
            .push(2u16) // colorRecordIndices[0]
            .extend::<[u8; 4]>([
                [0x00, 0x00, 0x00, 0xFF],
                [0x11, 0x11, 0x11, 0xFF],
                [0xFF, 0x00, 0x00, 0xFF],
                [0x00, 0xFF, 0x00, 0x80],
            ])
    }

    #[test]
    fn palette_starts_at_record_index() {
        let buf = offset_palette(4);
        let palette = Cpal::read(FontData::new(buf.as_slice()), 0)
            .unwrap()
            .first_palette();
        assert_eq!(
            palette.colors(),
            &[
                Argb::new(0xFF, 0x00, 0x00, 0xFF),
                Argb::new(0x80, 0x00, 0xFF, 0x00)
            ]
        );
    }

    #[test]
    fn palette_stops_at_color_record_count() {
        // the fourth record is present but not counted
        let buf = offset_palette(3);
        let table = Cpal::read(FontData::new(buf.as_slice()), 0).unwrap();
        assert_eq!(table.color_record(3), Err(ReadError::OutOfBounds));
        assert_eq!(
            table.first_palette().colors(),
            &[Argb::new(0xFF, 0x00, 0x00, 0xFF)]
        );
    }

    #[test]
    fn resolve_palette_index() {
        let palette = Palette::new(vec![Argb::WHITE, Argb::new(0xFF, 0xFF, 0, 0)]);
        let fg = Argb::new(0xFF, 0, 0, 0xFF);
        assert_eq!(palette.resolve(1, fg), Some(Argb::new(0xFF, 0xFF, 0, 0)));
        assert_eq!(palette.resolve(0xFFFF, fg), Some(fg));
        // an index equal to the length is out of range
        assert_eq!(palette.resolve(2, fg), None);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn palette_serde() {
        let palette: Palette = Cpal::read(FontData::new(&cpal::grayscale(2)), 0)
            .unwrap()
            .first_palette();
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r#"{"colors":[4278190080,4278255873]}"#);
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }
}
