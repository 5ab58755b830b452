//! The [COLR](https://docs.microsoft.com/en-us/typography/opentype/spec/colr) table
//!
//! Only the version 0 base glyph and layer arrays are read. These are present
//! (possibly empty) in every version of the table.

use std::ops::Range;

use types::{GlyphId16, Tag};

use crate::{FontData, ReadError};

/// 'COLR'
pub const TAG: Tag = Tag::new(b"COLR");

/// Size of the version 0 header, in bytes.
pub const HEADER_LEN: usize = 14;

/// A view of a COLR table within a font.
///
/// Array offsets are stored relative to the start of the font data, not the
/// table, so records can be resolved by index arithmetic alone.
#[derive(Clone, Debug)]
pub struct Colr<'a> {
    data: FontData<'a>,
    version: u16,
    num_base_glyph_records: u16,
    base_glyph_records_offset: usize,
    layer_records_offset: usize,
    num_layer_records: u16,
}

impl<'a> Colr<'a> {
    /// Read the header of the COLR table starting at `offset` in `data`.
    ///
    /// Fails with [`ReadError::MalformedTable`] if the header is not entirely
    /// inside the data or its array offsets overflow.
    pub fn read(data: FontData<'a>, offset: usize) -> Result<Self, ReadError> {
        let malformed = |_| ReadError::MalformedTable(TAG);
        if !data.is_safe_range(offset, HEADER_LEN) {
            return Err(ReadError::MalformedTable(TAG));
        }
        let version = data.read_u16(offset).map_err(malformed)?;
        let num_base_glyph_records = data.read_u16(offset + 2).map_err(malformed)?;
        let base_glyph_records_offset = data.read_u32(offset + 4).map_err(malformed)?;
        let layer_records_offset = data.read_u32(offset + 8).map_err(malformed)?;
        let num_layer_records = data.read_u16(offset + 12).map_err(malformed)?;
        let resolve = |rel: u32| {
            usize::try_from(rel)
                .ok()
                .and_then(|rel| offset.checked_add(rel))
                .ok_or(ReadError::MalformedTable(TAG))
        };
        Ok(Colr {
            data,
            version,
            num_base_glyph_records,
            base_glyph_records_offset: resolve(base_glyph_records_offset)?,
            layer_records_offset: resolve(layer_records_offset)?,
            num_layer_records,
        })
    }

    /// The font data this table was read from.
    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    /// The number of base glyph records declared in the header.
    pub fn num_base_glyph_records(&self) -> u16 {
        self.num_base_glyph_records
    }

    /// Absolute offset of the base glyph record array.
    pub fn base_glyph_records_offset(&self) -> usize {
        self.base_glyph_records_offset
    }

    /// Absolute offset of the layer record array.
    pub fn layer_records_offset(&self) -> usize {
        self.layer_records_offset
    }

    /// The number of layer records declared in the header.
    pub fn num_layer_records(&self) -> u16 {
        self.num_layer_records
    }

    /// Returns the base glyph record at `index` in table order.
    pub fn base_glyph_record(&self, index: usize) -> Result<BaseGlyphRecord, ReadError> {
        if index >= self.num_base_glyph_records as usize {
            return Err(ReadError::OutOfBounds);
        }
        let pos = record_position(
            self.base_glyph_records_offset,
            index,
            BaseGlyphRecord::RAW_BYTE_LEN,
        )?;
        if !self.data.is_safe_range(pos, BaseGlyphRecord::RAW_BYTE_LEN) {
            return Err(ReadError::OutOfBounds);
        }
        BaseGlyphRecord::read(self.data, pos)
    }

    /// Returns an iterator over the base glyph records, in table order.
    ///
    /// Iteration stops at the first record that is not entirely inside the
    /// font data, so a truncated table yields the records that precede the
    /// truncation.
    pub fn base_glyph_records(&self) -> impl Iterator<Item = BaseGlyphRecord> + '_ {
        (0..self.num_base_glyph_records as usize)
            .map_while(|index| self.base_glyph_record(index).ok())
    }

    /// Returns the layer record at `index` in the layer array.
    pub fn layer_record(&self, index: usize) -> Result<LayerRecord, ReadError> {
        if index >= self.num_layer_records as usize {
            return Err(ReadError::OutOfBounds);
        }
        let pos = record_position(self.layer_records_offset, index, LayerRecord::RAW_BYTE_LEN)?;
        if !self.data.is_safe_range(pos, LayerRecord::RAW_BYTE_LEN) {
            return Err(ReadError::OutOfBounds);
        }
        LayerRecord::read(self.data, pos)
    }
}

fn record_position(base: usize, index: usize, record_len: usize) -> Result<usize, ReadError> {
    index
        .checked_mul(record_len)
        .and_then(|rel| base.checked_add(rel))
        .ok_or(ReadError::OutOfBounds)
}

/// A [BaseGlyph record](https://learn.microsoft.com/en-us/typography/opentype/spec/colr#baseglyph-and-layer-records).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseGlyphRecord {
    /// Glyph ID of the base glyph.
    pub glyph_id: GlyphId16,
    /// Index to the first layer record.
    pub first_layer_index: u16,
    /// Number of color layers associated with this glyph.
    pub num_layers: u16,
}

impl BaseGlyphRecord {
    pub const RAW_BYTE_LEN: usize = 6;

    fn read(data: FontData, pos: usize) -> Result<Self, ReadError> {
        Ok(BaseGlyphRecord {
            glyph_id: data.read_at(pos)?,
            first_layer_index: data.read_u16(pos + 2)?,
            num_layers: data.read_u16(pos + 4)?,
        })
    }

    /// The indices of this glyph's records in the layer array, in paint order.
    pub fn layer_indices(&self) -> Range<usize> {
        let start = self.first_layer_index as usize;
        start..start + self.num_layers as usize
    }
}

/// A [Layer record](https://learn.microsoft.com/en-us/typography/opentype/spec/colr#baseglyph-and-layer-records).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerRecord {
    /// Glyph ID of the glyph used for a given layer.
    pub glyph_id: GlyphId16,
    /// Index for a palette entry in the CPAL table.
    pub palette_index: u16,
}

impl LayerRecord {
    pub const RAW_BYTE_LEN: usize = 4;

    /// The palette index meaning "use the text foreground color".
    pub const FOREGROUND_PALETTE_INDEX: u16 = 0xFFFF;

    fn read(data: FontData, pos: usize) -> Result<Self, ReadError> {
        Ok(LayerRecord {
            glyph_id: data.read_at(pos)?,
            palette_index: data.read_u16(pos + 2)?,
        })
    }

    /// Returns `true` if this layer is painted with the foreground color.
    pub fn uses_foreground(&self) -> bool {
        self.palette_index == Self::FOREGROUND_PALETTE_INDEX
    }
}
