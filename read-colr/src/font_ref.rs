//! Locating tables in an sfnt font file.

use std::ops::Range;

use types::{Tag, CFF_SFNT_VERSION, TRUE_SFNT_VERSION, TT_SFNT_VERSION};

use crate::{FontData, ReadError};

const TABLE_DIRECTORY_HEADER_LEN: usize = 12;

/// A record in the [table directory](https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRecord {
    pub tag: Tag,
    pub checksum: u32,
    pub offset: u32,
    pub length: u32,
}

impl TableRecord {
    pub const RAW_BYTE_LEN: usize = 16;

    fn read(data: FontData, offset: usize) -> Result<Self, ReadError> {
        Ok(TableRecord {
            tag: data.read_at(offset)?,
            checksum: data.read_u32(offset + 4)?,
            offset: data.read_u32(offset + 8)?,
            length: data.read_u32(offset + 12)?,
        })
    }

    /// The byte range of the table in the font data, if the offset is non-null
    /// and the range does not overflow.
    pub fn range(&self) -> Option<Range<usize>> {
        let start = usize::try_from(self.offset).ok().filter(|off| *off != 0)?;
        let end = start.checked_add(usize::try_from(self.length).ok()?)?;
        Some(start..end)
    }
}

/// The table directory at the start of an sfnt.
#[derive(Clone, Debug)]
pub struct TableDirectory<'a> {
    sfnt_version: u32,
    records: FontData<'a>,
    num_tables: u16,
}

impl<'a> TableDirectory<'a> {
    /// Read the table directory, validating that every record is in bounds.
    pub fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let sfnt_version = data.read_u32(0)?;
        let num_tables = data.read_u16(4)?;
        let records_len = num_tables as usize * TableRecord::RAW_BYTE_LEN;
        let records = data
            .slice(TABLE_DIRECTORY_HEADER_LEN..TABLE_DIRECTORY_HEADER_LEN + records_len)
            .ok_or(ReadError::OutOfBounds)?;
        Ok(TableDirectory {
            sfnt_version,
            records,
            num_tables,
        })
    }

    pub fn sfnt_version(&self) -> u32 {
        self.sfnt_version
    }

    pub fn num_tables(&self) -> u16 {
        self.num_tables
    }

    /// Returns an iterator over the table records, in directory order.
    pub fn table_records(&self) -> impl Iterator<Item = TableRecord> + 'a {
        let records = self.records;
        (0..self.num_tables as usize)
            .filter_map(move |i| TableRecord::read(records, i * TableRecord::RAW_BYTE_LEN).ok())
    }

    fn is_sorted(&self) -> bool {
        let mut last_tag = Tag::new(&[0u8; 4]);

        for tag in self.table_records().map(|rec| rec.tag) {
            if tag <= last_tag {
                return false;
            }

            last_tag = tag;
        }

        true
    }

    fn find(&self, tag: Tag, sorted: bool) -> Option<TableRecord> {
        if !sorted {
            return self.table_records().find(|rec| rec.tag == tag);
        }
        let (mut lo, mut hi) = (0usize, self.num_tables as usize);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let rec = TableRecord::read(self.records, mid * TableRecord::RAW_BYTE_LEN).ok()?;
            match rec.tag.cmp(&tag) {
                std::cmp::Ordering::Less => lo = mid + 1,
                std::cmp::Ordering::Greater => hi = mid,
                std::cmp::Ordering::Equal => return Some(rec),
            }
        }
        None
    }
}

/// Reference to an in-memory font.
///
/// This owns nothing: it is a view over the borrowed font file, used to
/// locate the byte ranges of named tables.
#[derive(Clone)]
pub struct FontRef<'a> {
    data: FontData<'a>,
    table_directory: TableDirectory<'a>,
    // Fonts are required to have a sorted table directory, but certain
    // fonts don't follow that requirement.
    table_directory_sorted: bool,
}

impl<'a> FontRef<'a> {
    /// Creates a new reference to an in-memory font backed by the given data.
    ///
    /// The data must be a single font (not a font collection) and must begin
    /// with a [table directory].
    ///
    /// [table directory]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory
    pub fn new(data: &'a [u8]) -> Result<Self, ReadError> {
        let data = FontData::new(data);
        let table_directory = TableDirectory::read(data)?;
        if ![TT_SFNT_VERSION, CFF_SFNT_VERSION, TRUE_SFNT_VERSION]
            .contains(&table_directory.sfnt_version())
        {
            return Err(ReadError::InvalidSfnt(table_directory.sfnt_version()));
        }
        let table_directory_sorted = table_directory.is_sorted();
        Ok(FontRef {
            data,
            table_directory,
            table_directory_sorted,
        })
    }

    /// Returns the underlying font data.
    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    pub fn table_directory(&self) -> &TableDirectory<'a> {
        &self.table_directory
    }

    /// Returns the byte range of the table with the specified tag, if it is
    /// present and lies entirely inside the font data.
    pub fn table_range(&self, tag: Tag) -> Option<Range<usize>> {
        let range = self
            .table_directory
            .find(tag, self.table_directory_sorted)?
            .range()?;
        self.data
            .is_safe_range(range.start, range.len())
            .then_some(range)
    }

    /// Returns the offset of the table with the specified tag from the start
    /// of the font data.
    pub fn table_offset(&self, tag: Tag) -> Option<usize> {
        self.table_range(tag).map(|range| range.start)
    }

    /// Returns the data for the table with the specified tag, if present.
    pub fn table_data(&self, tag: Tag) -> Option<FontData<'a>> {
        self.table_range(tag).and_then(|range| self.data.slice(range))
    }
}
