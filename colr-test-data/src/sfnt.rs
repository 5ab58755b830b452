//! Minimal sfnt containers.

use crate::BeBuffer;

pub const TT_SFNT_VERSION: u32 = 0x00010000;

const TABLE_RECORD_LEN: usize = 16;

/// Wrap tables in an sfnt table directory.
///
/// Tables are written in the order given, each padded to four bytes, and
/// the directory records are sorted by tag as the format requires.
/// Checksums are not computed.
pub fn build(tables: &[([u8; 4], &[u8])]) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    let mut dir = BeBuffer::new()
        .push(TT_SFNT_VERSION)
        .push(num_tables)
        .push(0u16) // searchRange
        .push(0u16) // entrySelector
        .push(0u16); // rangeShift

    let mut offset = dir.len() + tables.len() * TABLE_RECORD_LEN;
    let mut records = Vec::new();
    let mut body = Vec::new();
    for (tag, data) in tables {
        records.push((*tag, offset as u32, data.len() as u32));
        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = dir.len() + tables.len() * TABLE_RECORD_LEN + body.len();
    }
    records.sort_by_key(|(tag, ..)| *tag);
    for (tag, offset, len) in records {
        dir = dir.push(tag).push(0u32).push(offset).push(len);
    }
    let mut out = dir.into_vec();
    out.extend_from_slice(&body);
    out
}
