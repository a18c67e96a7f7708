//! Little-endian field access over raw container bytes
//!
//! Every multi-byte number in a `.max` file is little-endian. All accessors
//! are bounds-checked and report [`Error::Truncated`] instead of reading or
//! writing past the end of the buffer.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};

fn field(data: &[u8], offset: usize, needed: usize) -> Result<&[u8]> {
    offset
        .checked_add(needed)
        .and_then(|end| data.get(offset..end))
        .ok_or(Error::Truncated {
            offset,
            needed,
            len: data.len(),
        })
}

fn field_mut(data: &mut [u8], offset: usize, needed: usize) -> Result<&mut [u8]> {
    let len = data.len();
    offset
        .checked_add(needed)
        .and_then(|end| data.get_mut(offset..end))
        .ok_or(Error::Truncated {
            offset,
            needed,
            len,
        })
}

/// Read a `u16` at `offset`.
pub fn read_u16_le(data: &[u8], offset: usize) -> Result<u16> {
    field(data, offset, 2).map(LittleEndian::read_u16)
}

/// Read a `u32` at `offset`.
pub fn read_u32_le(data: &[u8], offset: usize) -> Result<u32> {
    field(data, offset, 4).map(LittleEndian::read_u32)
}

/// Read an `i32` at `offset`.
pub fn read_i32_le(data: &[u8], offset: usize) -> Result<i32> {
    field(data, offset, 4).map(LittleEndian::read_i32)
}

/// Overwrite the `u16` at `offset`.
pub fn write_u16_le(data: &mut [u8], offset: usize, value: u16) -> Result<()> {
    LittleEndian::write_u16(field_mut(data, offset, 2)?, value);
    Ok(())
}

/// Overwrite the `u32` at `offset`.
pub fn write_u32_le(data: &mut [u8], offset: usize, value: u32) -> Result<()> {
    LittleEndian::write_u32(field_mut(data, offset, 4)?, value);
    Ok(())
}
