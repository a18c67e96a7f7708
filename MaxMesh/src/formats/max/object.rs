//! Read-only views of `OBJX` record contents
//!
//! Field names follow the game's `GameObjectHdrType` layout. Only the counts
//! and the identity signature matter for editing; everything else here is for
//! inspection.

use glam::{IVec3, Vec3};
use serde::Serialize;

use super::codec::{read_i32_le, read_u16_le, read_u32_le};
use super::index::find_tag_offsets;
use super::{
    COORDINATE_SCALE, FACE_TAG, RECORD_FACE_COUNT_OFFSET, RECORD_MIN_LEN,
    RECORD_VERTEX_COUNT_OFFSET, SIGNATURE_OFFSET, SIGNATURE_SIZE, VERTEX_ARRAY_OFFSET, VERTEX_SIZE,
};
use crate::error::{Error, Result};

const NAME_OFFSET: usize = 24;
const NAME_SIZE: usize = 24;
const TEXTURE_OFFSET: usize = 48;
const TEXTURE_SIZE: usize = 64;

/// Fixed header of an `OBJX` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectHeader {
    /// Declared size, excluding the 12-byte identity block.
    pub size: u32,
    pub vertex_count: u16,
    pub face_count: u16,
    pub attributes: u32,
    /// First four bytes of the radius field; they affect collision.
    pub collision: [u8; 4],
    pub radius: u32,
    pub y_radius: u32,
    pub name: String,
    pub texture_file: String,
    pub anim_count: u32,
    pub anim_pointer: u32,
    pub id: i32,
    /// Raw bytes at +112..+124, overlapping `anim_count`, `anim_pointer` and `id`.
    pub signature: [u8; SIGNATURE_SIZE],
}

impl ObjectHeader {
    /// Parse the header of the record starting at `record[0]`.
    ///
    /// `index` only labels the error when the record is too short.
    pub fn parse(record: &[u8], index: usize) -> Result<Self> {
        if record.len() < RECORD_MIN_LEN {
            return Err(Error::RecordTooShort {
                index,
                len: record.len(),
                needed: RECORD_MIN_LEN,
            });
        }

        let mut collision = [0u8; 4];
        collision.copy_from_slice(&record[16..20]);
        let mut signature = [0u8; SIGNATURE_SIZE];
        signature.copy_from_slice(&record[SIGNATURE_OFFSET..SIGNATURE_OFFSET + SIGNATURE_SIZE]);

        Ok(Self {
            size: read_u32_le(record, 4)?,
            vertex_count: read_u16_le(record, RECORD_VERTEX_COUNT_OFFSET)?,
            face_count: read_u16_le(record, RECORD_FACE_COUNT_OFFSET)?,
            attributes: read_u32_le(record, 12)?,
            collision,
            radius: read_u32_le(record, 16)?,
            y_radius: read_u32_le(record, 20)?,
            name: ascii_field(&record[NAME_OFFSET..NAME_OFFSET + NAME_SIZE]),
            texture_file: ascii_field(&record[TEXTURE_OFFSET..TEXTURE_OFFSET + TEXTURE_SIZE]),
            anim_count: read_u32_le(record, 112)?,
            anim_pointer: read_u32_le(record, 116)?,
            id: read_i32_le(record, 120)?,
            signature,
        })
    }

    /// Bounding radius in metres.
    pub fn radius_metres(&self) -> f32 {
        self.radius as f32 / COORDINATE_SCALE
    }
}

/// NUL-terminated ASCII; anything else is dropped.
fn ascii_field(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    bytes[..end]
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| char::from(b))
        .collect()
}

/// Rendering mode of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FaceType {
    LineSprite,
    FaceTranslucent,
    FaceTexturedDedicated,
    FaceColorFlatShaded,
    FaceTexturedAtlas,
    FaceColorSmoothShaded,
    LineNormal,
    PointLight,
    PointEmitter,
    Other(u8),
}

impl From<u8> for FaceType {
    fn from(value: u8) -> Self {
        match value {
            2 => Self::LineSprite,
            11 => Self::FaceTranslucent,
            13 => Self::FaceTexturedDedicated,
            15 => Self::FaceColorFlatShaded,
            18 => Self::FaceTexturedAtlas,
            19 => Self::FaceColorSmoothShaded,
            20 => Self::LineNormal,
            25 => Self::PointLight,
            26 => Self::PointEmitter,
            other => Self::Other(other),
        }
    }
}

/// Header of one `FACE` sub-chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceHeader {
    /// Offset of the `FACE` tag within its record.
    pub offset: usize,
    pub size: u32,
    pub vertex_count: u16,
    pub flags: u16,
    pub is_light: u16,
    pub group: u32,
    pub face_type: FaceType,
    /// Colour index for untextured faces, texture index otherwise.
    pub tex_color: u8,
    pub tex_file: u8,
}

const FACE_HEADER_SIZE: usize = 21;

/// Headers of every `FACE` sub-chunk in a record, in scan order.
pub fn face_headers(record: &[u8]) -> Result<Vec<FaceHeader>> {
    find_tag_offsets(record, &FACE_TAG)
        .into_iter()
        .map(|offset| {
            let header = record
                .get(offset..offset + FACE_HEADER_SIZE)
                .ok_or(Error::Truncated {
                    offset,
                    needed: FACE_HEADER_SIZE,
                    len: record.len(),
                })?;
            Ok(FaceHeader {
                offset,
                size: read_u32_le(header, 4)?,
                vertex_count: read_u16_le(header, 8)?,
                flags: read_u16_le(header, 10)?,
                is_light: read_u16_le(header, 12)?,
                group: read_u32_le(header, 14)?,
                face_type: FaceType::from(header[18]),
                tex_color: header[19],
                tex_file: header[20],
            })
        })
        .collect()
}

/// The record's vertex positions in file units.
///
/// Reads as many vertices as the header declares.
pub fn vertices(record: &[u8]) -> Result<Vec<IVec3>> {
    let count = usize::from(read_u16_le(record, RECORD_VERTEX_COUNT_OFFSET)?);
    (0..count)
        .map(|i| {
            let base = VERTEX_ARRAY_OFFSET + i * VERTEX_SIZE;
            Ok(IVec3::new(
                read_i32_le(record, base)?,
                read_i32_le(record, base + 4)?,
                read_i32_le(record, base + 8)?,
            ))
        })
        .collect()
}

/// Convert a position in file units to metres.
pub fn to_metres(position: IVec3) -> Vec3 {
    position.as_vec3() / COORDINATE_SCALE
}
