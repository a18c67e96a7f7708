//! `.max` Maxis mesh container format
//!
//! The geometry files shipped with `SimCopter` and *Streets of `SimCity`*
//! (`sim3d1.max`, `sim3d2.max`, ...) are a flat byte stream: a header region
//! holding three aggregate counters at fixed offsets, followed by a run of
//! `OBJX` mesh records. Records carry no length prefix; each one extends to
//! the next `OBJX` tag or to the end of the file.
//!
//! Layout of an `OBJX` record (offsets relative to the tag):
//!
//! | Offset | Size | Field                                  |
//! |--------|------|----------------------------------------|
//! | 0      | 4    | `OBJX`                                 |
//! | 4      | 4    | size (excluding the identity block)    |
//! | 8      | 2    | unique vertex count                    |
//! | 10     | 2    | face count                             |
//! | 12     | 4    | attributes                             |
//! | 16     | 4    | radius (first 4 bytes act as collision)|
//! | 20     | 4    | y radius                               |
//! | 24     | 24   | name                                   |
//! | 48     | 64   | texture file                           |
//! | 112    | 12   | identity signature                     |
//! | 124    | 12*n | vertices (`i32` x, y, z)               |
//! | ...    |      | `FACE` sub-chunks                      |

mod codec;
mod editor;
mod header;
mod index;
mod object;
mod reader;
mod stats;
mod writer;

#[cfg(test)]
mod testutil;

pub use codec::{read_i32_le, read_u16_le, read_u32_le, write_u16_le, write_u32_le};
pub use editor::{MaxFile, ReplaceSummary, ReplacedMesh, extract_mesh, replace_meshes};
pub use header::{ContainerHeader, CounterReport, StatsDelta, verify_counters};
pub use index::{RecordIndex, find_record_offsets, find_tag_offsets};
pub use object::{FaceHeader, FaceType, ObjectHeader, face_headers, to_metres, vertices};
pub use reader::{read_bytes, read_max};
pub use stats::{MeshStats, aggregate_stats, compute_stats};
pub use writer::write_bytes;

/// Record boundary marker.
pub const OBJX_TAG: [u8; 4] = *b"OBJX";

/// Face sub-chunk marker.
pub const FACE_TAG: [u8; 4] = *b"FACE";

/// Absolute offset of the container's total vertex count.
pub const TOTAL_VERTEX_COUNT_OFFSET: usize = 882;

/// Absolute offset of the container's face count.
pub const FACE_COUNT_OFFSET: usize = 894;

/// Absolute offset of the container's unique vertex count.
pub const UNIQUE_VERTEX_COUNT_OFFSET: usize = 898;

/// Smallest container that can hold all three aggregate counters.
pub const HEADER_MIN_LEN: usize = UNIQUE_VERTEX_COUNT_OFFSET + 4;

/// Record-relative offset of the unique vertex count (`u16`).
pub const RECORD_VERTEX_COUNT_OFFSET: usize = 8;

/// Record-relative offset of the face count (`u16`).
pub const RECORD_FACE_COUNT_OFFSET: usize = 10;

/// Record-relative offset of the 12-byte identity signature.
pub const SIGNATURE_OFFSET: usize = 112;

/// Size of the identity signature.
pub const SIGNATURE_SIZE: usize = 12;

/// Smallest record that still carries a complete identity signature.
pub const RECORD_MIN_LEN: usize = SIGNATURE_OFFSET + SIGNATURE_SIZE;

/// Record-relative offset of the vertex array.
pub const VERTEX_ARRAY_OFFSET: usize = 4 + 4 + 2 + 2 + 4 + 4 + 4 + 88 + 12;

/// Size of one vertex (three little-endian `i32`).
pub const VERTEX_SIZE: usize = 12;

/// `FACE`-relative offset of the face's vertex count (`u16`).
pub const FACE_VERTEX_COUNT_OFFSET: usize = 8;

/// Spatial coordinates divided by this value are roughly metres.
pub const COORDINATE_SCALE: f32 = 262_144.0;
