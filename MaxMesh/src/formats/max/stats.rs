//! Per-record geometry statistics

use std::ops::AddAssign;

use serde::Serialize;

use super::codec::read_u16_le;
use super::index::{RecordIndex, find_tag_offsets};
use super::{
    FACE_TAG, FACE_VERTEX_COUNT_OFFSET, RECORD_FACE_COUNT_OFFSET, RECORD_VERTEX_COUNT_OFFSET,
};
use crate::error::Result;

/// The three quantities the container header aggregates over all records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MeshStats {
    /// Sum of the vertex counts of every `FACE` sub-chunk.
    pub total_vertex_count: u32,
    /// Declared face count.
    pub face_count: u32,
    /// Declared unique vertex count.
    pub unique_vertex_count: u32,
}

impl AddAssign for MeshStats {
    fn add_assign(&mut self, rhs: Self) {
        self.total_vertex_count = self.total_vertex_count.wrapping_add(rhs.total_vertex_count);
        self.face_count = self.face_count.wrapping_add(rhs.face_count);
        self.unique_vertex_count = self.unique_vertex_count.wrapping_add(rhs.unique_vertex_count);
    }
}

/// Compute the statistics of a single record.
///
/// `record` must start at the record's `OBJX` tag. The face and unique vertex
/// counts are taken from the record header as declared; the total vertex count
/// sums the vertex count of every `FACE` tag found in the record bytes.
pub fn compute_stats(record: &[u8]) -> Result<MeshStats> {
    let unique_vertex_count = read_u16_le(record, RECORD_VERTEX_COUNT_OFFSET)?;
    let face_count = read_u16_le(record, RECORD_FACE_COUNT_OFFSET)?;

    let mut total_vertex_count = 0u32;
    for offset in find_tag_offsets(record, &FACE_TAG) {
        let count = read_u16_le(record, offset + FACE_VERTEX_COUNT_OFFSET)?;
        total_vertex_count = total_vertex_count.wrapping_add(u32::from(count));
    }

    Ok(MeshStats {
        total_vertex_count,
        face_count: u32::from(face_count),
        unique_vertex_count: u32::from(unique_vertex_count),
    })
}

/// Sum the statistics of every record currently in `data`.
pub fn aggregate_stats(data: &[u8]) -> Result<MeshStats> {
    let index = RecordIndex::scan(data);
    let mut total = MeshStats::default();
    for span in index.spans() {
        total += compute_stats(&data[span])?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::formats::max::testutil::{ContainerBuilder, RecordBuilder};

    #[test]
    fn test_stats_from_header_and_faces() {
        let record = RecordBuilder::new()
            .vertices(&[[0, 0, 0], [1, 0, 0], [0, 1, 0], [1, 1, 0]])
            .face(&[1, 2, 3])
            .face(&[1, 2, 3, 4])
            .build();

        let stats = compute_stats(&record).unwrap();
        assert_eq!(
            stats,
            MeshStats {
                total_vertex_count: 7,
                face_count: 2,
                unique_vertex_count: 4,
            }
        );
    }

    #[test]
    fn test_declared_counts_are_trusted() {
        let record = RecordBuilder::new()
            .face(&[1, 2, 3])
            .declared_counts(40, 9)
            .build();

        let stats = compute_stats(&record).unwrap();
        assert_eq!(stats.unique_vertex_count, 40);
        assert_eq!(stats.face_count, 9);
        assert_eq!(stats.total_vertex_count, 3);
    }

    #[test]
    fn test_face_tag_too_close_to_end() {
        let mut record = RecordBuilder::new().build();
        record.extend_from_slice(b"FACE\0\0\0\0\x03");

        assert!(matches!(compute_stats(&record), Err(Error::Truncated { .. })));
    }

    #[test]
    fn test_record_too_short_for_counts() {
        assert!(compute_stats(b"OBJX\0\0\0\0\x01").is_err());
    }

    #[test]
    fn test_aggregate_over_container() {
        let data = ContainerBuilder::new()
            .record(RecordBuilder::new().vertices(&[[0, 0, 0]; 3]).face(&[1, 2, 3]))
            .record(
                RecordBuilder::new()
                    .vertices(&[[0, 0, 0]; 5])
                    .face(&[1, 2, 3, 4])
                    .face(&[2, 3, 5]),
            )
            .build();

        let total = aggregate_stats(&data).unwrap();
        assert_eq!(total.total_vertex_count, 10);
        assert_eq!(total.face_count, 3);
        assert_eq!(total.unique_vertex_count, 8);
    }
}
