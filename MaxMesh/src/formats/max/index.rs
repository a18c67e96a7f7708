//! Record boundary scanning
//!
//! Records are found by a plain left-to-right scan for the `OBJX` tag. Nothing
//! is skipped or validated: a well-formed container never holds the tag inside
//! payload data, so every hit is a record start.

use std::ops::Range;

use super::OBJX_TAG;
use crate::error::{Error, Result};

/// Offsets of every occurrence of `tag` in `data`, ascending.
///
/// Positions `0..data.len() - 4` are examined, so a tag occupying the final
/// four bytes of the buffer is not reported. Existing game tooling scans the
/// same way and the record model depends on it.
pub fn find_tag_offsets(data: &[u8], tag: &[u8; 4]) -> Vec<usize> {
    data.windows(tag.len())
        .take(data.len().saturating_sub(tag.len()))
        .enumerate()
        .filter_map(|(i, window)| (window == tag).then_some(i))
        .collect()
}

/// Start offsets of all `OBJX` records in a container.
pub fn find_record_offsets(data: &[u8]) -> Vec<usize> {
    find_tag_offsets(data, &OBJX_TAG)
}

/// Ordered record boundaries of one container snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIndex {
    offsets: Vec<usize>,
    len: usize,
}

impl RecordIndex {
    /// Scan `data` for record boundaries.
    pub fn scan(data: &[u8]) -> Self {
        let offsets = find_record_offsets(data);
        tracing::debug!("Found {} OBJX records in {} bytes", offsets.len(), data.len());
        Self {
            offsets,
            len: data.len(),
        }
    }

    /// Number of records.
    pub fn count(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the container holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Record start offsets, ascending.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Byte range of record `index`: from its tag to the next tag, or to the
    /// end of the buffer for the last record.
    pub fn span(&self, index: usize) -> Option<Range<usize>> {
        let start = *self.offsets.get(index)?;
        let end = self.offsets.get(index + 1).copied().unwrap_or(self.len);
        Some(start..end)
    }

    /// Byte ranges of all records in order.
    pub fn spans(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.count()).filter_map(|i| self.span(i))
    }

    /// Validate a caller-supplied index.
    pub fn resolve(&self, index: i64) -> Result<usize> {
        self.resolve_all(&[index]).map(|resolved| resolved[0])
    }

    /// Validate every caller-supplied index, reporting all invalid ones at once.
    ///
    /// The result keeps request order; sorting and deduplication are left to
    /// the caller.
    pub fn resolve_all(&self, indices: &[i64]) -> Result<Vec<usize>> {
        let count = self.count();
        let invalid: Vec<i64> = indices
            .iter()
            .copied()
            .filter(|&i| usize::try_from(i).map_or(true, |i| i >= count))
            .collect();

        if !invalid.is_empty() {
            return Err(Error::IndexOutOfRange { invalid, count });
        }

        Ok(indices.iter().map(|&i| i as usize).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::max::testutil::{ContainerBuilder, RecordBuilder};

    #[test]
    fn test_no_records() {
        assert!(find_record_offsets(b"").is_empty());
        assert!(find_record_offsets(b"OBJ").is_empty());
        assert!(find_record_offsets(&[0u8; 64]).is_empty());

        let index = RecordIndex::scan(&[0u8; 64]);
        assert!(index.is_empty());
        assert_eq!(index.span(0), None);
    }

    #[test]
    fn test_tag_in_final_four_bytes_is_not_reported() {
        assert!(find_record_offsets(b"OBJX").is_empty());
        assert_eq!(find_record_offsets(b"OBJX_"), vec![0]);
        assert_eq!(find_record_offsets(b"..OBJX.OBJX"), vec![2]);
    }

    #[test]
    fn test_offsets_ascending() {
        let data = ContainerBuilder::new()
            .record(RecordBuilder::new().padded_to(150))
            .record(RecordBuilder::new().padded_to(150))
            .record(RecordBuilder::new().padded_to(150))
            .build();

        let index = RecordIndex::scan(&data);
        assert_eq!(index.count(), 3);
        let base = ContainerBuilder::HEADER_LEN;
        assert_eq!(index.offsets(), &[base, base + 150, base + 300]);
        assert_eq!(index.span(2), Some(base + 300..data.len()));
        assert_eq!(index.spans().count(), 3);
    }

    #[test]
    fn test_resolve_reports_every_invalid_index() {
        let index = RecordIndex {
            offsets: vec![0, 150, 300],
            len: 450,
        };

        assert_eq!(index.resolve(2).unwrap(), 2);
        assert_eq!(index.resolve_all(&[2, 0]).unwrap(), vec![2, 0]);

        match index.resolve_all(&[-1, 1, 3, 9]) {
            Err(Error::IndexOutOfRange { invalid, count }) => {
                assert_eq!(invalid, vec![-1, 3, 9]);
                assert_eq!(count, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
