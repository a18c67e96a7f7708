//! Container-level aggregate counters

use serde::Serialize;

use super::codec::{read_u32_le, write_u32_le};
use super::stats::{MeshStats, aggregate_stats};
use super::{
    FACE_COUNT_OFFSET, HEADER_MIN_LEN, TOTAL_VERTEX_COUNT_OFFSET, UNIQUE_VERTEX_COUNT_OFFSET,
};
use crate::error::{Error, Result};

/// The three counters stored at fixed offsets in the container header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContainerHeader {
    /// Stored at offset 882.
    pub total_vertex_count: u32,
    /// Stored at offset 894.
    pub face_count: u32,
    /// Stored at offset 898.
    pub unique_vertex_count: u32,
}

impl ContainerHeader {
    /// Read the counters from a container.
    pub fn parse(data: &[u8]) -> Result<Self> {
        check_len(data)?;
        Ok(Self {
            total_vertex_count: read_u32_le(data, TOTAL_VERTEX_COUNT_OFFSET)?,
            face_count: read_u32_le(data, FACE_COUNT_OFFSET)?,
            unique_vertex_count: read_u32_le(data, UNIQUE_VERTEX_COUNT_OFFSET)?,
        })
    }

    /// Write the counters back into a container in place.
    pub fn write_to(&self, data: &mut [u8]) -> Result<()> {
        check_len(data)?;
        write_u32_le(data, TOTAL_VERTEX_COUNT_OFFSET, self.total_vertex_count)?;
        write_u32_le(data, FACE_COUNT_OFFSET, self.face_count)?;
        write_u32_le(data, UNIQUE_VERTEX_COUNT_OFFSET, self.unique_vertex_count)?;
        Ok(())
    }

    /// Counters after applying `delta`.
    ///
    /// Arithmetic wraps at 32 bits, the width of the on-disk fields.
    #[must_use]
    pub fn apply(&self, delta: StatsDelta) -> Self {
        let shift = |value: u32, by: i64| (i64::from(value) + by) as u32;
        Self {
            total_vertex_count: shift(self.total_vertex_count, delta.total_vertex_count),
            face_count: shift(self.face_count, delta.face_count),
            unique_vertex_count: shift(self.unique_vertex_count, delta.unique_vertex_count),
        }
    }
}

impl From<MeshStats> for ContainerHeader {
    fn from(stats: MeshStats) -> Self {
        Self {
            total_vertex_count: stats.total_vertex_count,
            face_count: stats.face_count,
            unique_vertex_count: stats.unique_vertex_count,
        }
    }
}

fn check_len(data: &[u8]) -> Result<()> {
    if data.len() < HEADER_MIN_LEN {
        return Err(Error::HeaderTooShort {
            len: data.len(),
            needed: HEADER_MIN_LEN,
        });
    }
    Ok(())
}

/// Signed change to the aggregate counters accumulated over an edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsDelta {
    pub total_vertex_count: i64,
    pub face_count: i64,
    pub unique_vertex_count: i64,
}

impl StatsDelta {
    /// Record that a mesh with `removed` statistics was swapped for one with `added`.
    pub fn record_swap(&mut self, removed: MeshStats, added: MeshStats) {
        self.total_vertex_count +=
            i64::from(added.total_vertex_count) - i64::from(removed.total_vertex_count);
        self.face_count += i64::from(added.face_count) - i64::from(removed.face_count);
        self.unique_vertex_count +=
            i64::from(added.unique_vertex_count) - i64::from(removed.unique_vertex_count);
    }

    /// Whether the edit leaves every counter unchanged.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Stored versus recomputed counters for one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterReport {
    /// Values found in the header.
    pub stored: ContainerHeader,
    /// Sums recomputed from the records.
    pub computed: ContainerHeader,
}

impl CounterReport {
    /// Whether every stored counter matches its recomputed value.
    pub fn is_consistent(&self) -> bool {
        self.stored == self.computed
    }
}

/// Recompute the aggregate counters from the records and compare them with
/// the header.
pub fn verify_counters(data: &[u8]) -> Result<CounterReport> {
    let stored = ContainerHeader::parse(data)?;
    let computed = ContainerHeader::from(aggregate_stats(data)?);
    Ok(CounterReport { stored, computed })
}
