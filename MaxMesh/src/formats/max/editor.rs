//! Mesh extraction and replacement
//!
//! Replacement swaps whole `OBJX` records for a caller-supplied record while
//! keeping two things intact:
//! - each replaced record's 12-byte identity signature, which the game uses to
//!   bind the mesh to its object;
//! - the header counters, which must stay equal to the sum of the per-record
//!   statistics.

use std::ops::Range;

use serde::Serialize;

use super::header::{ContainerHeader, CounterReport, StatsDelta, verify_counters};
use super::index::RecordIndex;
use super::object::ObjectHeader;
use super::stats::{MeshStats, compute_stats};
use super::{RECORD_MIN_LEN, SIGNATURE_OFFSET, SIGNATURE_SIZE};
use crate::error::{Error, Result};

/// Copy record `index` out of a container.
///
/// The last record extends to the end of the container.
///
/// # Errors
/// Returns [`Error::IndexOutOfRange`] if `index` does not name a record.
pub fn extract_mesh(data: &[u8], index: i64) -> Result<Vec<u8>> {
    let records = RecordIndex::scan(data);
    let index = records.resolve(index)?;
    let span = records.span(index).ok_or_else(|| Error::IndexOutOfRange {
        invalid: vec![index as i64],
        count: records.count(),
    })?;

    tracing::debug!("Extracting mesh {} ({} bytes at offset {})", index, span.len(), span.start);
    Ok(data[span].to_vec())
}

/// One record swapped out by [`replace_meshes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacedMesh {
    pub index: usize,
    /// Start offset, identical before and after the edit.
    pub offset: usize,
    pub original_len: usize,
    pub original_stats: MeshStats,
    pub signature: [u8; SIGNATURE_SIZE],
}

/// Outcome of a replace operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceSummary {
    /// Replaced records, ascending by index.
    pub replaced: Vec<ReplacedMesh>,
    pub replacement_len: usize,
    pub replacement_stats: MeshStats,
    pub counters_before: ContainerHeader,
    pub counters_after: ContainerHeader,
}

/// Replace every record named in `indices` with a copy of `replacement`.
///
/// Indices are checked against the unedited container and all invalid ones
/// are reported together; duplicates collapse to a single replacement. The
/// identity signature of each replaced record is written over the copy's own
/// signature, and the header counters are shifted by the difference in
/// statistics.
///
/// Nothing is modified unless the whole edit succeeds.
///
/// # Errors
/// Checked in this order:
/// - [`Error::NoIndices`] if `indices` is empty.
/// - [`Error::IndexOutOfRange`] if any index does not name a record.
/// - [`Error::HeaderTooShort`] if the container has no room for its counters.
/// - [`Error::ReplacementTooShort`] / [`Error::RecordTooShort`] if a record
///   cannot hold an identity signature.
pub fn replace_meshes(
    data: &[u8],
    indices: &[i64],
    replacement: &[u8],
) -> Result<(Vec<u8>, ReplaceSummary)> {
    let records = RecordIndex::scan(data);
    let targets = resolve_targets(&records, indices)?;
    let counters_before = ContainerHeader::parse(data)?;

    let (mut edited, replaced, delta, replacement_stats) =
        splice_records(data, &records, &targets, replacement)?;

    let counters_after = counters_before.apply(delta);
    counters_after.write_to(&mut edited)?;

    tracing::info!(
        "Replaced {} mesh(es); counters now {} total vertices, {} faces, {} unique vertices",
        replaced.len(),
        counters_after.total_vertex_count,
        counters_after.face_count,
        counters_after.unique_vertex_count
    );

    Ok((
        edited,
        ReplaceSummary {
            replaced,
            replacement_len: replacement.len(),
            replacement_stats,
            counters_before,
            counters_after,
        },
    ))
}

/// Validated target indices, ascending and without duplicates.
fn resolve_targets(records: &RecordIndex, indices: &[i64]) -> Result<Vec<usize>> {
    if indices.is_empty() {
        return Err(Error::NoIndices);
    }
    let mut targets = records.resolve_all(indices)?;
    targets.sort_unstable();
    targets.dedup();
    Ok(targets)
}

type Splice = (Vec<u8>, Vec<ReplacedMesh>, StatsDelta, MeshStats);

/// Swap the records at `targets` (ascending) for `replacement`, leaving the
/// header untouched.
///
/// Records are processed from the highest offset down so that the offsets in
/// `records`, taken before any edit, stay valid for every record not yet
/// processed.
fn splice_records(
    data: &[u8],
    records: &RecordIndex,
    targets: &[usize],
    replacement: &[u8],
) -> Result<Splice> {
    if replacement.len() < RECORD_MIN_LEN {
        return Err(Error::ReplacementTooShort {
            len: replacement.len(),
            needed: RECORD_MIN_LEN,
        });
    }
    let replacement_stats = compute_stats(replacement)?;

    // Validate and measure every target before touching any bytes.
    let mut plan = Vec::with_capacity(targets.len());
    for &index in targets {
        let span = records.span(index).ok_or_else(|| Error::IndexOutOfRange {
            invalid: vec![index as i64],
            count: records.count(),
        })?;
        let record = &data[span.clone()];
        if record.len() < RECORD_MIN_LEN {
            return Err(Error::RecordTooShort {
                index,
                len: record.len(),
                needed: RECORD_MIN_LEN,
            });
        }

        let mut signature = [0u8; SIGNATURE_SIZE];
        signature.copy_from_slice(&record[SIGNATURE_OFFSET..SIGNATURE_OFFSET + SIGNATURE_SIZE]);
        plan.push(ReplacedMesh {
            index,
            offset: span.start,
            original_len: record.len(),
            original_stats: compute_stats(record)?,
            signature,
        });
    }

    let mut edited = data.to_vec();
    let mut delta = StatsDelta::default();
    for mesh in plan.iter().rev() {
        let end = mesh.offset + mesh.original_len;
        edited = splice(&edited, mesh.offset..end, &with_signature(replacement, &mesh.signature));
        delta.record_swap(mesh.original_stats, replacement_stats);

        tracing::debug!(
            "Replaced mesh {} at offset {}: {} -> {} bytes",
            mesh.index,
            mesh.offset,
            mesh.original_len,
            replacement.len()
        );
    }

    Ok((edited, plan, delta, replacement_stats))
}

/// `replacement` with its identity signature swapped for `signature`.
fn with_signature(replacement: &[u8], signature: &[u8; SIGNATURE_SIZE]) -> Vec<u8> {
    let mut record = replacement.to_vec();
    record[SIGNATURE_OFFSET..SIGNATURE_OFFSET + SIGNATURE_SIZE].copy_from_slice(signature);
    record
}

/// Rebuild `data` with `range` swapped for `insert`.
fn splice(data: &[u8], range: Range<usize>, insert: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() - range.len() + insert.len());
    out.extend_from_slice(&data[..range.start]);
    out.extend_from_slice(insert);
    out.extend_from_slice(&data[range.end..]);
    out
}

/// An in-memory `.max` container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxFile {
    data: Vec<u8>,
}

impl MaxFile {
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current record boundaries.
    pub fn records(&self) -> RecordIndex {
        RecordIndex::scan(&self.data)
    }

    /// Number of `OBJX` records.
    pub fn record_count(&self) -> usize {
        self.records().count()
    }

    /// Aggregate counters as stored in the header.
    pub fn header(&self) -> Result<ContainerHeader> {
        ContainerHeader::parse(&self.data)
    }

    /// Parsed header of every record, in order.
    pub fn objects(&self) -> Result<Vec<ObjectHeader>> {
        self.records()
            .spans()
            .enumerate()
            .map(|(i, span)| ObjectHeader::parse(&self.data[span], i))
            .collect()
    }

    /// See [`extract_mesh`].
    pub fn extract(&self, index: i64) -> Result<Vec<u8>> {
        extract_mesh(&self.data, index)
    }

    /// See [`replace_meshes`]. The container is left unchanged on error.
    pub fn replace(&mut self, indices: &[i64], replacement: &[u8]) -> Result<ReplaceSummary> {
        let (data, summary) = replace_meshes(&self.data, indices, replacement)?;
        self.data = data;
        Ok(summary)
    }

    /// See [`verify_counters`].
    pub fn verify(&self) -> Result<CounterReport> {
        verify_counters(&self.data)
    }
}
