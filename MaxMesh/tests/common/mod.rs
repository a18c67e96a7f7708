//! Synthetic `.max` fixtures shared by the integration tests

#![allow(dead_code)]

use maxmesh::formats::max::{ContainerHeader, HEADER_MIN_LEN, aggregate_stats};

/// Size of the header region written before the first record.
pub const HEADER_LEN: usize = HEADER_MIN_LEN;

/// Build one `OBJX` record with `vertex_count` origin vertices, one `FACE`
/// sub-chunk per entry of `faces` (its vertex count), zero-padded to `pad_to`.
pub fn record(signature: [u8; 12], vertex_count: u16, faces: &[u16], pad_to: usize) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"OBJX");
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&vertex_count.to_le_bytes());
    out.extend_from_slice(&(faces.len() as u16).to_le_bytes());
    out.extend_from_slice(&[0u8; 12]);
    let mut name = [0u8; 88];
    name[..4].copy_from_slice(b"test");
    out.extend_from_slice(&name);
    out.extend_from_slice(&signature);
    out.extend(std::iter::repeat_n(0u8, usize::from(vertex_count) * 12));

    for &count in faces {
        out.extend_from_slice(b"FACE");
        out.extend_from_slice(&(21 + u32::from(count) * 10).to_le_bytes());
        out.extend_from_slice(&count.to_le_bytes());
        out.extend_from_slice(&[3, 0, 0, 0, 96, 0, 0, 0, 15, 96, 0]);
        for i in 0..count {
            out.extend_from_slice(&(i + 1).to_le_bytes());
        }
        out.extend(std::iter::repeat_n(0u8, usize::from(count) * 8));
    }

    let size = (out.len() - 12) as u32;
    out[4..8].copy_from_slice(&size.to_le_bytes());
    if out.len() < pad_to {
        out.resize(pad_to, 0);
    }
    out
}

/// A header region followed by `records`, with consistent counters.
pub fn container(records: &[Vec<u8>]) -> Vec<u8> {
    let mut out = vec![0u8; HEADER_LEN];
    for record in records {
        out.extend_from_slice(record);
    }
    let counters = ContainerHeader::from(aggregate_stats(&out).unwrap());
    counters.write_to(&mut out).unwrap();
    out
}
