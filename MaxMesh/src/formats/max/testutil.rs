//! Synthetic container fixtures for unit tests

use super::header::ContainerHeader;
use super::stats::aggregate_stats;
use super::{HEADER_MIN_LEN, OBJX_TAG};

/// Lays out one `OBJX` record.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    name: String,
    signature: [u8; 12],
    vertices: Vec<[i32; 3]>,
    faces: Vec<Vec<u16>>,
    declared: Option<(u16, u16)>,
    padded_to: usize,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "mesh".to_string(),
            signature: [0; 12],
            vertices: Vec::new(),
            faces: Vec::new(),
            declared: None,
            padded_to: 0,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn signature(mut self, signature: [u8; 12]) -> Self {
        self.signature = signature;
        self
    }

    pub fn vertices(mut self, vertices: &[[i32; 3]]) -> Self {
        self.vertices = vertices.to_vec();
        self
    }

    pub fn face(mut self, indices: &[u16]) -> Self {
        self.faces.push(indices.to_vec());
        self
    }

    /// Override the header's unique vertex and face counts.
    pub fn declared_counts(mut self, vertices: u16, faces: u16) -> Self {
        self.declared = Some((vertices, faces));
        self
    }

    /// Zero-pad the record to at least `len` bytes.
    pub fn padded_to(mut self, len: usize) -> Self {
        self.padded_to = len;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let (vertex_count, face_count) = self
            .declared
            .unwrap_or((self.vertices.len() as u16, self.faces.len() as u16));

        let mut out = Vec::new();
        out.extend_from_slice(&OBJX_TAG);
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&vertex_count.to_le_bytes());
        out.extend_from_slice(&face_count.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&[100, 100, 45, 0]);
        out.extend_from_slice(&0u32.to_le_bytes());

        let mut name = [0u8; 24];
        let len = self.name.len().min(23);
        name[..len].copy_from_slice(&self.name.as_bytes()[..len]);
        out.extend_from_slice(&name);
        out.extend_from_slice(&[0u8; 64]);
        out.extend_from_slice(&self.signature);

        for vertex in &self.vertices {
            for coord in vertex {
                out.extend_from_slice(&coord.to_le_bytes());
            }
        }

        for indices in &self.faces {
            let size = 21 + indices.len() * 10;
            out.extend_from_slice(b"FACE");
            out.extend_from_slice(&(size as u32).to_le_bytes());
            out.extend_from_slice(&(indices.len() as u16).to_le_bytes());
            out.extend_from_slice(&3u16.to_le_bytes());
            out.extend_from_slice(&0u16.to_le_bytes());
            out.extend_from_slice(&96u32.to_le_bytes());
            out.extend_from_slice(&[15, 96, 0]);
            for index in indices {
                out.extend_from_slice(&index.to_le_bytes());
            }
            out.extend(std::iter::repeat_n(0u8, indices.len() * 8));
        }

        let size = (out.len() - 12) as u32;
        out[4..8].copy_from_slice(&size.to_le_bytes());

        if out.len() < self.padded_to {
            out.resize(self.padded_to, 0);
        }
        out
    }
}

/// Lays out a header region followed by records, with consistent counters
/// unless overridden.
#[derive(Debug, Clone, Default)]
pub struct ContainerBuilder {
    records: Vec<RecordBuilder>,
    counters: Option<ContainerHeader>,
}

impl ContainerBuilder {
    /// Size of the zeroed header region preceding the first record.
    pub const HEADER_LEN: usize = HEADER_MIN_LEN;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(mut self, record: RecordBuilder) -> Self {
        self.records.push(record);
        self
    }

    pub fn counters(mut self, counters: ContainerHeader) -> Self {
        self.counters = Some(counters);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = vec![0u8; Self::HEADER_LEN];
        for record in &self.records {
            out.extend_from_slice(&record.build());
        }

        let counters = self.counters.unwrap_or_else(|| {
            ContainerHeader::from(aggregate_stats(&out).expect("fixture records are well formed"))
        });
        counters.write_to(&mut out).expect("fixture header fits");
        out
    }
}
