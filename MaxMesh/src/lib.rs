//! # MaxMesh
//!
//! A pure-Rust library for locating, extracting and replacing the mesh
//! records inside the Maxis `.max` geometry containers used by `SimCopter`
//! and *Streets of `SimCity`*.
//!
//! ## Container Model
//!
//! A container is a header region followed by `OBJX` mesh records. Records
//! have no length prefix: each extends to the next `OBJX` tag or the end of the
//! file. The header stores three counters (total vertex count, face count and
//! unique vertex count) that must equal the sums over all records.
//!
//! ## Quick Start
//!
//! ### Extracting a Mesh
//!
//! ```no_run
//! use maxmesh::formats::max::{read_max, write_bytes};
//!
//! let file = read_max("sim3d1.max")?;
//! println!("Found {} meshes", file.record_count());
//!
//! let mesh = file.extract(42)?;
//! write_bytes("mesh42.bin", &mesh)?;
//! # Ok::<(), maxmesh::Error>(())
//! ```
//!
//! ### Replacing Meshes
//!
//! ```no_run
//! use maxmesh::formats::max::{read_bytes, read_max, write_bytes};
//!
//! let mut file = read_max("sim3d1.max")?;
//! let replacement = read_bytes("helipad.bin")?;
//!
//! // Each replaced record keeps its identity signature; the header counters
//! // are updated to match.
//! let summary = file.replace(&[3, 7], &replacement)?;
//! println!("Replaced {} meshes", summary.replaced.len());
//!
//! write_bytes("sim3d1-modded.max", file.as_bytes())?;
//! # Ok::<(), maxmesh::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `maxmesh` command-line binary

pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::max::{
        ContainerHeader, CounterReport, FaceHeader, FaceType, MaxFile, MeshStats, ObjectHeader,
        RecordIndex, ReplaceSummary, ReplacedMesh, extract_mesh, read_bytes, read_max,
        replace_meshes, verify_counters, write_bytes,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
