//! File format handlers for Maxis 3D geometry files
//!
//! Only the `.max` mesh container is supported. Textures (`sim3d.bmp`) and
//! palettes are handled by separate tools.

pub mod max;

// Re-export the main container types
pub use max::{
    ContainerHeader, MaxFile, MeshStats, ObjectHeader, RecordIndex, ReplaceSummary, read_max,
};
