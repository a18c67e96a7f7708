//! List the mesh records of a container

use std::path::Path;

use serde::Serialize;

use crate::formats::max::{ObjectHeader, compute_stats, read_max};

/// One row of the mesh listing.
#[derive(Debug, Serialize)]
struct MeshRow {
    index: usize,
    offset: usize,
    length: usize,
    total_vertex_count: u32,
    #[serde(flatten)]
    header: ObjectHeader,
}

/// Print every mesh in `source`, as a table or as JSON.
pub fn execute(source: &Path, json: bool) -> anyhow::Result<()> {
    let file = read_max(source)?;
    let records = file.records();
    let data = file.as_bytes();

    let rows = records
        .spans()
        .enumerate()
        .map(|(index, span)| {
            let record = &data[span.clone()];
            Ok(MeshRow {
                index,
                offset: span.start,
                length: span.len(),
                total_vertex_count: compute_stats(record)?.total_vertex_count,
                header: ObjectHeader::parse(record, index)?,
            })
        })
        .collect::<crate::Result<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}: {} meshes", source.display(), rows.len());
    println!();
    println!(
        "{:>5} {:>8} {:>7} {:<24} {:>6} {:>6} {:>7} {:>8} {:>11}",
        "index", "offset", "length", "name", "verts", "faces", "total", "radius", "id"
    );
    for row in &rows {
        println!(
            "{:>5} {:>8} {:>7} {:<24} {:>6} {:>6} {:>7} {:>8.2} {:>11}",
            row.index,
            row.offset,
            row.length,
            row.header.name,
            row.header.vertex_count,
            row.header.face_count,
            row.total_vertex_count,
            row.header.radius_metres(),
            row.header.id
        );
    }

    Ok(())
}
