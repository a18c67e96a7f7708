//! List the FACE sub-chunks of mesh records

use std::path::Path;

use serde::Serialize;

use crate::formats::max::{FaceHeader, face_headers, read_max};

#[derive(Debug, Serialize)]
struct MeshFaces {
    index: usize,
    faces: Vec<FaceHeader>,
}

/// Print the face headers of mesh `index`, or of every mesh.
pub fn execute(source: &Path, index: Option<i64>, json: bool) -> anyhow::Result<()> {
    let file = read_max(source)?;
    let records = file.records();
    let data = file.as_bytes();

    let selected: Vec<usize> = match index {
        Some(index) => vec![records.resolve(index)?],
        None => (0..records.count()).collect(),
    };

    let mut meshes = Vec::with_capacity(selected.len());
    for index in selected {
        let Some(span) = records.span(index) else {
            continue;
        };
        meshes.push(MeshFaces {
            index,
            faces: face_headers(&data[span])?,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&meshes)?);
        return Ok(());
    }

    for mesh in &meshes {
        println!("mesh {} ({} faces)", mesh.index, mesh.faces.len());
        for face in &mesh.faces {
            println!(
                "  @{:<6} verts {:>3}  flags {:>5}  light {}  group {:>6}  type {:<24} tex/color {:>3}  tex file {:>3}",
                face.offset,
                face.vertex_count,
                face.flags,
                face.is_light,
                face.group,
                format!("{:?}", face.face_type),
                face.tex_color,
                face.tex_file
            );
        }
    }

    Ok(())
}
