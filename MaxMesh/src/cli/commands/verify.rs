//! Check the header counters against the mesh records

use std::path::Path;

use console::style;

use crate::formats::max::read_max;

/// Recompute the aggregate counters of `source` and compare them with the
/// stored ones. Fails if any counter differs.
pub fn execute(source: &Path) -> anyhow::Result<()> {
    let file = read_max(source)?;
    let report = file.verify()?;

    println!("{}: {} meshes", source.display(), file.record_count());
    let (stored, computed) = (report.stored, report.computed);
    let rows = [
        (
            "total vertex count",
            stored.total_vertex_count,
            computed.total_vertex_count,
        ),
        ("face count", stored.face_count, computed.face_count),
        (
            "unique vertex count",
            stored.unique_vertex_count,
            computed.unique_vertex_count,
        ),
    ];
    for (label, stored, computed) in rows {
        let status = if stored == computed {
            style("ok").green()
        } else {
            style("MISMATCH").red().bold()
        };
        println!("  {label:<20} stored {stored:>8}  computed {computed:>8}  {status}");
    }

    if !report.is_consistent() {
        anyhow::bail!("header counters of {} do not match its meshes", source.display());
    }
    Ok(())
}
