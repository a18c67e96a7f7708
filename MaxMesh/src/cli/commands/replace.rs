//! Replace one or more mesh records with the contents of another file

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{DISK, GEAR, LOOKING_GLASS, print_done, print_step, print_warning};
use crate::formats::max::{ReplaceSummary, read_bytes, read_max, write_bytes};

/// Replace every mesh in `indices` with the record stored in `replacement`
/// and write the edited container to `output`.
pub fn execute(
    source: &Path,
    indices: &[i64],
    replacement: &Path,
    output: &Path,
    dry_run: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let steps = if dry_run { 3 } else { 4 };

    if !quiet {
        print_step(
            1,
            steps,
            LOOKING_GLASS,
            &format!("Reading replacement {}...", replacement.display()),
        );
    }
    let replacement_data = read_bytes(replacement)?;

    if !quiet {
        print_step(2, steps, LOOKING_GLASS, &format!("Reading {}...", source.display()));
    }
    let mut file = read_max(source)?;

    if !quiet {
        print_step(3, steps, GEAR, &format!("Replacing {} mesh(es)...", indices.len()));
    }
    let summary = file.replace(indices, &replacement_data)?;

    if !quiet {
        print_summary(&summary);
    }

    if dry_run {
        if !quiet {
            print_warning(&format!("dry run: {} not written", output.display()));
        }
        return Ok(());
    }

    if !quiet {
        print_step(
            4,
            steps,
            DISK,
            &format!("Writing {} ({} bytes)...", output.display(), file.len()),
        );
    }
    write_bytes(output, file.as_bytes())?;

    tracing::info!(
        "Replaced {} mesh(es) in {}, written to {}",
        summary.replaced.len(),
        source.display(),
        output.display()
    );
    if !quiet {
        print_done(started.elapsed());
    }
    Ok(())
}

fn print_summary(summary: &ReplaceSummary) {
    for mesh in &summary.replaced {
        println!(
            "  mesh {:>4} @ {:>8}: {:>6} -> {:>6} bytes",
            mesh.index, mesh.offset, mesh.original_len, summary.replacement_len
        );
    }
    let before = summary.counters_before;
    let after = summary.counters_after;
    println!(
        "  total vertices {} -> {}, faces {} -> {}, unique vertices {} -> {}",
        before.total_vertex_count,
        after.total_vertex_count,
        before.face_count,
        after.face_count,
        before.unique_vertex_count,
        after.unique_vertex_count
    );
}
