//! Extract a single mesh record to its own file

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{DISK, LOOKING_GLASS, PACKAGE, print_done, print_step};
use crate::formats::max::{read_max, write_bytes};

/// Extract mesh `index` from `source` and write its raw bytes to `output`.
pub fn execute(source: &Path, index: i64, output: &Path, quiet: bool) -> anyhow::Result<()> {
    let started = Instant::now();

    if !quiet {
        print_step(1, 3, LOOKING_GLASS, &format!("Reading {}...", source.display()));
    }
    let file = read_max(source)?;

    if !quiet {
        print_step(2, 3, PACKAGE, &format!("Extracting mesh {index}..."));
    }
    let mesh = file.extract(index)?;

    if !quiet {
        print_step(3, 3, DISK, &format!("Writing {} ({} bytes)...", output.display(), mesh.len()));
    }
    write_bytes(output, &mesh)?;

    tracing::info!("Extracted mesh {} from {} to {}", index, source.display(), output.display());
    if !quiet {
        print_done(started.elapsed());
    }
    Ok(())
}
