//! `maxmesh` command-line entry point

fn main() -> anyhow::Result<()> {
    maxmesh::cli::run_cli()
}
