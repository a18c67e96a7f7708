//! Subcommands of the `maxmesh` CLI

use clap::Subcommand;
use std::path::PathBuf;

pub mod execute;
pub mod extract;
pub mod faces;
pub mod list;
pub mod replace;
pub mod verify;

#[derive(Subcommand)]
pub enum Commands {
    /// Extract and save the mesh at the specified index
    Extract {
        /// Source path. A Maxis mesh file (sim3d#.max)
        #[arg(short, long, value_name = "PATH")]
        source: PathBuf,

        /// Index of mesh to extract
        #[arg(short, long, allow_negative_numbers = true)]
        index: i64,

        /// Output path
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
    },

    /// Replace the mesh(es) at the specified index(es) with the specified data
    Replace {
        /// Source path. A Maxis mesh file (sim3d#.max)
        #[arg(short, long, value_name = "PATH")]
        source: PathBuf,

        /// Index/indices of mesh(es) to replace (comma-separated)
        #[arg(
            short,
            long,
            required = true,
            value_delimiter = ',',
            allow_negative_numbers = true,
            value_name = "INDEX[,INDEX...]"
        )]
        index: Vec<i64>,

        /// Path to replacement object data
        #[arg(short, long, value_name = "PATH")]
        replacement: PathBuf,

        /// Output path
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,

        /// Validate and report the edit without writing output
        #[arg(long)]
        dry_run: bool,
    },

    /// List the meshes in a Maxis mesh file
    List {
        /// Source path. A Maxis mesh file (sim3d#.max)
        #[arg(short, long, value_name = "PATH")]
        source: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the FACE sub-chunks of one or all meshes
    Faces {
        /// Source path. A Maxis mesh file (sim3d#.max)
        #[arg(short, long, value_name = "PATH")]
        source: PathBuf,

        /// Only show faces of this mesh
        #[arg(short, long, allow_negative_numbers = true)]
        index: Option<i64>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check the header counters against the meshes
    Verify {
        /// Source path. A Maxis mesh file (sim3d#.max)
        #[arg(short, long, value_name = "PATH")]
        source: PathBuf,
    },
}
