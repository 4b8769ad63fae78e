use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fgz",
    version,
    about = "Pack a finished build output directory into an FGZ archive"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pack the direct children of the build output directory
    Pack(PackArgs),
    /// Print version
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct PackArgs {
    /// Build output directory (only direct children are packed)
    #[arg(long, default_value = fgz_core::DEFAULT_SOURCE_DIR)]
    pub source: PathBuf,

    /// Archive destination. Its parent is created if missing (one level only)
    #[arg(long, env = "ARCHIVE_OUT")]
    pub out: Option<PathBuf>,

    /// Sort entries by name for reproducible archives (default: directory order)
    #[arg(long)]
    pub sort: bool,

    /// Gzip level, 0-9
    #[arg(long, default_value_t = fgz_core::CompressionLevel::DEFAULT)]
    pub level: u32,

    /// Print the pack report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}
