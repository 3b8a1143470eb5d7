use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "press",
    about = "Press: file compression portal",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the portal HTTP server
    Serve(ServeArgs),
    /// Compress a local file
    Compress(CompressArgs),
    /// Decompress a local file
    Decompress(DecompressArgs),
    /// List supported algorithms
    Algorithms,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Staging store root; incoming and outgoing zones live beneath it
    #[arg(long, default_value = "data")]
    pub staging_root: PathBuf,

    /// Delay before a delivered artifact is deleted, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub delete_grace_ms: u64,
}

#[derive(Args)]
pub struct CompressArgs {
    /// File to compress
    pub input: PathBuf,

    /// Algorithm: gzip, deflate, or brotli
    #[arg(short, long, default_value = "gzip")]
    pub algorithm: String,

    /// Output path (default: input path plus the algorithm extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct DecompressArgs {
    /// File to decompress; the algorithm is inferred from its name
    pub input: PathBuf,

    /// Output path (default: input path with the marker stripped)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
