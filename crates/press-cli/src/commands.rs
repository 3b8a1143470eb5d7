use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;

use press_codec::Algorithm;
use press_server::{PressServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Compress(args) => cmd_compress(args),
        Command::Decompress(args) => cmd_decompress(args),
        Command::Algorithms => cmd_algorithms(),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
        staging_root: args.staging_root,
        delete_grace_ms: args.delete_grace_ms,
        ..ServerConfig::default()
    };
    println!(
        "{} press server on {} (staging: {})",
        "▶".green().bold(),
        config.bind_addr.to_string().bold(),
        config.staging_root.display()
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(PressServer::new(config).serve())?;
    Ok(())
}

fn cmd_compress(args: CompressArgs) -> anyhow::Result<()> {
    let algorithm: Algorithm = args.algorithm.parse()?;
    let input = fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let (output, stats) = press_codec::compress(algorithm, &input)?;
    let out_path = args
        .output
        .unwrap_or_else(|| compressed_path(&args.input, algorithm));
    fs::write(&out_path, output)
        .with_context(|| format!("writing {}", out_path.display()))?;
    println!(
        "{} {} {} bytes → {} bytes (ratio {}, saved {})",
        "✓".green().bold(),
        out_path.display().to_string().bold(),
        stats.original_size,
        stats.compressed_size,
        stats.ratio.yellow(),
        stats.savings.yellow(),
    );
    Ok(())
}

fn cmd_decompress(args: DecompressArgs) -> anyhow::Result<()> {
    let name = args.input.to_string_lossy();
    let algorithm = Algorithm::infer_from_name(&name).with_context(|| {
        format!(
            "cannot detect algorithm from {}; name must contain .gzip, .deflate, or .brotli",
            args.input.display()
        )
    })?;
    let input = fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let (output, stats) = press_codec::decompress(algorithm, &input)?;
    let out_path = args
        .output
        .unwrap_or_else(|| decompressed_path(&args.input, algorithm));
    fs::write(&out_path, output)
        .with_context(|| format!("writing {}", out_path.display()))?;
    println!(
        "{} {} {} bytes → {} bytes ({})",
        "✓".green().bold(),
        out_path.display().to_string().bold(),
        stats.compressed_size,
        stats.decompressed_size,
        stats.algorithm.cyan(),
    );
    Ok(())
}

fn cmd_algorithms() -> anyhow::Result<()> {
    for algorithm in Algorithm::ALL {
        println!(
            "{}  ({})",
            algorithm.as_str().bold(),
            algorithm.label().cyan()
        );
    }
    Ok(())
}

fn compressed_path(input: &Path, algorithm: Algorithm) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(".");
    path.push(algorithm.as_str());
    PathBuf::from(path)
}

fn decompressed_path(input: &Path, algorithm: Algorithm) -> PathBuf {
    let name = input.to_string_lossy();
    match name.strip_suffix(algorithm.marker()) {
        Some(base) => PathBuf::from(base),
        None => {
            let mut path = input.as_os_str().to_owned();
            path.push(".out");
            PathBuf::from(path)
        }
    }
}
