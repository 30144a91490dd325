//! Vassago command-line compressor
//!
//! Wraps the Huffman codec for whole files.
//!
//! ## Usage
//!
//! ```bash
//! # Compress a file into a HUF1 container
//! vassago compress input.bin output.huf
//! vassago -c input.bin output.huf
//!
//! # Restore it
//! vassago decompress output.huf restored.bin
//! vassago -d output.huf restored.bin
//!
//! # Show pipeline stages
//! vassago --log-level debug -c input.bin output.huf
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;

use vassago_core::{
    CompressionStats, Compressor, Decompressor, Result, StreamConfig, DEFAULT_BUFFER_SIZE,
};
use vassago_huffman::HuffmanCodec;

#[derive(Parser, Debug)]
#[command(name = "vassago")]
#[command(author = "Vassago Contributors")]
#[command(version)]
#[command(about = "Lossless Huffman compression of arbitrary files", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// I/O buffer size in bytes (clamped to 4 KiB..=1 MiB)
    #[arg(long, global = true, default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress INPUT into a HUF1 container at OUTPUT
    #[command(short_flag = 'c')]
    Compress {
        /// File to compress
        input: PathBuf,
        /// Container to create
        output: PathBuf,
    },

    /// Decompress the HUF1 container INPUT into OUTPUT
    #[command(short_flag = 'd')]
    Decompress {
        /// Container to read
        input: PathBuf,
        /// File to create
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("vassago: failed to set tracing subscriber: {}", e);
    }

    let config = StreamConfig::with_buffer_size(args.buffer_size);
    debug!(
        "Buffers: {} bytes in, {} bytes out",
        config.input_buffer_size, config.output_buffer_size
    );

    match run(&args.command, &config) {
        Ok(stats) => {
            info!("{}", stats.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(category = e.category(), "{}", e);
            eprintln!("vassago: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command, config: &StreamConfig) -> Result<CompressionStats> {
    let codec = HuffmanCodec::new();
    match command {
        Command::Compress { input, output } => {
            info!("Compressing {} -> {}", input.display(), output.display());
            let mut reader = BufReader::with_capacity(config.input_buffer_size, File::open(input)?);
            let mut writer = create_output(output, config)?;
            let stats = codec.compress_stream(&mut reader, &mut writer)?;
            writer.flush()?;
            Ok(stats)
        }
        Command::Decompress { input, output } => {
            info!("Decompressing {} -> {}", input.display(), output.display());
            let mut reader = BufReader::with_capacity(config.input_buffer_size, File::open(input)?);
            let mut writer = create_output(output, config)?;
            let result = codec.decompress_stream(&mut reader, &mut writer);
            // Keep whatever was recovered before a failure
            let flushed = writer.flush();
            let stats = result?;
            flushed?;
            Ok(stats)
        }
    }
}

fn create_output(path: &Path, config: &StreamConfig) -> Result<BufWriter<File>> {
    Ok(BufWriter::with_capacity(
        config.output_buffer_size,
        File::create(path)?,
    ))
}
