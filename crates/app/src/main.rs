//! huffpack: command-line Huffman compressor.
//!
//! Thin glue around `huffpack-core`: reads a whole file (or generates
//! sample text), runs the codec, and writes the result. Output files are
//! written only after the codec has fully succeeded, so a failed run
//! never leaves a partial artifact behind.

mod config;
mod input_gen;
mod stats;

use config::{Config, Mode};
use huffpack_core::{decode, encode};
use stats::SizeReport;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run `huffpack --help` for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(error) = run(&config) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> huffpack_core::Result<()> {
    match config.mode {
        Mode::Compress => compress(config),
        Mode::Decompress => decompress(config),
    }
}

fn compress(config: &Config) -> huffpack_core::Result<()> {
    let content = match &config.input_file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let text = input_gen::generate_sample_text(config.seed, config.sample_chars);
            println!(
                "generated {} chars of sample text (seed {})",
                config.sample_chars, config.seed
            );
            text
        }
    };

    let container = encode(&content)?;
    fs::write(&config.output_file, &container)?;

    println!("compressed -> {}", config.output_file.display());
    if config.print_stats {
        SizeReport {
            original_bytes: content.len() as u64,
            container_bytes: container.len() as u64,
        }
        .print_summary();
    }

    Ok(())
}

fn decompress(config: &Config) -> huffpack_core::Result<()> {
    // from_args guarantees an input path in decompress mode
    let input = config
        .input_file
        .as_ref()
        .expect("decompress mode always has an input file");

    let container = fs::read(input)?;
    let content = decode(&container)?;
    fs::write(&config.output_file, content.as_bytes())?;

    println!("decompressed -> {}", config.output_file.display());
    if config.print_stats {
        println!("Output size: {} bytes", content.len());
    }

    Ok(())
}
