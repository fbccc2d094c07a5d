//! Configuration for the huffpack command-line tool.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//!
//! # Philosophy
//!
//! `huffpack compress` works with ZERO further arguments: it generates a
//! reproducible sample text (seeded) and compresses it. All resolved
//! settings can be printed so runs are reproducible.

use std::path::PathBuf;

/// Which direction the tool runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Compress or decompress
    pub mode: Mode,

    /// Input file path (compress only: None = generate sample text)
    pub input_file: Option<PathBuf>,

    /// Output file path
    pub output_file: PathBuf,

    /// Seed for sample text generation
    pub seed: u64,

    /// Approximate sample text size in characters
    pub sample_chars: usize,

    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the size report after a run
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// The first argument selects the mode; the rest are flags. If no
    /// `--seed` is given, a time-based seed is used (and printed via
    /// `--print-config` for reproducibility).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mode = match args.first().map(String::as_str) {
            Some("compress") => Mode::Compress,
            Some("decompress") => Mode::Decompress,
            Some("--help") | Some("-h") => {
                print_help();
                std::process::exit(0);
            }
            Some(other) => return Err(format!("unknown command: {other}")),
            None => return Err("missing command: expected compress or decompress".to_string()),
        };

        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_chars: Option<usize> = None;
        let mut print_config = false;
        let mut print_stats = true;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-chars" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-chars requires a number".to_string());
                    }
                    sample_chars = Some(args[i].parse().map_err(|_| "invalid sample-chars")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        if mode == Mode::Decompress && input_file.is_none() {
            return Err("decompress requires --in <PATH>".to_string());
        }

        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        let default_out = match mode {
            Mode::Compress => "./out.huff",
            Mode::Decompress => "./out.txt",
        };

        Ok(Config {
            mode,
            input_file,
            output_file: output_file.unwrap_or_else(|| PathBuf::from(default_out)),
            seed,
            sample_chars: sample_chars.unwrap_or(16384),
            print_config,
            print_stats,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Mode:        {:?}", self.mode);
        println!(
            "Input file:  {}",
            self.input_file
                .as_ref()
                .and_then(|p| p.to_str())
                .unwrap_or("(generate sample)")
        );
        println!("Output file: {}", self.output_file.display());
        if self.mode == Mode::Compress && self.input_file.is_none() {
            println!("Seed:        {}", self.seed);
            println!("Sample size: {} chars", self.sample_chars);
        }
        println!();
    }
}

fn print_help() {
    println!("huffpack: Huffman file compression");
    println!();
    println!("USAGE:");
    println!("    huffpack <compress|decompress> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>           Input file (compress default: generate sample)");
    println!("    --out <PATH>          Output file (default: ./out.huff / ./out.txt)");
    println!("    --seed <N>            Seed for sample generation (default: time-based)");
    println!("    --sample-chars <N>    Sample text size (default: 16384)");
    println!();
    println!("    --print-config        Print resolved configuration");
    println!("    --no-stats            Don't print the size report");
    println!("    --help, -h            Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack compress --in book.txt --out book.huff");
    println!("    huffpack decompress --in book.huff --out book.txt");
    println!("    huffpack compress --seed 42        # compress generated sample");
    println!();
}
