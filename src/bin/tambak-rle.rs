//! tambak-rle CLI - Command-line interface for the parallel RLE compressor.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

use tambak_rle::bridge::{self, RunReport};
use tambak_rle::config::{DEFAULT_COMPRESSED_PATH, DEFAULT_INPUT_PATH};
use tambak_rle::observability;
use tambak_rle::{Operation, RunConfig, TambakError};

/// tambak-rle - Parallel chunked run-length encoding
#[derive(Parser, Debug)]
#[command(name = "tambak-rle")]
#[command(author, version, about = "Parallel chunked run-length encoding", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Append log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compress a file using parallel workers
    Compress {
        /// Input file path
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Output file path (defaults to compressed.rle)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of worker threads
        #[arg(short, long, default_value = "1")]
        threads: usize,

        /// Cap the thread count to the available CPUs
        #[arg(long)]
        cap_to_cpus: bool,
    },

    /// Decompress a file (always single-threaded)
    Decompress {
        /// Input file path
        #[arg(short, long, default_value = DEFAULT_COMPRESSED_PATH)]
        input: PathBuf,

        /// Output file path (defaults to decompressed.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print statistics about a compressed file without writing anything
    Analyze {
        /// Compressed file path
        #[arg(short, long, default_value = DEFAULT_COMPRESSED_PATH)]
        input: PathBuf,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run using a JSON configuration file
    Run {
        /// Path to the run configuration
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Prompt for the mode and thread count on stdin
    Interactive,
}

fn main() {
    let cli = Cli::parse();

    let result = observability::init_logging(cli.verbose, cli.log_file.as_deref())
        .and_then(|_| execute(cli.command));

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn execute(command: Commands) -> Result<(), TambakError> {
    match command {
        Commands::Compress {
            input,
            output,
            threads,
            cap_to_cpus,
        } => {
            let config = RunConfig {
                operation: Operation::Compress,
                worker_count: threads,
                input_path: input,
                output_path: output,
                cap_workers_to_cpus: cap_to_cpus,
            };
            print_report(&bridge::run(&config)?);
        }
        Commands::Decompress { input, output } => {
            let config = RunConfig {
                operation: Operation::Decompress,
                input_path: input,
                output_path: output,
                ..RunConfig::default()
            };
            print_report(&bridge::run(&config)?);
        }
        Commands::Analyze { input, json } => {
            let bytes = fs::read(&input).map_err(|source| TambakError::InputUnavailable {
                path: input.clone(),
                source,
            })?;
            let stats = bridge::analyze(&bytes)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{}", format!("Analysis of {}", input.display()).bold());
                println!("  Compressed size:   {} bytes", stats.compressed_size);
                println!("  Decompressed size: {} bytes", stats.decompressed_size);
                println!("  Ratio:             {:.3}", stats.ratio());
                println!("  Tokens:            {}", stats.token_count);
                println!("  Longest run:       {}", stats.longest_run);
                println!("  Distinct symbols:  {}", stats.distinct_symbols);
                if stats.dropped_tokens > 0 {
                    println!(
                        "  {}",
                        format!("Dropped tokens:    {}", stats.dropped_tokens).yellow()
                    );
                }
            }
        }
        Commands::Run { config } => {
            let config = RunConfig::from_json_file(&config)?;
            print_report(&bridge::run(&config)?);
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            match prompt_for_config(&mut stdin.lock())? {
                Some(config) => print_report(&bridge::run(&config)?),
                None => println!("Invalid choice."),
            }
        }
    }
    Ok(())
}

fn print_report(report: &RunReport) {
    println!("{}", report.to_string().green());
    if report.operation == Operation::Compress {
        println!(
            "  {} -> {} bytes using {} worker(s)",
            report.input_size, report.output_size, report.worker_count
        );
    }
    if report.dropped_tokens > 0 {
        println!(
            "  {}",
            format!(
                "warning: {} malformed token(s) were dropped",
                report.dropped_tokens
            )
            .yellow()
        );
    }
}

/// The console menu. Reads from `input.txt` in both modes, like the original tool.
fn prompt_for_config(input: &mut impl BufRead) -> Result<Option<RunConfig>, TambakError> {
    println!("=== Multithreaded File Compression Tool ===");
    println!("1. Compress File");
    println!("2. Decompress File");

    match prompt(input, "Enter choice: ")?.as_str() {
        "1" => {
            let answer = prompt(input, "Enter number of threads to use: ")?;
            let threads = answer.parse::<usize>().map_err(|e| {
                TambakError::Config(format!("invalid thread count '{}': {}", answer, e))
            })?;
            Ok(Some(RunConfig {
                operation: Operation::Compress,
                worker_count: threads,
                ..RunConfig::default()
            }))
        }
        "2" => Ok(Some(RunConfig {
            operation: Operation::Decompress,
            ..RunConfig::default()
        })),
        _ => Ok(None),
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String, TambakError> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
