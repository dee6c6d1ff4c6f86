// In: src/bridge/file_api.rs

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::bridge::format::RunReport;
use crate::chunk_pipeline::partitioner::clamp_worker_count;
use crate::chunk_pipeline::{compress_parallel, decompress_with_report};
use crate::config::{Operation, RunConfig};
use crate::error::TambakError;

/// Executes one run described by `config`: read the input file, compress or
/// decompress it, write the output file.
///
/// The input is read whole before processing starts and the output is only
/// written once processing has succeeded, so a failed run never leaves a
/// partial output file behind.
pub fn run(config: &RunConfig) -> Result<RunReport, TambakError> {
    config.validate()?;

    let input = fs::read(&config.input_path).map_err(|source| TambakError::InputUnavailable {
        path: config.input_path.clone(),
        source,
    })?;
    let output_path = config.resolved_output_path();

    log::info!(
        "Starting {} of '{}' ({} bytes)",
        config.operation,
        config.input_path.display(),
        input.len()
    );

    let start_time = Instant::now();
    let (output, worker_count, dropped_tokens) = match config.operation {
        Operation::Compress => {
            let requested = config.effective_worker_count();
            let output = compress_parallel(&input, requested)?;
            (output, clamp_worker_count(input.len(), requested), 0)
        }
        Operation::Decompress => {
            let (output, report) = decompress_with_report(&input)?;
            (output, 1, report.dropped_tokens)
        }
    };
    let elapsed = start_time.elapsed();

    fs::write(&output_path, &output).map_err(|source| TambakError::OutputUnavailable {
        path: output_path.clone(),
        source,
    })?;

    let report = RunReport {
        operation: config.operation,
        worker_count,
        input_size: input.len(),
        output_size: output.len(),
        output_path,
        elapsed,
        dropped_tokens,
    };
    log::info!("{}", report);
    Ok(report)
}

/// Compresses `input` into `output` using `workers` parallel workers.
pub fn compress_file(input: &Path, output: &Path, workers: usize) -> Result<RunReport, TambakError> {
    run(&RunConfig::compress(input, output, workers))
}

/// Decompresses `input` into `output` on a single thread.
pub fn decompress_file(input: &Path, output: &Path) -> Result<RunReport, TambakError> {
    run(&RunConfig::decompress(input, output))
}
