// In: src/bridge/format.rs

//! Defines the public-facing result structures returned by the bridge.
//!
//! The compressed format itself has no container: no magic number, header, chunk
//! manifest or footer. A token stream from N workers looks exactly like one from
//! a single worker, which is why these reports are the only metadata a run produces.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::config::Operation;

/// The outcome of one `bridge::run` call.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub operation: Operation,
    /// Workers actually used after clamping; always 1 for decompression.
    pub worker_count: usize,
    pub input_size: usize,
    pub output_size: usize,
    pub output_path: PathBuf,
    /// Processing time, excluding file reads and writes.
    pub elapsed: Duration,
    /// Tokens skipped by the decoder because they had no count. Always 0 when compressing.
    pub dropped_tokens: usize,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.operation {
            Operation::Compress => "Compressed",
            Operation::Decompress => "Decompressed",
        };
        write!(
            f,
            "{} to {} in {} ms",
            verb,
            self.output_path.display(),
            self.elapsed.as_millis()
        )
    }
}

/// The public-facing struct for token stream analysis, returned by `analyze`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompressionStats {
    pub compressed_size: usize,
    /// Size `decompress` would produce, computed without materializing it.
    pub decompressed_size: u64,
    pub token_count: usize,
    pub dropped_tokens: usize,
    pub longest_run: u64,
    pub distinct_symbols: usize,
}

impl CompressionStats {
    /// `compressed_size / decompressed_size`; below 1.0 means the data shrank.
    pub fn ratio(&self) -> f64 {
        if self.decompressed_size == 0 {
            return 0.0;
        }
        self.compressed_size as f64 / self.decompressed_size as f64
    }
}
