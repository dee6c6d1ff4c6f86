// In: src/error.rs

//! This module defines the single, unified error type for the entire tambak-rle library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TambakError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// The external input could not be opened or read. Fatal to the run.
    #[error("Cannot open input '{}': {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write output '{}': {source}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A parallel compression task terminated abnormally. The whole
    /// `compress_parallel` call fails; partial output is never returned.
    #[error("Compression worker for chunk {chunk_index} failed: {reason}")]
    WorkerFault { chunk_index: usize, reason: String },

    #[error("Run count overflow: {0}")]
    CountOverflow(String),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while loading a run config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<rayon::ThreadPoolBuildError> for TambakError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        TambakError::ThreadPool(err.to_string())
    }
}
