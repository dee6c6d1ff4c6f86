//! This module serves as the public API for the chunked compression pipeline.
//!
//! It composes the pure `kernels` into the two end-to-end workflows: parallel,
//! chunked compression and single-threaded decompression.
//!
//! Data Flow:
//!
//!   compress:   bytes -> [partitioner] -> N spans -> N concurrent `rle::encode`
//!               -> concatenation in span order -> token stream
//!
//!   decompress: token stream -> one `rle::decode` -> bytes

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Splits the input into one contiguous span per worker.
pub mod partitioner;

/// Runs the compression workers and the sequential decoder.
pub mod orchestrator;


//==================================================================================
// 2. Public API Re-exports
//==================================================================================

pub use self::orchestrator::{
    compress_parallel,
    compress_parallel_with,
    decompress,
    decompress_with_report,
};
pub use self::partitioner::{partition, ChunkSpan};
