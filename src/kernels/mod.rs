//! This module serves as the public API for the pure, stateless compression and
//! decompression kernels.
//!
//! Kernels never spawn threads, touch the filesystem or log. The drivers in
//! `chunk_pipeline` are the only callers that add concurrency around them.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Run-length token stream (symbol byte + decimal count).
pub mod rle;

/// Decimal ASCII run counts, used by `rle`.
pub mod decimal;
