// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing layer between the outside world (files, the
// CLI) and the pure `chunk_pipeline` engine. The engine only ever sees byte
// slices; everything path- or report-shaped lives here.
//
// Data Flow (Compression):
//
//   1. [File API (run)]                       -> Receives a `RunConfig`
//         |
//         `-> reads `input_path` whole (InputUnavailable on failure)
//         |
//   2. [Pipeline Engine (compress_parallel)]  -> Returns the token stream
//         |
//   3. [File API (run)]                       -> Writes `output_path`, returns `RunReport`
//
// Data Flow (Decompression) is identical, with `decompress_with_report` in step 2.
//
// ====================================================================================
pub mod file_api;
pub mod format;
pub mod stateless_api;

pub use file_api::{compress_file, decompress_file, run};
pub use format::{CompressionStats, RunReport};
pub use stateless_api::analyze;
