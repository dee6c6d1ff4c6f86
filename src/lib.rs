//! This file is the root of the `tambak_rle` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`kernels`,
//!     `chunk_pipeline`, `bridge`, etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the two core entry points, `compress_parallel` and
//!     `decompress`, which are the only operations the outer layers need.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
pub mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod chunk_pipeline;
pub mod config;
pub mod error;
pub mod kernels;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use chunk_pipeline::{compress_parallel, decompress};
pub use config::{Operation, RunConfig};
pub use error::TambakError;
