// In: src/config.rs

//! The single source of truth for a tambak-rle run.
//!
//! This module defines the `RunConfig` struct, which is designed to be created
//! once at the application boundary (from CLI flags, an interactive prompt, or a
//! JSON file) and then passed down into the bridge. Nothing about a run lives in
//! process-wide state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TambakError;

/// Default input file, matching the original console tool.
pub const DEFAULT_INPUT_PATH: &str = "input.txt";
/// Default output file for `Operation::Compress`.
pub const DEFAULT_COMPRESSED_PATH: &str = "compressed.rle";
/// Default output file for `Operation::Decompress`.
pub const DEFAULT_DECOMPRESSED_PATH: &str = "decompressed.txt";

//==================================================================================
// I. Core Configuration Enums & Structs
//==================================================================================

/// Which direction a run goes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Parallel, chunked RLE compression.
    #[default]
    Compress,

    /// Single-threaded decompression. `worker_count` is ignored.
    Decompress,
}

impl Operation {
    /// The output file used when `RunConfig::output_path` is not set.
    pub fn default_output_path(self) -> &'static str {
        match self {
            Operation::Compress => DEFAULT_COMPRESSED_PATH,
            Operation::Decompress => DEFAULT_DECOMPRESSED_PATH,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Compress => write!(f, "compress"),
            Operation::Decompress => write!(f, "decompress"),
        }
    }
}

//==================================================================================
// II. The Unified RunConfig
//==================================================================================

/// The configuration for a single compress or decompress run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct RunConfig {
    #[serde(default)]
    pub operation: Operation,

    /// The number of compression workers requested. Clamped by the partitioner
    /// to `[1, input length]`.
    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// If `None`, falls back to `Operation::default_output_path`.
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    /// If true, `worker_count` is capped to the machine's available parallelism.
    /// The core drivers never cap on their own.
    #[serde(default)]
    pub cap_workers_to_cpus: bool,
}

// Default implementation to make constructing the config easier.
impl Default for RunConfig {
    fn default() -> Self {
        Self {
            operation: Operation::default(),
            worker_count: default_worker_count(),
            input_path: default_input_path(),
            output_path: None,
            cap_workers_to_cpus: false,
        }
    }
}

impl RunConfig {
    pub fn compress(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        worker_count: usize,
    ) -> Self {
        Self {
            operation: Operation::Compress,
            worker_count,
            input_path: input_path.into(),
            output_path: Some(output_path.into()),
            cap_workers_to_cpus: false,
        }
    }

    pub fn decompress(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            operation: Operation::Decompress,
            worker_count: 1,
            input_path: input_path.into(),
            output_path: Some(output_path.into()),
            cap_workers_to_cpus: false,
        }
    }

    /// Loads and validates a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, TambakError> {
        let text = fs::read_to_string(path).map_err(|source| TambakError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let config: RunConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TambakError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(TambakError::Config("input_path must not be empty".to_string()));
        }
        let output_path = self.resolved_output_path();
        // Canonical forms catch `sub/../in.txt` vs `in.txt` and symlinks, but only exist
        // for paths already on disk.
        let same_file = match (fs::canonicalize(&self.input_path), fs::canonicalize(&output_path)) {
            (Ok(input), Ok(output)) => input == output,
            _ => output_path == self.input_path,
        };
        if same_file {
            return Err(TambakError::Config(format!(
                "output path '{}' would overwrite the input",
                self.input_path.display()
            )));
        }
        Ok(())
    }

    pub fn resolved_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.operation.default_output_path()))
    }

    /// The worker count actually handed to the compression driver.
    pub fn effective_worker_count(&self) -> usize {
        if !self.cap_workers_to_cpus {
            return self.worker_count;
        }
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        self.worker_count.min(cpus)
    }
}

/// Helper for `serde` to provide a default for `worker_count`.
fn default_worker_count() -> usize {
    1
}

/// Helper for `serde` to provide a default for `input_path`.
fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_console_tool() {
        let config = RunConfig::default();
        assert_eq!(config.operation, Operation::Compress);
        assert_eq!(config.worker_count, 1);
        assert_eq!(config.input_path, PathBuf::from("input.txt"));
        assert_eq!(config.resolved_output_path(), PathBuf::from("compressed.rle"));

        let config = RunConfig {
            operation: Operation::Decompress,
            ..RunConfig::default()
        };
        assert_eq!(config.resolved_output_path(), PathBuf::from("decompressed.txt"));
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: RunConfig =
            serde_json::from_str(r#"{ "operation": "decompress", "input_path": "data.rle" }"#)
                .unwrap();
        assert_eq!(config.operation, Operation::Decompress);
        assert_eq!(config.input_path, PathBuf::from("data.rle"));
        assert_eq!(config.worker_count, 1);
        assert!(!config.cap_workers_to_cpus);
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let result: Result<RunConfig, _> = serde_json::from_str(r#"{ "operation": "explode" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_overwriting_input() {
        let config = RunConfig::compress("same.bin", "same.bin", 2);
        assert!(matches!(config.validate(), Err(TambakError::Config(_))));

        let config = RunConfig {
            input_path: PathBuf::new(),
            ..RunConfig::default()
        };
        assert!(matches!(config.validate(), Err(TambakError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_overwriting_input_by_another_spelling() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, b"aaa").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let detour = dir.path().join("sub").join("..").join("in.txt");
        assert_ne!(detour, input);
        let config = RunConfig::compress(&input, detour, 2);
        assert!(matches!(config.validate(), Err(TambakError::Config(_))));

        let config = RunConfig::compress(&input, dir.path().join("out.rle"), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_effective_worker_count_cap() {
        let mut config = RunConfig::compress("in", "out", 100_000);
        assert_eq!(config.effective_worker_count(), 100_000);

        config.cap_workers_to_cpus = true;
        let capped = config.effective_worker_count();
        assert!(capped >= 1 && capped < 100_000);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "operation": "compress", "worker_count": 4, "input_path": "a.txt", "output_path": "b.rle" }}"#
        )
        .unwrap();

        let config = RunConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config, RunConfig::compress("a.txt", "b.rle", 4));
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = RunConfig::from_json_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(TambakError::InputUnavailable { .. })));
    }
}
