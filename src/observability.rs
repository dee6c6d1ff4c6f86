//! This module provides logging and diagnostics for the compression drivers.
//!
//! All crate diagnostics go through the `log` facade. Binaries (and tests that
//! want output) call `init_logging` once to install an `env_logger` backend.
//! The `log_metric!` macro emits structured key-value lines for timing and
//! sizing data, and is compiled out of release builds.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::TambakError;

/// Logs a structured key-value metric string at `debug` level, only in debug builds.
///
/// # Example
/// ```
/// use tambak_rle::log_metric;
/// let workers = 4;
/// log_metric!("event"="compress_parallel", "workers"=&workers);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            ::log::debug!("TAMBAK_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Maps a `-v` count to a level filter. Zero means "defer to `RUST_LOG`".
pub fn level_for_verbosity(verbosity: u8) -> Option<LevelFilter> {
    match verbosity {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Installs the global `env_logger` backend. Only the first call has any effect.
///
/// With `verbosity == 0` the level comes from `RUST_LOG` and falls back to `warn`,
/// so dropped-token warnings from the decoder are still visible by default.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>) -> Result<(), TambakError> {
    let file = match log_file {
        Some(path) => Some(
            OpenOptions::new()
                .append(true)
                .create(true)
                .open(path)
                .map_err(|source| TambakError::OutputUnavailable {
                    path: path.to_path_buf(),
                    source,
                })?,
        ),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

        builder.is_test(false);
        if let Some(level) = level_for_verbosity(verbosity) {
            builder.filter_level(level);
        }

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), None);
        assert_eq!(level_for_verbosity(1), Some(LevelFilter::Info));
        assert_eq!(level_for_verbosity(2), Some(LevelFilter::Debug));
        assert_eq!(level_for_verbosity(9), Some(LevelFilter::Trace));
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(2, None).unwrap();
        init_logging(0, None).unwrap();
        log_metric!("event"="test", "value"=&42);
    }
}
