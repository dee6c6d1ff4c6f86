// In: src/bridge/stateless_api.rs

use crate::bridge::format::CompressionStats;
use crate::error::TambakError;
use crate::kernels::rle;

/// Analyzes a token stream without decompressing it.
///
/// Walks the same token iterator the decoder uses, so `decompressed_size` and
/// `dropped_tokens` agree with what `decompress` would produce. Sizes are
/// counted, never allocated, so a stream whose runs `decompress` rejects as
/// unallocatable still analyzes.
pub fn analyze(bytes: &[u8]) -> Result<CompressionStats, TambakError> {
    let mut stats = CompressionStats {
        compressed_size: bytes.len(),
        ..CompressionStats::default()
    };
    let mut seen = [false; 256];

    for token in rle::tokens(bytes) {
        let token = token?;
        stats.token_count += 1;

        let Some(count) = token.count else {
            stats.dropped_tokens += 1;
            continue;
        };

        stats.decompressed_size = stats.decompressed_size.checked_add(count).ok_or_else(|| {
            TambakError::CountOverflow("total decompressed size exceeds u64".to_string())
        })?;
        stats.longest_run = stats.longest_run.max(count);
        if count > 0 {
            seen[usize::from(token.symbol)] = true;
        }
    }

    stats.distinct_symbols = seen.iter().filter(|&&s| s).count();
    Ok(stats)
}
