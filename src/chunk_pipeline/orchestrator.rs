// In: src/chunk_pipeline/orchestrator.rs

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use crate::chunk_pipeline::partitioner::{partition, ChunkSpan};
use crate::error::TambakError;
use crate::kernels::rle::{self, DecodeReport};

/// One worker's exclusive output slot. `None` until the worker finishes.
type ChunkSlot = Option<Result<Vec<u8>, TambakError>>;

//==================================================================================
// 1. Compression Orchestration (Parallel)
//==================================================================================

/// Compresses `bytes` by splitting it into `worker_count` spans, encoding each
/// span on its own worker and concatenating the results in span order.
///
/// `worker_count` is clamped to `[1, max(1, bytes.len())]`. Runs never cross a
/// span boundary, so the output depends on the worker count, but it always
/// decodes back to `bytes`.
pub fn compress_parallel(bytes: &[u8], worker_count: usize) -> Result<Vec<u8>, TambakError> {
    compress_parallel_with(bytes, worker_count, |_span, chunk| rle::encode_to_vec(chunk))
}

/// The parallel driver with an injectable per-chunk encoder.
///
/// Each span gets its own task in a dedicated rayon pool and writes into its own
/// slot, so the input is only ever read and no locks are needed. The scope is the
/// join barrier. A panicking encoder surfaces as `WorkerFault` for its chunk and
/// the whole call fails; partial output is never returned.
pub fn compress_parallel_with<F>(
    bytes: &[u8],
    worker_count: usize,
    encoder: F,
) -> Result<Vec<u8>, TambakError>
where
    F: Fn(&ChunkSpan, &[u8]) -> Vec<u8> + Sync,
{
    let start_time = Instant::now();
    let spans = partition(bytes.len(), worker_count);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(spans.len())
        .thread_name(|i| format!("tambak-rle-worker-{}", i))
        .build()?;

    let mut slots: Vec<ChunkSlot> = spans.iter().map(|_| None).collect();
    let encoder = &encoder;

    pool.scope(|scope| {
        for (span, slot) in spans.iter().zip(slots.iter_mut()) {
            let chunk = &bytes[span.range()];
            scope.spawn(move |_| {
                *slot = Some(run_worker(span, chunk, encoder));
            });
        }
    });

    // Reassemble strictly by span index, never by completion order.
    let mut encoded_portions = Vec::with_capacity(spans.len());
    for (span, slot) in spans.iter().zip(slots) {
        let portion = slot.ok_or_else(|| TambakError::WorkerFault {
            chunk_index: span.index,
            reason: "worker finished without producing output".to_string(),
        })??;
        encoded_portions.push(portion);
    }

    let total_size: usize = encoded_portions.iter().map(Vec::len).sum();
    let mut result = Vec::with_capacity(total_size);
    for portion in encoded_portions {
        result.extend_from_slice(&portion);
    }

    let duration = start_time.elapsed();
    log::info!(
        "Compressed {} bytes -> {} bytes with {} worker(s) in {:.2?}",
        bytes.len(),
        result.len(),
        spans.len(),
        duration
    );
    log_metric!(
        "event"="compress_parallel",
        "workers"=&spans.len(),
        "input_size"=&bytes.len(),
        "output_size"=&result.len(),
        "elapsed_us"=&duration.as_micros()
    );

    Ok(result)
}

fn run_worker<F>(span: &ChunkSpan, chunk: &[u8], encoder: &F) -> Result<Vec<u8>, TambakError>
where
    F: Fn(&ChunkSpan, &[u8]) -> Vec<u8> + Sync,
{
    let start_chunk = Instant::now();
    match panic::catch_unwind(AssertUnwindSafe(|| encoder(span, chunk))) {
        Ok(encoded) => {
            log::debug!(
                "  - Chunk {:>4} [{}..{}) | {} -> {} bytes | Time: {:.2?}",
                span.index,
                span.start,
                span.end,
                chunk.len(),
                encoded.len(),
                start_chunk.elapsed()
            );
            Ok(encoded)
        }
        Err(payload) => {
            let reason = panic_message(&*payload);
            log::error!("Chunk {} worker panicked: {}", span.index, reason);
            Err(TambakError::WorkerFault {
                chunk_index: span.index,
                reason,
            })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "worker panicked with a non-string payload".to_string()
    }
}

//==================================================================================
// 2. Decompression Orchestration (Sequential)
//==================================================================================

// Decompression is single-threaded on purpose. The token stream carries no chunk
// boundaries, so any split of the compressed bytes could land between a symbol
// and its count.

/// Decompresses a token stream produced by `compress_parallel` (any worker count).
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, TambakError> {
    decompress_with_report(bytes).map(|(output, _)| output)
}

/// Same as [`decompress`], also returning the decoder's token accounting.
pub fn decompress_with_report(bytes: &[u8]) -> Result<(Vec<u8>, DecodeReport), TambakError> {
    let start_time = Instant::now();
    let mut output = Vec::new();
    let report = rle::decode(bytes, &mut output)?;

    if let Some(warning) = truncation_warning(&report) {
        log::warn!("{}", warning);
    }

    let duration = start_time.elapsed();
    log::info!(
        "Decompressed {} bytes -> {} bytes in {:.2?}",
        bytes.len(),
        output.len(),
        duration
    );
    log_metric!(
        "event"="decompress",
        "input_size"=&bytes.len(),
        "output_size"=&output.len(),
        "tokens"=&report.tokens,
        "dropped_tokens"=&report.dropped_tokens,
        "elapsed_us"=&duration.as_micros()
    );

    Ok((output, report))
}

/// The warning logged when a decode dropped tokens, or `None` for a clean stream.
pub(crate) fn truncation_warning(report: &DecodeReport) -> Option<String> {
    (report.dropped_tokens > 0).then(|| {
        format!(
            "Dropped {} of {} token(s) with no run count; decompressed output is truncated",
            report.dropped_tokens, report.tokens
        )
    })
}
