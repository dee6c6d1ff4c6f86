//! Splits an input length into contiguous, non-overlapping chunk spans, one per
//! compression worker.

use std::ops::Range;

/// A half-open `[start, end)` region of the input assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpan {
    /// Position of this span in partition order. Output is reassembled by this index.
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl ChunkSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Clamps a requested worker count to `[1, max(1, length)]` so no span is empty
/// (except the single span of an empty input).
pub fn clamp_worker_count(length: usize, worker_count: usize) -> usize {
    worker_count.clamp(1, length.max(1))
}

/// Partitions `[0, length)` into `worker_count` spans of `length / worker_count`
/// bytes each. The last span absorbs the remainder.
pub fn partition(length: usize, worker_count: usize) -> Vec<ChunkSpan> {
    let workers = clamp_worker_count(length, worker_count);
    let base = length / workers;

    (0..workers)
        .map(|index| {
            let start = index * base;
            let end = if index == workers - 1 {
                length
            } else {
                start + base
            };
            ChunkSpan { index, start, end }
        })
        .collect()
}
