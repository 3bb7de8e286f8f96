//! Row-range partitioning and the fixed-size worker pool.
//!
//! The pass is a fork-join: each worker owns one contiguous range of output
//! rows and runs the convolution to completion against the shared read-only
//! input. Ranges are disjoint and the workers never exchange messages, so
//! the only synchronization point is the join at scope exit.
use super::convolve::convolve_rows;
use super::params::SobelParams;
use crate::image::PixelView;
use log::debug;
use std::thread;

/// Half-open range of image rows assigned to one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `[0, height)` into `workers` contiguous chunks.
///
/// Every worker but the last receives `height / workers` rows; the last
/// absorbs the remainder, so the ranges tile `[0, height)` exactly for any
/// divisibility. When `workers > height` the leading ranges come out empty
/// and the corresponding workers simply have nothing to do.
///
/// Panics if `workers` is zero; callers validate that before partitioning.
pub fn partition_rows(height: usize, workers: usize) -> Vec<RowRange> {
    assert!(workers > 0, "worker count must be positive");
    let chunk = height / workers;
    let mut ranges = Vec::with_capacity(workers);
    for k in 0..workers - 1 {
        ranges.push(RowRange {
            start: k * chunk,
            end: (k + 1) * chunk,
        });
    }
    ranges.push(RowRange {
        start: (workers - 1) * chunk,
        end: height,
    });
    ranges
}

/// Run the convolution over the whole image, blocking until every range is
/// done.
///
/// The output slice is carved into per-range row chunks up front, so each
/// worker holds an exclusive `&mut` over its own rows for the duration of
/// the pass.
pub(crate) fn run_pass(input: PixelView<'_>, params: &SobelParams, out: &mut [u8]) {
    let ranges = partition_rows(input.h, params.workers);
    if params.workers == 1 {
        convolve_rows(input, params, ranges[0], out);
        return;
    }

    thread::scope(|scope| {
        let mut rest: &mut [u8] = out;
        for range in ranges {
            let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * input.stride);
            rest = tail;
            if range.is_empty() {
                continue;
            }
            debug!("Sobel: worker assigned rows [{}, {})", range.start, range.end);
            scope.spawn(move || convolve_rows(input, params, range, chunk));
        }
    });
}
