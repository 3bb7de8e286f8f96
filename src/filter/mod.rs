//! Sobel edge-map filtering.
//!
//! This module provides the building blocks of the filter pass and the
//! high-level entry point tying them together:
//!
//! - Intensity sampling over interleaved pixels with zero padding at the
//!   border (`sampler`).
//! - The fixed 3×3 Sobel kernel pair and the magnitude combination rule
//!   (`kernel`).
//! - Row-range convolution writing greyscale-replicated gradients
//!   (`convolve`, `writer`).
//! - Static row partitioning across a fixed-size pool of scoped threads
//!   (`pool`).
//!
//! Design goals
//! - Deterministic output, independent of the worker count.
//! - Favor clarity and row-sliced exclusive writes over micro-optimizations.
pub mod convolve;
pub mod kernel;
pub mod params;
pub mod pool;
pub mod sampler;
pub mod writer;

pub use kernel::{combine, Kernel3, MagnitudePolicy, SOBEL_KERNEL_X, SOBEL_KERNEL_Y};
pub use params::SobelParams;
pub use pool::{partition_rows, RowRange};
pub use sampler::{sample, SamplingPolicy};

use crate::image::{PixelBuffer, PixelView};
use log::debug;
use std::fmt;
use std::time::Instant;

/// Errors surfaced by the filter and its I/O collaborators.
///
/// All of these are fatal to the run; no partial output is produced and
/// nothing is retried.
#[derive(Clone, Debug)]
pub enum FilterError {
    /// The input image could not be read or decoded.
    Decode(String),
    /// The output image could not be encoded or written.
    Encode(String),
    /// Invalid parameters or buffer geometry, rejected before any worker
    /// is started.
    InvalidConfig(String),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::Encode(msg) => write!(f, "encode error: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for FilterError {}

/// Summary of a completed filter pass.
#[derive(Clone, Copy, Debug)]
pub struct FilterReport {
    /// Worker count the pass ran with.
    pub workers: usize,
    /// Wall-clock duration of the convolution phase.
    pub elapsed_ms: f64,
}

/// Compute the Sobel edge map of `input`.
///
/// Allocates a zero-initialized output with the input's dimensions, stride
/// and channel layout, partitions the rows across `params.workers` scoped
/// threads and joins them all before returning. Every output pixel holds
/// the gradient magnitude replicated over its first three channels.
pub fn sobel_edge_map(
    input: PixelView<'_>,
    params: &SobelParams,
) -> Result<(PixelBuffer, FilterReport), FilterError> {
    params.validate(&input)?;
    let mut output = PixelBuffer::zeroed(input.w, input.h, input.channels, input.stride)
        .map_err(|e| FilterError::InvalidConfig(e.to_string()))?;

    let start = Instant::now();
    pool::run_pass(input, params, output.data_mut());
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    debug!(
        "Sobel: filtered {}x{} image in {:.3} ms with {} workers",
        input.w, input.h, elapsed_ms, params.workers
    );

    Ok((
        output,
        FilterReport {
            workers: params.workers,
            elapsed_ms,
        },
    ))
}
