#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod filter;
pub mod image;

// --- High-level re-exports -------------------------------------------------

// Main entry point: the filter pass + its result types.
pub use crate::filter::{sobel_edge_map, FilterError, FilterReport, SobelParams};

// Policy enums configuring a pass.
pub use crate::filter::{MagnitudePolicy, SamplingPolicy};

// Buffer types shared with the I/O collaborators.
pub use crate::image::{BufferError, PixelBuffer, PixelView};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_map::prelude::*;
///
/// # fn main() {
/// let input = PixelBuffer::new(64, 64, 3).unwrap();
/// let (edges, report) = sobel_edge_map(input.as_view(), &SobelParams::default()).unwrap();
/// println!("{}x{} in {:.3} ms", edges.width(), edges.height(), report.elapsed_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::filter::{sobel_edge_map, MagnitudePolicy, SamplingPolicy, SobelParams};
    pub use crate::image::{PixelBuffer, PixelView};
}
