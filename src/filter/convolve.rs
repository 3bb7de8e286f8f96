//! The 3×3 convolution pass over an assigned range of rows.
use super::kernel::{combine, SOBEL_KERNEL_X, SOBEL_KERNEL_Y};
use super::params::SobelParams;
use super::pool::RowRange;
use super::sampler::sample;
use super::writer::write_pixel;
use crate::image::PixelView;

/// Convolve the Sobel kernel pair over `range`, writing gradient pixels
/// into `out_rows`.
///
/// `out_rows` must cover exactly the output bytes of the rows in `range`
/// (`range.len() * stride`), which is what lets disjoint ranges be filled
/// concurrently over a single output buffer. All reads go to the input
/// view, so a neighbor row owned by another worker's range is safe to
/// sample.
pub fn convolve_rows(
    input: PixelView<'_>,
    params: &SobelParams,
    range: RowRange,
    out_rows: &mut [u8],
) {
    debug_assert_eq!(out_rows.len(), range.len() * input.stride);
    for y in range.start..range.end {
        let row_start = (y - range.start) * input.stride;
        let out_row = &mut out_rows[row_start..row_start + input.w * input.channels];
        for x in 0..input.w {
            let mut gx = 0.0f32;
            let mut gy = 0.0f32;
            for (i, (kx_row, ky_row)) in SOBEL_KERNEL_X.iter().zip(&SOBEL_KERNEL_Y).enumerate() {
                let sy = y as isize + i as isize - 1;
                for j in 0..3 {
                    let sx = x as isize + j as isize - 1;
                    let v = sample(&input, params.sampling, sx, sy);
                    gx += kx_row[j] * v;
                    gy += ky_row[j] * v;
                }
            }
            write_pixel(out_row, x, input.channels, combine(gx, gy, params.magnitude));
        }
    }
}
