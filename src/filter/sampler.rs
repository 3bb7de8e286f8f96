//! Per-pixel intensity sampling with a zero-padding boundary policy.
//!
//! The convolution probes a 3×3 neighborhood, so coordinates are signed and
//! may land outside the image. Out-of-bounds samples evaluate to 0.0 rather
//! than clamping to the nearest pixel; clamping would fabricate gradient
//! energy along the border.
use crate::image::PixelView;
use serde::Deserialize;

/// How a scalar intensity is derived from a pixel's channels.
///
/// One policy applies to an entire filter pass; the two are never mixed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingPolicy {
    /// Perceptual luminance from the red, green and blue channels.
    #[default]
    Luminance,
    /// Raw byte value of the pixel's first channel.
    RawChannel,
}

// ITU-R-like perceptual weights.
const LUMA_R: f32 = 0.2989;
const LUMA_G: f32 = 0.5870;
const LUMA_B: f32 = 0.1140;

/// Sample the intensity at (x, y), zero outside the image.
#[inline]
pub fn sample(img: &PixelView<'_>, policy: SamplingPolicy, x: isize, y: isize) -> f32 {
    if x < 0 || y < 0 || x as usize >= img.w || y as usize >= img.h {
        return 0.0;
    }
    let i = y as usize * img.stride + x as usize * img.channels;
    match policy {
        SamplingPolicy::Luminance => {
            LUMA_R * img.data[i] as f32
                + LUMA_G * img.data[i + 1] as f32
                + LUMA_B * img.data[i + 2] as f32
        }
        SamplingPolicy::RawChannel => img.data[i] as f32,
    }
}
