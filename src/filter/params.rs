//! Runtime parameters for a filter pass.
use super::kernel::MagnitudePolicy;
use super::sampler::SamplingPolicy;
use super::FilterError;
use crate::image::PixelView;

/// Parameters controlling one Sobel pass.
///
/// Defaults: luminance sampling, Euclidean magnitude, one worker per
/// logical CPU.
#[derive(Clone, Copy, Debug)]
pub struct SobelParams {
    /// Intensity sampling policy.
    pub sampling: SamplingPolicy,
    /// Gradient-magnitude combination rule.
    pub magnitude: MagnitudePolicy,
    /// Number of row-partition workers (>= 1), fixed for the pass.
    pub workers: usize,
}

impl Default for SobelParams {
    fn default() -> Self {
        Self {
            sampling: SamplingPolicy::default(),
            magnitude: MagnitudePolicy::default(),
            workers: num_cpus::get().max(1),
        }
    }
}

impl SobelParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sampling(mut self, sampling: SamplingPolicy) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_magnitude(mut self, magnitude: MagnitudePolicy) -> Self {
        self.magnitude = magnitude;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Reject invalid configurations before any worker is started.
    pub(crate) fn validate(&self, input: &PixelView<'_>) -> Result<(), FilterError> {
        if self.workers == 0 {
            return Err(FilterError::InvalidConfig(
                "worker count must be positive".to_string(),
            ));
        }
        if input.w == 0 || input.h == 0 {
            return Err(FilterError::InvalidConfig(
                "image dimensions must be positive".to_string(),
            ));
        }
        if input.channels < 3 {
            return Err(FilterError::InvalidConfig(
                "at least three channels per pixel are required".to_string(),
            ));
        }
        if input.stride < input.w * input.channels {
            return Err(FilterError::InvalidConfig(
                "stride is smaller than width * channels".to_string(),
            ));
        }
        if input.data.len() < input.stride * input.h {
            return Err(FilterError::InvalidConfig(
                "buffer is smaller than stride * height".to_string(),
            ));
        }
        Ok(())
    }
}
