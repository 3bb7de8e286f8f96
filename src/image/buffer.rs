//! Owned interleaved 8-bit pixel buffer with an explicit row stride.
//!
//! Rows may carry alignment padding, so the byte offset of pixel (x, y),
//! channel c is always `y * stride + x * channels + c` and never
//! `(y * width + x) * channels`.
use super::PixelView;
use std::fmt;

/// Errors from pixel buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height is zero.
    InvalidDimensions,
    /// Fewer than three channels per pixel.
    TooFewChannels,
    /// Stride is smaller than `width * channels`.
    StrideTooSmall,
    /// Data length does not equal `stride * height`.
    DataSizeMismatch,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions => write!(f, "width and height must be positive"),
            Self::TooFewChannels => write!(f, "at least three channels per pixel are required"),
            Self::StrideTooSmall => write!(f, "stride is smaller than width * channels"),
            Self::DataSizeMismatch => write!(f, "data length does not equal stride * height"),
        }
    }
}

impl std::error::Error for BufferError {}

/// Owned interleaved pixel buffer (8 bits per channel, RGB-first layout).
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: usize,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Construct a zero-initialized buffer with a tight stride.
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self, BufferError> {
        Self::zeroed(width, height, channels, width * channels)
    }

    /// Construct a zero-initialized buffer of `stride * height` bytes.
    pub fn zeroed(
        width: usize,
        height: usize,
        channels: usize,
        stride: usize,
    ) -> Result<Self, BufferError> {
        Self::from_raw(width, height, channels, stride, vec![0u8; stride * height])
    }

    /// Wrap raw bytes, validating dimensions, channel count and stride.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        stride: usize,
        data: Vec<u8>,
    ) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions);
        }
        if channels < 3 {
            return Err(BufferError::TooFewChannels);
        }
        if stride < width * channels {
            return Err(BufferError::StrideTooSmall);
        }
        if data.len() != stride * height {
            return Err(BufferError::DataSizeMismatch);
        }
        Ok(Self {
            width,
            height,
            channels,
            stride,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per pixel
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Bytes between the start of consecutive rows
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    /// Byte offset of pixel (x, y), channel c.
    pub fn offset(&self, x: usize, y: usize, c: usize) -> usize {
        y * self.stride + x * self.channels + c
    }

    /// Backing bytes, including any row padding.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// The `width * channels` pixel bytes of row `y`, padding excluded.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width * self.channels]
    }

    /// Borrow as a read-only `PixelView`.
    pub fn as_view(&self) -> PixelView<'_> {
        PixelView {
            w: self.width,
            h: self.height,
            channels: self.channels,
            stride: self.stride,
            data: &self.data,
        }
    }
}
