//! Builders for small deterministic test images.
use edge_map::image::PixelBuffer;

/// Solid RGB image with every channel set to `value`.
pub fn uniform_rgb(width: usize, height: usize, value: u8) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    PixelBuffer::from_raw(width, height, 3, width * 3, vec![value; width * 3 * height]).unwrap()
}

/// Vertical step edge: columns left of `split_x` at `lo`, the rest at `hi`.
pub fn vertical_step_rgb(width: usize, height: usize, split_x: usize, lo: u8, hi: u8) -> PixelBuffer {
    let mut data = vec![0u8; width * 3 * height];
    for y in 0..height {
        for x in 0..width {
            let v = if x < split_x { lo } else { hi };
            let i = (y * width + x) * 3;
            data[i] = v;
            data[i + 1] = v;
            data[i + 2] = v;
        }
    }
    PixelBuffer::from_raw(width, height, 3, width * 3, data).unwrap()
}

/// All-black square image with one bright pixel in the center.
pub fn bright_center_rgb(size: usize, value: u8) -> PixelBuffer {
    assert!(size % 2 == 1, "size must be odd so the center is a pixel");
    let mut data = vec![0u8; size * 3 * size];
    let center = size / 2;
    let i = (center * size + center) * 3;
    data[i] = value;
    data[i + 1] = value;
    data[i + 2] = value;
    PixelBuffer::from_raw(size, size, 3, size * 3, data).unwrap()
}

/// Generates a simple high-contrast RGB checkerboard.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> PixelBuffer {
    assert!(cell > 0, "cell size must be positive");
    let mut data = vec![0u8; width * 3 * height];
    for y in 0..height {
        for x in 0..width {
            let sum = (x / cell) + (y / cell);
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            let i = (y * width + x) * 3;
            data[i] = val;
            data[i + 1] = val;
            data[i + 2] = val;
        }
    }
    PixelBuffer::from_raw(width, height, 3, width * 3, data).unwrap()
}

/// Copy `src` into a buffer whose rows carry `pad` extra stride bytes.
///
/// Padding bytes are filled with a nonzero marker so any code that walks
/// rows by `width * channels` instead of the stride shows up immediately.
pub fn with_row_padding(src: &PixelBuffer, pad: usize) -> PixelBuffer {
    let stride = src.width() * src.channels() + pad;
    let mut data = vec![0xAAu8; stride * src.height()];
    for y in 0..src.height() {
        let row = src.row(y);
        data[y * stride..y * stride + row.len()].copy_from_slice(row);
    }
    PixelBuffer::from_raw(src.width(), src.height(), src.channels(), stride, data).unwrap()
}
