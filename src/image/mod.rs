pub mod buffer;
pub mod io;
pub mod view;

pub use self::buffer::{BufferError, PixelBuffer};
pub use self::view::PixelView;
