use crate::core::data::pixel_buffer::PixelBuffer;
use std::path::Path;

/// Writes a finished frame to disk.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;
}
