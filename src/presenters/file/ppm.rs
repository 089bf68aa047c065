use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Saves frames as binary PPM. Alpha is dropped.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    fn write_to<W: Write>(buffer: &PixelBuffer, out: &mut W) -> std::io::Result<()> {
        let pixel_rect = buffer.pixel_rect();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", pixel_rect.width(), pixel_rect.height())?;
        writeln!(out, "255")?;

        for rgba in buffer.buffer().chunks_exact(BYTES_PER_PIXEL) {
            out.write_all(&rgba[..3])?;
        }

        out.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(File::create(filepath)?);
        Self::write_to(buffer, &mut file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_progressive::ports::render_surface::RenderSurface;
    use crate::core::data::colour::Colour;

    #[test]
    fn test_ppm_layout_drops_alpha() {
        let mut buffer = PixelBuffer::with_dimensions(2, 1).unwrap();
        buffer.put_pixel(0, 0, Colour::with_alpha(10, 20, 30, 0));
        buffer.put_pixel(1, 0, Colour::new(40, 50, 60));

        let mut out = Vec::new();
        PpmFilePresenter::write_to(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[10, 20, 30, 40, 50, 60]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("ppm_presenter_{}", std::process::id()));
        let filepath = dir.join("nested").join("frame.ppm");
        let buffer = PixelBuffer::with_dimensions(3, 2).unwrap();

        PpmFilePresenter::new().present(&buffer, &filepath).unwrap();

        let written = fs::read(&filepath).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);

        fs::remove_dir_all(dir).unwrap();
    }
}
