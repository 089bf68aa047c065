use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::progressive::{ExplorerConfig, ProgressiveController};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::log::progress_logger::LoggingProgressSink;
use log::info;
use std::path::Path;

/// Renders one complete progressive sequence off-screen and saves it.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    config: ExplorerConfig,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P, config: ExplorerConfig) -> Self {
        Self {
            presenter,
            config,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.config.validate()?;

        let mut buffer = PixelBuffer::with_dimensions(self.config.width, self.config.height)?;
        let mut controller = ProgressiveController::new(&self.config);
        let mut sink = LoggingProgressSink::new();

        info!("Rendering Mandelbrot set...");
        info!("Image size: {}x{}", self.config.width, self.config.height);
        info!(
            "Centre: {}{:+}i, size {}, palette {}",
            self.config.center.real,
            self.config.center.imag,
            self.config.size,
            self.config.palette_kind
        );

        controller.draw();
        let bands = controller.run_to_completion(&mut buffer, &mut sink);

        info!("Rendered {} bands", bands);

        self.buffer = Some(buffer);
        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            info!("Saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::mandelbrot::colour_palettes::kinds::PaletteKind;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MockFilePresenter {
        written: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for &MockFilePresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.buffer_size()));
            Ok(())
        }
    }

    fn small_config(palette_kind: PaletteKind) -> ExplorerConfig {
        ExplorerConfig::new(Complex::new(-0.5, 0.0), 1.0, 24, 18, palette_kind).unwrap()
    }

    #[test]
    fn test_write_before_generate_is_a_no_op() {
        let presenter = MockFilePresenter::default();
        let controller = SnapshotController::new(&presenter, small_config(PaletteKind::Smooth));

        controller.write("unused.ppm").unwrap();

        assert!(presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_generate_fills_every_pixel_then_writes() {
        let presenter = MockFilePresenter::default();
        let mut controller = SnapshotController::new(&presenter, small_config(PaletteKind::Smooth));

        controller.generate().unwrap();
        let buffer = controller.buffer().unwrap();

        // every pixel was painted with an opaque colour at least once
        for y in 0..18 {
            for x in 0..24 {
                assert_eq!(buffer.pixel(x, y).map(|c| c.a), Some(255));
            }
        }
        // the centre of the default view lies inside the set
        assert_eq!(buffer.pixel(12, 9), Some(Colour::BLACK));

        controller.write("out/frame.ppm").unwrap();
        assert_eq!(
            presenter.written.borrow().as_slice(),
            &[(PathBuf::from("out/frame.ppm"), 24 * 18 * 4)]
        );
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let presenter = MockFilePresenter::default();
        let config = ExplorerConfig {
            size: 0.0,
            ..ExplorerConfig::default()
        };
        let mut controller = SnapshotController::new(&presenter, config);

        assert!(controller.generate().is_err());
        assert!(controller.buffer().is_none());
    }
}
