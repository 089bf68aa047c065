mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::snapshot::SnapshotController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::progressive::{
    ExplorerConfig, ExplorerConfigError, ProgressiveController, RenderPhase, Resume,
};
pub use crate::core::actions::render_progressive::ports::colour_palette::ColourPalette;
pub use crate::core::actions::render_progressive::ports::progress_sink::{NullProgressSink, ProgressSink};
pub use crate::core::actions::render_progressive::ports::render_surface::RenderSurface;
pub use crate::core::actions::render_progressive::progress::ProgressReport;
pub use crate::core::actions::render_progressive::render_pass::{
    BandOutcome, INITIAL_STEP, PassMode, RenderPass, SUPERSAMPLE_JITTER, SUPERSAMPLES_PER_PIXEL,
    max_iterations_for,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::colour_blender::ColourBlender;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::plane_bounds::PlaneBounds;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, WheelDelta};
pub use crate::core::fractals::mandelbrot::colour_palettes::factory::palette_factory;
pub use crate::core::fractals::mandelbrot::colour_palettes::kinds::PaletteKind;
pub use crate::core::fractals::mandelbrot::escape_time::{EscapeTime, iterate};
pub use crate::core::util::metric_units::format_metric;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::log::progress_logger::LoggingProgressSink;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
