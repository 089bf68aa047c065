use crate::controllers::progressive::config::ExplorerConfig;
use crate::controllers::progressive::types::{RenderPhase, Resume};
use crate::core::actions::render_progressive::ports::progress_sink::ProgressSink;
use crate::core::actions::render_progressive::ports::render_surface::RenderSurface;
use crate::core::actions::render_progressive::render_pass::{BandOutcome, PassMode, RenderPass};
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, WheelDelta};
use crate::core::fractals::mandelbrot::colour_palettes::factory::palette_factory;
use crate::core::fractals::mandelbrot::colour_palettes::kinds::PaletteKind;
use crate::core::util::metric_units::format_metric;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct ProgressiveController<R: Rng = StdRng> {
    viewport: Viewport,
    initial: ExplorerConfig,
    palette_kind: PaletteKind,
    rng: R,
    pass: Option<RenderPass>,
    generation: u64,
    last_completed_generation: u64,
    drag_origin: Option<Point>,
}

impl ProgressiveController<StdRng> {
    #[must_use]
    pub fn new(config: &ExplorerConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> ProgressiveController<R> {
    /// Builds an idle controller. Nothing is rendered until [`Self::draw`]
    /// or a gesture starts a sequence.
    #[must_use]
    pub fn with_rng(config: &ExplorerConfig, rng: R) -> Self {
        Self {
            viewport: Viewport::new(config.center, config.size, config.width, config.height),
            initial: *config,
            palette_kind: config.palette_kind,
            rng,
            pass: None,
            generation: 0,
            last_completed_generation: 0,
            drag_origin: None,
        }
    }

    /// Abandons any running sequence and starts a new one for the current
    /// view. Returns the generation of the new sequence.
    pub fn draw(&mut self) -> u64 {
        self.generation += 1;
        self.pass = Some(RenderPass::new(
            self.generation,
            &self.viewport,
            palette_factory(self.palette_kind),
        ));

        self.generation
    }

    /// Renders the next band of the running sequence into `surface` and
    /// reports progress to `sink`.
    pub fn resume<S, P>(&mut self, surface: &mut S, sink: &mut P) -> Resume
    where
        S: RenderSurface + ?Sized,
        P: ProgressSink + ?Sized,
    {
        let Some(pass) = self.pass.as_mut() else {
            return Resume::Idle;
        };

        let (report, outcome) = pass.render_band(surface, &mut self.rng);
        sink.report(report);

        match outcome {
            BandOutcome::Pending => Resume::Continue,
            BandOutcome::Finished => {
                info!(
                    "sequence {} done in {:.2}s: {} samples, {} samples/s",
                    report.generation,
                    report.elapsed_seconds,
                    format_metric(report.total_samples as f64),
                    format_metric(report.samples_per_second)
                );

                self.last_completed_generation = report.generation;
                self.pass = None;
                Resume::Done
            }
        }
    }

    /// Resumes until the running sequence finishes. Returns the number of
    /// bands rendered.
    pub fn run_to_completion<S, P>(&mut self, surface: &mut S, sink: &mut P) -> usize
    where
        S: RenderSurface + ?Sized,
        P: ProgressSink + ?Sized,
    {
        let mut bands = 0;

        while self.pass.is_some() {
            self.resume(surface, sink);
            bands += 1;
        }

        bands
    }

    #[must_use]
    pub fn phase(&self) -> RenderPhase {
        match &self.pass {
            Some(pass) => match pass.mode() {
                PassMode::Blocky { step } => RenderPhase::Rendering { step },
                PassMode::Supersampled => RenderPhase::Supersampling,
            },
            None if self.generation == 0 => RenderPhase::Idle,
            None => RenderPhase::Done,
        }
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.pass.is_some()
    }

    /// Zooms in on the clicked pixel. The press that started the click no
    /// longer counts as a drag.
    pub fn double_click(&mut self, at: Point) -> u64 {
        self.drag_origin = None;
        self.viewport.zoom_at(at);
        self.draw()
    }

    pub fn wheel(&mut self, delta: WheelDelta) -> u64 {
        self.viewport.wheel_zoom(delta);
        self.draw()
    }

    pub fn drag_start(&mut self, at: Point) {
        self.drag_origin = Some(at);
    }

    /// Pans by the distance dragged since [`Self::drag_start`]. A release
    /// without a matching press, or at the press position, leaves the view
    /// and the running sequence alone.
    pub fn drag_end(&mut self, at: Point) -> Option<u64> {
        let origin = self.drag_origin.take()?;

        if origin == at {
            return None;
        }

        self.viewport.pan(origin, at);
        Some(self.draw())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> u64 {
        self.viewport.resize(width, height);
        self.draw()
    }

    pub fn set_palette(&mut self, kind: PaletteKind) -> u64 {
        self.palette_kind = kind;
        self.draw()
    }

    /// Returns to the configured centre and size, keeping the current
    /// surface dimensions and palette.
    pub fn reset_view(&mut self) -> u64 {
        self.viewport.set_view(self.initial.center, self.initial.size);
        self.draw()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn palette_kind(&self) -> PaletteKind {
        self.palette_kind
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.last_completed_generation
    }

    /// Iteration budget of the running sequence.
    #[must_use]
    pub fn max_iterations(&self) -> Option<u32> {
        self.pass.as_ref().map(RenderPass::max_iterations)
    }
}
