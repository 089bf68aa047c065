use crate::core::actions::render_progressive::ports::colour_palette::ColourPalette;
use crate::core::actions::render_progressive::ports::render_surface::RenderSurface;
use crate::core::actions::render_progressive::progress::ProgressReport;
use crate::core::data::colour::Colour;
use crate::core::data::colour_blender::ColourBlender;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::escape_time::iterate;
use log::{debug, trace};
use rand::Rng;
use std::time::Instant;

/// Block size of the first, coarsest pass.
pub const INITIAL_STEP: u32 = 16;

/// Each blocky pass divides the block size by this much.
pub const STEP_DIVISOR: f64 = 4.0;

pub const SUPERSAMPLES_PER_PIXEL: usize = 4;

/// Side of the square, in pixels, that supersample offsets are drawn from.
pub const SUPERSAMPLE_JITTER: f64 = 1.0;

/// Iteration budget for a view: fewer iterations for wide views, more as the
/// view narrows.
#[must_use]
pub fn max_iterations_for(bounds: &PlaneBounds) -> u32 {
    let span = bounds.re_span().abs().min(bounds.im_span().abs());

    (223.0 / (0.001 + 2.0 * span).sqrt()).floor() as u32
}

#[must_use]
pub fn next_step(step: u32) -> u32 {
    ((f64::from(step) / STEP_DIVISOR).round() as u32).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassMode {
    /// One sample per `step` x `step` block.
    Blocky { step: u32 },
    /// [`SUPERSAMPLES_PER_PIXEL`] jittered samples blended per pixel.
    Supersampled,
}

impl PassMode {
    #[must_use]
    pub fn step(self) -> u32 {
        match self {
            Self::Blocky { step } => step,
            Self::Supersampled => 1,
        }
    }

    /// Block rows processed before control goes back to the host.
    fn rows_per_band(self) -> u32 {
        self.step()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandOutcome {
    /// More bands remain in this sequence.
    Pending,
    /// The supersampled pass reached the bottom of the surface.
    Finished,
}

/// Everything one render sequence needs between bands. Owned by a single
/// controller and dropped wholesale when the view changes.
pub struct RenderPass {
    generation: u64,
    bounds: PlaneBounds,
    width: u32,
    height: u32,
    max_iterations: u32,
    escape_radius_squared: f64,
    palette: Box<dyn ColourPalette>,
    mode: PassMode,
    row: u32,
    total_samples: u64,
    started_at: Instant,
    blender: ColourBlender,
}

impl std::fmt::Debug for RenderPass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderPass")
            .field("generation", &self.generation)
            .field("bounds", &self.bounds)
            .field("max_iterations", &self.max_iterations)
            .field("palette", &self.palette.kind())
            .field("mode", &self.mode)
            .field("row", &self.row)
            .field("total_samples", &self.total_samples)
            .finish()
    }
}

impl RenderPass {
    #[must_use]
    pub fn new(generation: u64, viewport: &Viewport, palette: Box<dyn ColourPalette>) -> Self {
        let bounds = viewport.bounds();
        let max_iterations = max_iterations_for(&bounds);
        let escape_radius = palette.escape_radius();

        debug!(
            "render sequence {} started: re [{}, {}] im [{}, {}], max iterations {}, palette {}",
            generation,
            bounds.re_min,
            bounds.re_max,
            bounds.im_min,
            bounds.im_max,
            max_iterations,
            palette.display_name()
        );

        Self {
            generation,
            bounds,
            width: viewport.width(),
            height: viewport.height(),
            max_iterations,
            escape_radius_squared: escape_radius * escape_radius,
            palette,
            mode: PassMode::Blocky { step: INITIAL_STEP },
            row: 0,
            total_samples: 0,
            started_at: Instant::now(),
            blender: ColourBlender::new(),
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn mode(&self) -> PassMode {
        self.mode
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn bounds(&self) -> PlaneBounds {
        self.bounds
    }

    #[must_use]
    pub fn total_samples(&self) -> u64 {
        self.total_samples
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    /// Renders one band of the current pass, presents the surface and moves
    /// on to the next pass when the bottom is reached. The returned report
    /// describes the band just drawn.
    pub fn render_band<S, R>(&mut self, surface: &mut S, rng: &mut R) -> (ProgressReport, BandOutcome)
    where
        S: RenderSurface + ?Sized,
        R: Rng,
    {
        let width = self.width.min(surface.width());
        let height = self.height.min(surface.height());
        let mode = self.mode;

        if width > 0 && height > 0 {
            match mode {
                PassMode::Blocky { step } => {
                    for _ in 0..mode.rows_per_band() {
                        if self.row >= height {
                            break;
                        }
                        self.render_block_row(surface, rng, step, width, height);
                        self.row += step;
                    }
                }
                PassMode::Supersampled => {
                    if self.row < height {
                        self.render_supersampled_row(surface, rng, width);
                        self.row += 1;
                    }
                }
            }
        }

        surface.present();

        let report = self.progress_report(mode, height);
        trace!(
            "sequence {} band done: step {}, row {}/{}",
            self.generation,
            mode.step(),
            self.row.min(height),
            height
        );

        let outcome = if self.row >= height {
            self.advance_pass()
        } else {
            BandOutcome::Pending
        };

        (report, outcome)
    }

    fn render_block_row<S, R>(&mut self, surface: &mut S, rng: &mut R, step: u32, width: u32, height: u32)
    where
        S: RenderSurface + ?Sized,
        R: Rng,
    {
        for x in (0..width).step_by(step as usize) {
            let block = PixelRect::block(x, self.row, step, width, height);
            let px = rng.gen_range(f64::from(block.left())..f64::from(block.right()));
            let py = rng.gen_range(f64::from(block.top())..f64::from(block.bottom()));
            let colour = self.sample(px, py);

            surface.put_rectangle(block.left(), block.top(), block.right(), block.bottom(), colour);
        }
    }

    fn render_supersampled_row<S, R>(&mut self, surface: &mut S, rng: &mut R, width: u32)
    where
        S: RenderSurface + ?Sized,
        R: Rng,
    {
        let y = self.row;

        for x in 0..width {
            self.blender.clear();

            for _ in 0..SUPERSAMPLES_PER_PIXEL {
                let px = f64::from(x) + rng.gen_range(0.0..SUPERSAMPLE_JITTER);
                let py = f64::from(y) + rng.gen_range(0.0..SUPERSAMPLE_JITTER);
                let colour = self.sample(px, py);
                self.blender.add(colour);
            }

            if let Some(colour) = self.blender.resolve() {
                surface.put_pixel(x, y, colour);
            }
        }
    }

    fn sample(&mut self, px: f64, py: f64) -> Colour {
        let c = self.bounds.pixel_to_plane(px, py, self.width, self.height);
        let escape = iterate(c.real, c.imag, self.escape_radius_squared, self.max_iterations);
        self.total_samples += 1;

        self.palette.compute_colour(escape, self.max_iterations)
    }

    fn progress_report(&self, mode: PassMode, height: u32) -> ProgressReport {
        let elapsed_seconds = self.elapsed_seconds();
        let fraction_complete = if height == 0 {
            1.0
        } else {
            (f64::from(self.row) / f64::from(height)).min(1.0)
        };

        ProgressReport {
            generation: self.generation,
            step: mode.step(),
            max_iterations: self.max_iterations,
            elapsed_seconds,
            total_samples: self.total_samples,
            samples_per_second: ProgressReport::samples_per_second(self.total_samples, elapsed_seconds),
            fraction_complete,
            supersampling: mode == PassMode::Supersampled,
        }
    }

    fn advance_pass(&mut self) -> BandOutcome {
        self.row = 0;

        match self.mode {
            PassMode::Blocky { step } if step > 1 => {
                let step = next_step(step);
                debug!("sequence {} refining to step {}", self.generation, step);
                self.mode = PassMode::Blocky { step };
                BandOutcome::Pending
            }
            PassMode::Blocky { .. } => {
                debug!("sequence {} supersampling", self.generation);
                self.mode = PassMode::Supersampled;
                BandOutcome::Pending
            }
            PassMode::Supersampled => BandOutcome::Finished,
        }
    }
}
