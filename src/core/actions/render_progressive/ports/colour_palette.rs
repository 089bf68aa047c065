use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_palettes::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;

pub trait ColourPalette: Send + Sync {
    fn compute_colour(&self, escape: EscapeTime, max_iterations: u32) -> Colour;

    fn kind(&self) -> PaletteKind;

    /// Escape radius the palette expects the evaluator to use.
    fn escape_radius(&self) -> f64 {
        self.kind().escape_radius()
    }

    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }
}
