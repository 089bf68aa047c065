use crate::core::actions::render_progressive::ports::colour_palette::ColourPalette;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_palettes::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;

const HUE: f64 = 0.10;
const SATURATION: f64 = 0.9;

/// Fixed amber hue whose lightness follows the escape count. Points inside
/// the set reach full lightness.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmberPalette;

impl ColourPalette for AmberPalette {
    fn compute_colour(&self, escape: EscapeTime, max_iterations: u32) -> Colour {
        let lightness = f64::from(escape.iterations) / f64::from(max_iterations);

        Colour::from_hsl(HUE, SATURATION, lightness)
    }

    fn kind(&self) -> PaletteKind {
        PaletteKind::Amber
    }
}
