use crate::core::actions::render_progressive::ports::colour_palette::ColourPalette;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_palettes::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;
use std::f64::consts::LN_2;

/// Continuous escape potential mapped onto hue and lightness.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothPalette;

impl SmoothPalette {
    /// Fractional escape count. `escape` must have left a radius greater than
    /// one, otherwise the nested logarithm is undefined.
    #[must_use]
    pub fn potential(escape: EscapeTime) -> f64 {
        5.0 + f64::from(escape.iterations) - 0.5_f64.ln() / LN_2
            - escape.magnitude_squared().ln().ln() / LN_2
    }
}

impl ColourPalette for SmoothPalette {
    fn compute_colour(&self, escape: EscapeTime, max_iterations: u32) -> Colour {
        if escape.converged(max_iterations) {
            return Colour::BLACK;
        }

        let v = Self::potential(escape);
        let max = f64::from(max_iterations);

        Colour::from_hsl(20.0 * v / max, 1.0, 10.0 * v / max)
    }

    fn kind(&self) -> PaletteKind {
        PaletteKind::Smooth
    }
}
