use crate::core::actions::render_progressive::ports::colour_palette::ColourPalette;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_palettes::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;
use std::f64::consts::LN_2;

const HUE_OFFSET: f64 = 0.95;
const HUE_SCALE: f64 = 20.0;
const SATURATION: f64 = 0.8;
const VALUE: f64 = 1.0;

/// Brings `hue` into [0, 360]. Non-finite hues, from orbits that overflowed
/// during refinement, map to 0.
fn wrap_degrees(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }

    let mut hue = hue;

    while hue > 360.0 {
        hue -= 360.0;
    }
    while hue < 0.0 {
        hue += 360.0;
    }

    hue
}

/// Cycles the hue wheel with the normalised escape count.
#[derive(Debug, Clone, Copy, Default)]
pub struct HueCyclePalette;

impl ColourPalette for HueCyclePalette {
    fn compute_colour(&self, escape: EscapeTime, max_iterations: u32) -> Colour {
        if escape.converged(max_iterations) {
            return Colour::BLACK;
        }

        let zn = escape.magnitude_squared().sqrt();
        let smooth = f64::from(escape.iterations) + 1.0 - zn.abs().ln().ln() / LN_2;
        let hue = wrap_degrees(HUE_OFFSET + HUE_SCALE * smooth);

        Colour::from_hsv(hue, SATURATION, VALUE)
    }

    fn kind(&self) -> PaletteKind {
        PaletteKind::HueCycle
    }
}
