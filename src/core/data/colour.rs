#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Rounds a unit-interval channel to a byte, clamping anything that drifted
/// outside [0, 1].
fn channel_to_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;

    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn mix(from: f64, to: f64, amount: f64) -> f64 {
    (1.0 - amount) * from + amount * to
}

impl Colour {
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque colour from hue, saturation and lightness, all in [0, 1].
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let (r, g, b) = if saturation == 0.0 {
            (lightness, lightness, lightness)
        } else {
            let q = if lightness < 0.5 {
                lightness * (1.0 + saturation)
            } else {
                lightness + saturation - lightness * saturation
            };
            let p = 2.0 * lightness - q;

            (
                hue_to_rgb(p, q, hue + 1.0 / 3.0),
                hue_to_rgb(p, q, hue),
                hue_to_rgb(p, q, hue - 1.0 / 3.0),
            )
        };

        Self::new(channel_to_byte(r), channel_to_byte(g), channel_to_byte(b))
    }

    /// Builds an opaque colour from hue in degrees [0, 360], saturation and
    /// value in [0, 1].
    ///
    /// Each channel sits at `value` or `value * (1 - saturation)` on its
    /// plateau sectors and is interpolated linearly across the 60° ramps
    /// between them.
    #[must_use]
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let high = value;
        let low = value * (1.0 - saturation);
        let h = hue;

        let r = if (0.0..=60.0).contains(&h) || (300.0..=360.0).contains(&h) {
            high
        } else if (120.0..=240.0).contains(&h) {
            low
        } else if (60.0..=120.0).contains(&h) {
            mix(high, low, (h - 60.0) / 60.0)
        } else if (240.0..=300.0).contains(&h) {
            mix(low, high, (h - 240.0) / 60.0)
        } else {
            0.0
        };

        let g = if (60.0..=180.0).contains(&h) {
            high
        } else if (240.0..=360.0).contains(&h) {
            low
        } else if (0.0..=60.0).contains(&h) {
            mix(low, high, h / 60.0)
        } else if (180.0..=240.0).contains(&h) {
            mix(high, low, (h - 180.0) / 60.0)
        } else {
            0.0
        };

        let b = if (0.0..=120.0).contains(&h) {
            low
        } else if (180.0..=300.0).contains(&h) {
            high
        } else if (120.0..=180.0).contains(&h) {
            mix(low, high, (h - 120.0) / 60.0)
        } else if (300.0..=360.0).contains(&h) {
            mix(high, low, (h - 300.0) / 60.0)
        } else {
            0.0
        };

        Self::new(channel_to_byte(r), channel_to_byte(g), channel_to_byte(b))
    }

    #[must_use]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_opaque() {
        let colour = Colour::new(10, 20, 30);

        assert_eq!(colour.a, 255);
        assert_eq!(colour.to_rgba(), [10, 20, 30, 255]);
    }

    #[test]
    fn test_with_alpha_keeps_alpha() {
        let colour = Colour::with_alpha(1, 2, 3, 4);

        assert_eq!(colour.to_rgba(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_hsl_zero_saturation_is_grey_for_any_hue() {
        for hue in [0.0, 0.1, 0.5, 0.99] {
            for lightness in [0.0, 0.25, 0.5, 0.8, 1.0] {
                let colour = Colour::from_hsl(hue, 0.0, lightness);
                let expected = (lightness * 255.0_f64).round() as u8;

                assert_eq!(colour.r, expected);
                assert_eq!(colour.g, expected);
                assert_eq!(colour.b, expected);
                assert_eq!(colour.a, 255);
            }
        }
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(Colour::from_hsl(0.0, 1.0, 0.5), Colour::new(255, 0, 0));
        assert_eq!(Colour::from_hsl(1.0 / 3.0, 1.0, 0.5), Colour::new(0, 255, 0));
        assert_eq!(Colour::from_hsl(2.0 / 3.0, 1.0, 0.5), Colour::new(0, 0, 255));
    }

    #[test]
    fn test_hsl_extreme_lightness() {
        assert_eq!(Colour::from_hsl(0.3, 1.0, 0.0), Colour::BLACK);
        assert_eq!(Colour::from_hsl(0.3, 1.0, 1.0), Colour::new(255, 255, 255));
    }

    #[test]
    fn test_hsl_out_of_range_lightness_is_clamped() {
        let colour = Colour::from_hsl(0.1, 1.0, 3.0);

        assert_eq!(colour, Colour::new(255, 255, 255));
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(Colour::from_hsv(0.0, 1.0, 1.0), Colour::new(255, 0, 0));
        assert_eq!(Colour::from_hsv(120.0, 1.0, 1.0), Colour::new(0, 255, 0));
        assert_eq!(Colour::from_hsv(240.0, 1.0, 1.0), Colour::new(0, 0, 255));
        assert_eq!(Colour::from_hsv(360.0, 1.0, 1.0), Colour::new(255, 0, 0));
    }

    #[test]
    fn test_hsv_secondaries() {
        assert_eq!(Colour::from_hsv(60.0, 1.0, 1.0), Colour::new(255, 255, 0));
        assert_eq!(Colour::from_hsv(180.0, 1.0, 1.0), Colour::new(0, 255, 255));
        assert_eq!(Colour::from_hsv(300.0, 1.0, 1.0), Colour::new(255, 0, 255));
    }

    #[test]
    fn test_hsv_ramp_is_interpolated() {
        // halfway between red (0°) and yellow (60°)
        let colour = Colour::from_hsv(30.0, 1.0, 1.0);

        assert_eq!(colour.r, 255);
        assert_eq!(colour.g, 128);
        assert_eq!(colour.b, 0);
    }

    #[test]
    fn test_hsv_zero_saturation_is_grey() {
        let colour = Colour::from_hsv(200.0, 0.0, 0.6);

        assert_eq!(colour, Colour::new(153, 153, 153));
    }
}
