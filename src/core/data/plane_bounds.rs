use crate::core::data::complex::Complex;

/// The rectangle of the complex plane currently mapped onto the surface.
///
/// `re_min`/`im_min` correspond to the left column and the top row of the
/// surface respectively.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneBounds {
    pub re_min: f64,
    pub re_max: f64,
    pub im_min: f64,
    pub im_max: f64,
}

impl PlaneBounds {
    #[must_use]
    pub fn re_span(&self) -> f64 {
        self.re_max - self.re_min
    }

    #[must_use]
    pub fn im_span(&self) -> f64 {
        self.im_max - self.im_min
    }

    /// Maps a (possibly fractional) pixel position on a `width` x `height`
    /// surface into the plane.
    #[must_use]
    pub fn pixel_to_plane(&self, px: f64, py: f64, width: u32, height: u32) -> Complex {
        Complex {
            real: self.re_min + self.re_span() * (px / f64::from(width)),
            imag: self.im_min + self.im_span() * (py / f64::from(height)),
        }
    }

    /// Inverse of [`PlaneBounds::pixel_to_plane`].
    #[must_use]
    pub fn plane_to_pixel(&self, point: Complex, width: u32, height: u32) -> (f64, f64) {
        (
            (point.real - self.re_min) / self.re_span() * f64::from(width),
            (point.imag - self.im_min) / self.im_span() * f64::from(height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> PlaneBounds {
        PlaneBounds {
            re_min: -2.5,
            re_max: 1.0,
            im_min: -1.0,
            im_max: 1.0,
        }
    }

    #[test]
    fn test_spans() {
        assert_eq!(bounds().re_span(), 3.5);
        assert_eq!(bounds().im_span(), 2.0);
    }

    #[test]
    fn test_pixel_to_plane_corners() {
        let b = bounds();

        assert_eq!(b.pixel_to_plane(0.0, 0.0, 700, 400), Complex::new(-2.5, -1.0));
        assert_eq!(b.pixel_to_plane(700.0, 400.0, 700, 400), Complex::new(1.0, 1.0));
        assert_eq!(b.pixel_to_plane(350.0, 200.0, 700, 400), Complex::new(-0.75, 0.0));
    }
}
