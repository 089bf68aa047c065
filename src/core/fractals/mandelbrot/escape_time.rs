use std::ops::ControlFlow;

/// Iterations run after the escape test to shrink the error of the
/// continuous potential estimate.
pub const REFINEMENT_ITERATIONS: u32 = 4;

/// Outcome of iterating one point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTime {
    /// Iterations reached before escaping, or `max_iterations` when the orbit
    /// stayed bounded.
    pub iterations: u32,
    /// Squared real part of the orbit after refinement.
    pub zr_squared: f64,
    /// Squared imaginary part of the orbit after refinement.
    pub zi_squared: f64,
}

impl EscapeTime {
    #[must_use]
    pub fn converged(&self, max_iterations: u32) -> bool {
        self.iterations >= max_iterations
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.zr_squared + self.zi_squared
    }
}

/// Iterates `z <- z^2 + c` from `z = 0` for `c = re + i*im` until
/// `|z|^2 > escape_radius_squared` or `max_iterations` is reached, then runs
/// [`REFINEMENT_ITERATIONS`] further steps that only update the returned
/// squares.
#[must_use]
pub fn iterate(re: f64, im: f64, escape_radius_squared: f64, max_iterations: u32) -> EscapeTime {
    let escape = (0..max_iterations).try_fold((0.0_f64, 0.0_f64), |(zr, zi), iteration| {
        let zr2 = zr * zr;
        let zi2 = zi * zi;

        if zr2 + zi2 > escape_radius_squared {
            ControlFlow::Break((iteration, zr, zi))
        } else {
            ControlFlow::Continue((zr2 - zi2 + re, 2.0 * zr * zi + im))
        }
    });

    let (iterations, mut zr, mut zi) = match escape {
        ControlFlow::Break(escaped) => escaped,
        ControlFlow::Continue((zr, zi)) => (max_iterations, zr, zi),
    };

    for _ in 0..REFINEMENT_ITERATIONS {
        let zr2 = zr * zr;
        let zi2 = zi * zi;
        zi = 2.0 * zr * zi + im;
        zr = zr2 - zi2 + re;
    }

    EscapeTime {
        iterations,
        zr_squared: zr * zr,
        zi_squared: zi * zi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for radius_squared in [0.01, 4.0, 100.0] {
            for max_iterations in [1, 17, 500] {
                let result = iterate(0.0, 0.0, radius_squared, max_iterations);

                assert_eq!(result.iterations, max_iterations);
                assert!(result.converged(max_iterations));
                assert_eq!(result.magnitude_squared(), 0.0);
            }
        }
    }

    #[test]
    fn test_far_point_escapes_quickly() {
        let result = iterate(2.0, 2.0, 100.0, 100);

        assert!(result.iterations <= 3, "escaped after {}", result.iterations);
        assert!(!result.converged(100));
        assert!(result.magnitude_squared() > 100.0);
    }

    #[test]
    fn test_known_escape_count() {
        // z1 = 2+2i (|z|^2 = 8), z2 = 2+10i (|z|^2 = 104)
        assert_eq!(iterate(2.0, 2.0, 100.0, 100).iterations, 2);
        assert_eq!(iterate(2.0, 2.0, 4.0, 100).iterations, 1);
    }

    #[test]
    fn test_zero_max_iterations_reports_zero() {
        let result = iterate(2.0, 2.0, 100.0, 0);

        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_refinement_does_not_change_count() {
        let result = iterate(0.5, 0.5, 100.0, 1000);

        // the refinement pushes the orbit far beyond the escape radius
        assert!(result.magnitude_squared() > 1.0e10);
        assert!(result.iterations < 1000);
    }

    #[test]
    fn test_bounded_points_report_max_iterations() {
        for (re, im) in [(-1.0, 0.0), (-0.1, 0.1), (0.25, 0.0), (-1.1, 0.1)] {
            assert_eq!(iterate(re, im, 100.0, 200).iterations, 200, "c = {}+{}i", re, im);
        }
    }

    #[test]
    fn test_count_never_exceeds_max() {
        for step in 0..40 {
            let re = -2.0 + f64::from(step) * 0.1;
            let result = iterate(re, 0.3, 4.0, 50);

            assert!(result.iterations <= 50);
        }
    }
}
