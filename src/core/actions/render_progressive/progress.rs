/// Snapshot handed to a [`ProgressSink`](super::ports::progress_sink::ProgressSink)
/// after every band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressReport {
    /// Render sequence the band belongs to.
    pub generation: u64,
    /// Block side length of the pass, 1 for the per-pixel passes.
    pub step: u32,
    pub max_iterations: u32,
    pub elapsed_seconds: f64,
    /// Points evaluated since the sequence started.
    pub total_samples: u64,
    pub samples_per_second: f64,
    /// Vertical progress of the current pass in [0, 1].
    pub fraction_complete: f64,
    /// True while the anti-aliasing pass is running.
    pub supersampling: bool,
}

impl ProgressReport {
    #[must_use]
    pub fn samples_per_second(total_samples: u64, elapsed_seconds: f64) -> f64 {
        if elapsed_seconds > 0.0 {
            total_samples as f64 / elapsed_seconds
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_per_second() {
        assert_eq!(ProgressReport::samples_per_second(500, 2.0), 250.0);
    }

    #[test]
    fn test_samples_per_second_without_elapsed_time() {
        assert_eq!(ProgressReport::samples_per_second(500, 0.0), 0.0);
    }
}
