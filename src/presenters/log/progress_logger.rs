use crate::core::actions::render_progressive::ports::progress_sink::ProgressSink;
use crate::core::actions::render_progressive::progress::ProgressReport;
use crate::core::util::metric_units::format_metric;
use log::{debug, trace};

/// Forwards band reports to the log. Pass changes are logged at debug level,
/// everything else at trace.
#[derive(Debug, Default)]
pub struct LoggingProgressSink {
    last_step: Option<(u64, u32, bool)>,
    reports: u64,
}

impl LoggingProgressSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reports(&self) -> u64 {
        self.reports
    }
}

impl ProgressSink for LoggingProgressSink {
    fn report(&mut self, report: ProgressReport) {
        self.reports += 1;

        let pass = (report.generation, report.step, report.supersampling);
        if self.last_step != Some(pass) {
            debug!(
                "sequence {}: {} pass, max iterations {}",
                report.generation,
                if report.supersampling {
                    "supersampling".to_owned()
                } else {
                    format!("step {}", report.step)
                },
                report.max_iterations
            );
            self.last_step = Some(pass);
        }

        trace!(
            "sequence {}: {:.0}% in {:.2}s, {} samples, {} samples/s",
            report.generation,
            report.fraction_complete * 100.0,
            report.elapsed_seconds,
            format_metric(report.total_samples as f64),
            format_metric(report.samples_per_second)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(step: u32, supersampling: bool) -> ProgressReport {
        ProgressReport {
            generation: 1,
            step,
            max_iterations: 111,
            elapsed_seconds: 0.5,
            total_samples: 1000,
            samples_per_second: 2000.0,
            fraction_complete: 0.25,
            supersampling,
        }
    }

    #[test]
    fn test_tracks_pass_changes() {
        let mut sink = LoggingProgressSink::new();

        sink.report(report(16, false));
        assert_eq!(sink.last_step, Some((1, 16, false)));

        sink.report(report(1, false));
        sink.report(report(1, true));
        assert_eq!(sink.last_step, Some((1, 1, true)));
        assert_eq!(sink.reports(), 3);
    }
}
