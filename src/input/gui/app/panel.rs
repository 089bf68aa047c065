use crate::controllers::progressive::RenderPhase;
use crate::core::actions::render_progressive::ports::progress_sink::ProgressSink;
use crate::core::actions::render_progressive::progress::ProgressReport;
use crate::core::util::metric_units::format_metric;

const NOT_RUNNING: &str = "-";

/// Keeps the latest band report for the on-screen readouts.
#[derive(Debug, Default)]
pub struct ProgressPanel {
    latest: Option<ProgressReport>,
}

impl ProgressSink for ProgressPanel {
    fn report(&mut self, report: ProgressReport) {
        self.latest = Some(report);
    }
}

impl ProgressPanel {
    /// Row the scan indicator sits on, while a pass is running.
    #[must_use]
    pub fn scan_line(&self, phase: RenderPhase, height: u32) -> Option<u32> {
        if !matches!(phase, RenderPhase::Rendering { .. } | RenderPhase::Supersampling) {
            return None;
        }

        let report = self.latest.as_ref()?;
        let row = (report.fraction_complete * f64::from(height)).round() as u32;

        (row < height).then_some(row)
    }

    #[must_use]
    pub fn readouts(&self, phase: RenderPhase) -> Readouts {
        let running = matches!(
            phase,
            RenderPhase::Rendering { .. } | RenderPhase::Supersampling
        );

        let Some(report) = self.latest.as_ref() else {
            return Readouts::empty();
        };

        Readouts {
            step: match phase {
                RenderPhase::Rendering { step } => step.to_string(),
                RenderPhase::Supersampling => "AA".to_owned(),
                RenderPhase::Idle | RenderPhase::Done => NOT_RUNNING.to_owned(),
            },
            max_iterations: if running {
                report.max_iterations.to_string()
            } else {
                NOT_RUNNING.to_owned()
            },
            elapsed: format!("{:.2}", report.elapsed_seconds),
            samples: format_metric(report.total_samples as f64),
            samples_per_second: format_metric(report.samples_per_second),
            progress: if running {
                report.fraction_complete as f32
            } else {
                1.0
            },
        }
    }
}

/// Text shown in the progress panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Readouts {
    pub step: String,
    pub max_iterations: String,
    pub elapsed: String,
    pub samples: String,
    pub samples_per_second: String,
    pub progress: f32,
}

impl Readouts {
    fn empty() -> Self {
        Self {
            step: NOT_RUNNING.to_owned(),
            max_iterations: NOT_RUNNING.to_owned(),
            elapsed: NOT_RUNNING.to_owned(),
            samples: NOT_RUNNING.to_owned(),
            samples_per_second: NOT_RUNNING.to_owned(),
            progress: 0.0,
        }
    }
}
