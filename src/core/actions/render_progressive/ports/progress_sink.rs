use crate::core::actions::render_progressive::progress::ProgressReport;

pub trait ProgressSink {
    fn report(&mut self, report: ProgressReport);
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    #[inline]
    fn report(&mut self, _report: ProgressReport) {}
}

impl<F> ProgressSink for F
where
    F: FnMut(ProgressReport),
{
    #[inline]
    fn report(&mut self, report: ProgressReport) {
        self(report)
    }
}
