//! Values exchanged between the progressive controller and its host.

/// What the host should do after calling
/// [`ProgressiveController::resume`](super::ProgressiveController::resume).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    /// A band was rendered and more work is pending; call `resume` again
    /// once pending input has been handled.
    Continue,
    /// The final band of the sequence was rendered.
    Done,
    /// Nothing to render until the next view change.
    Idle,
}

/// Where the current render sequence is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    /// No sequence has been started.
    Idle,
    /// Blocky preview pass with the given block size.
    Rendering { step: u32 },
    Supersampling,
    /// The last sequence ran to completion.
    Done,
}
