//! Progressive explorer controller.
//!
//! Owns the viewport and the single in-flight render sequence. Gestures and
//! view changes start a new sequence; the host drives it forward one band at
//! a time with [`ProgressiveController::resume`].

pub mod config;
mod controller;
mod types;

pub use config::{ExplorerConfig, ExplorerConfigError};
pub use controller::ProgressiveController;
pub use types::{RenderPhase, Resume};
