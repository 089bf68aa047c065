//! Rendering core: plane geometry, escape-time evaluation, colouring and the
//! progressive scheduler. Nothing in here touches a window, a file or a
//! clock other than `Instant` for progress timing.

pub mod actions;
pub mod data;
pub mod fractals;
pub mod util;
