//! GUI input adapter for interactive exploration.
//!
//! Uses winit for the window and input events, pixels for the framebuffer
//! the progressive renderer paints into, and egui for the progress panel.
//! Rendering advances one band per event-loop turn so input stays live.

pub mod app;
pub mod commands;
