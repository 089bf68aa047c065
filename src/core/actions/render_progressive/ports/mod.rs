//! Interfaces between the progressive renderer and its collaborators.

pub mod colour_palette;
pub mod progress_sink;
pub mod render_surface;
