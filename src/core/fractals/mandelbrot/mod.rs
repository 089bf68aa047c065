pub mod colour_palettes;
pub mod escape_time;
