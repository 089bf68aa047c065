pub mod colour;
pub mod colour_blender;
pub mod complex;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod plane_bounds;
pub mod point;
pub mod viewport;
