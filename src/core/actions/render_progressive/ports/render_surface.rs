use crate::core::data::colour::Colour;

/// Pixel sink the progressive renderer paints into.
///
/// Coordinates are pixel indices within `[0, width) x [0, height)`.
pub trait RenderSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn put_pixel(&mut self, x: u32, y: u32, colour: Colour);
    /// Fills the half-open rectangle `[x1, x2) x [y1, y2)`.
    fn put_rectangle(&mut self, x1: u32, y1: u32, x2: u32, y2: u32, colour: Colour);
    /// Flushes buffered writes to whatever is visible.
    fn present(&mut self);
}
