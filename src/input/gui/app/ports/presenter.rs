use crate::core::data::pixel_buffer::PixelBuffer;
use egui::Context as EguiContext;
use winit::window::Window;

/// Puts the render surface and the egui overlay on screen.
pub trait GuiPresenterPort {
    fn new(window: &'static Window) -> Self;
    fn render(
        &mut self,
        frame: &PixelBuffer,
        scan_line: Option<u32>,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32);
}
