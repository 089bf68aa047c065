use crate::controllers::progressive::{ExplorerConfig, ProgressiveController, Resume};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::viewport::WheelDelta;
use crate::core::fractals::mandelbrot::colour_palettes::kinds::PaletteKind;
use crate::input::gui::app::gestures::{Gesture, MouseGestures};
use crate::input::gui::app::panel::ProgressPanel;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error};
use std::time::Instant;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::Window;

/// Lines reported by notched wheels are converted back to raw notch units.
const WHEEL_UNITS_PER_LINE: f64 = 120.0;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    width: u32,
    height: u32,
    presenter: T,
    controller: ProgressiveController,
    frame: PixelBuffer,
    panel: ProgressPanel,
    gestures: MouseGestures,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    redraw_pending: bool,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        config: ExplorerConfig,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let size = window.inner_size();
        let config = config.with_dimensions(size.width.max(1), size.height.max(1));
        config.validate()?;

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        let mut controller = ProgressiveController::new(&config);
        controller.draw();

        Ok(Self {
            window,
            width: config.width,
            height: config.height,
            presenter,
            controller,
            frame: PixelBuffer::with_dimensions(config.width, config.height)?,
            panel: ProgressPanel::default(),
            gestures: MouseGestures::default(),
            egui_ctx,
            egui_state,
            redraw_pending: true,
        })
    }

    /// Runs the event loop until the window is closed.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), winit::error::EventLoopError> {
        let window = self.window;

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let egui_consumed = self.handle_window_event(event);

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        if let Err(err) = self.redraw() {
                            error!("render error: {}", err);
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => self.resize(size.width, size.height),
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        self.resize(size.width, size.height);
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        self.gestures.cursor_moved(to_point(*position));
                    }
                    WindowEvent::MouseInput {
                        state,
                        button: MouseButton::Left,
                        ..
                    } if !egui_consumed => self.mouse_button(*state),
                    WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                        self.controller.wheel(to_wheel_delta(*delta));
                    }
                    _ => {}
                }

                if egui_consumed {
                    self.redraw_pending = true;
                }
            }
            Event::AboutToWait => {
                if self.advance() {
                    self.redraw_pending = true;
                }

                if self.redraw_pending {
                    window.request_redraw();
                }

                elwt.set_control_flow(if self.controller.is_rendering() {
                    ControlFlow::Poll
                } else {
                    ControlFlow::Wait
                });
            }
            _ => {}
        })
    }

    /// Renders one band of the running sequence, if any.
    fn advance(&mut self) -> bool {
        match self.controller.resume(&mut self.frame, &mut self.panel) {
            Resume::Continue | Resume::Done => true,
            Resume::Idle => false,
        }
    }

    fn redraw(&mut self) -> Result<(), pixels::Error> {
        self.redraw_pending = false;

        let egui_output = self.update_ui();
        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let scan_line = self.panel.scan_line(self.controller.phase(), self.height);
        self.presenter
            .render(&self.frame, scan_line, egui_output, &self.egui_ctx)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.redraw_pending = true;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);

        match self.frame.resize(width, height) {
            Ok(()) => {
                debug!("surface resized to {}x{}", width, height);
                self.controller.resize(width, height);
            }
            Err(err) => error!("cannot resize surface: {}", err),
        }
    }

    fn mouse_button(&mut self, state: ElementState) {
        let gesture = match state {
            ElementState::Pressed => self.gestures.press(),
            ElementState::Released => self.gestures.release(Instant::now()),
        };

        match gesture {
            Some(Gesture::DragStart(at)) => self.controller.drag_start(at),
            Some(Gesture::DragEnd(at)) => {
                self.controller.drag_end(at);
            }
            Some(Gesture::DoubleClick(at)) => {
                self.controller.double_click(at);
            }
            None => {}
        }
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let phase = self.controller.phase();
        let readouts = self.panel.readouts(phase);
        let center = self.controller.viewport().center();
        let size = self.controller.viewport().size();
        let mut palette_kind = self.controller.palette_kind();
        let mut reset_requested = false;

        let mut output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Progress")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 200.0])
                .show(ctx, |ui| {
                    egui::Grid::new("progress_readouts").show(ui, |ui| {
                        ui.label("Step:");
                        ui.label(readouts.step.as_str());
                        ui.end_row();
                        ui.label("Max iterations:");
                        ui.label(readouts.max_iterations.as_str());
                        ui.end_row();
                        ui.label("Time (s):");
                        ui.label(readouts.elapsed.as_str());
                        ui.end_row();
                        ui.label("Samples:");
                        ui.label(readouts.samples.as_str());
                        ui.end_row();
                        ui.label("Samples/s:");
                        ui.label(readouts.samples_per_second.as_str());
                        ui.end_row();
                    });
                    ui.add(egui::ProgressBar::new(readouts.progress));

                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("Palette:");
                        egui::ComboBox::from_id_source("palette_kind")
                            .selected_text(palette_kind.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in PaletteKind::ALL {
                                    ui.selectable_value(
                                        &mut palette_kind,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    ui.label(format!("Centre: {:.6} {:+.6}i", center.real, center.imag));
                    ui.label(format!("Size: {:.3e}", size));

                    if ui.button("Reset view").clicked() {
                        reset_requested = true;
                    }
                });
        });

        let platform_output = std::mem::take(&mut output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if palette_kind != self.controller.palette_kind() {
            self.controller.set_palette(palette_kind);
        }
        if reset_requested {
            self.controller.reset_view();
        }

        output
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(self.window, event);
        response.consumed
    }
}

fn to_point(position: PhysicalPosition<f64>) -> Point {
    Point::new(position.x.round() as i32, position.y.round() as i32)
}

fn to_wheel_delta(delta: MouseScrollDelta) -> WheelDelta {
    match delta {
        MouseScrollDelta::LineDelta(_, lines) => {
            WheelDelta::Notched(f64::from(lines) * WHEEL_UNITS_PER_LINE)
        }
        MouseScrollDelta::PixelDelta(position) => WheelDelta::Continuous(position.y.round()),
    }
}
