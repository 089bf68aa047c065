pub mod gestures;
pub mod gui_app;
pub mod panel;
pub mod ports;
