pub mod render_progressive;
