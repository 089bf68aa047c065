//! Progressive, cooperatively scheduled rendering.
//!
//! A render sequence is a series of passes over the surface. The blocky
//! passes paint one random sample per `step` x `step` block with `step`
//! shrinking 16 -> 4 -> 1; a final pass then averages jittered samples for
//! every pixel. Each call into [`render_pass::RenderPass::render_band`] does a
//! bounded amount of work and hands control back to the host.

pub mod ports;
pub mod progress;
pub mod render_pass;
