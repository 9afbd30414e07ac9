//! Application plumbing for Windows: the render thread.

pub mod render_loop;

pub use render_loop::{spawn_render_thread, RenderThread};
