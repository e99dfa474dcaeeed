//! Rendering layer: Markdown fragment generation.

pub mod endpoint;

pub use endpoint::render_endpoint;
