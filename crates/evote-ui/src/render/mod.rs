//! Rendering: the template environment and the per-pass context.
//!
//! - [`Renderer`]: compiled component templates plus the themed filters
//! - [`RenderContext`]: what a component receives while a scope renders it

mod context;
mod filters;
mod renderer;

pub use context::RenderContext;
pub use renderer::Renderer;
