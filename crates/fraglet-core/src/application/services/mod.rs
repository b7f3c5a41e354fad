//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! high-level use cases: "render one block" and "render the full page".

pub mod block_render;

pub use block_render::{RendererHelper, render, render_block};
