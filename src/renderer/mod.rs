//! WebGPU rendering module
//!
//! The scene is assembled on the CPU as tinted, textured quads in world
//! pixels, then drawn with a single sprite pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{DrawBatch, Frame, TextureSlot, build_frame};
