//! Vertex types for 2D sprite rendering

use bytemuck::{Pod, Zeroable};

/// Textured, tinted 2D vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }

    /// Vertex for untextured geometry (samples the blank texture)
    pub const fn solid(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self::new(x, y, 0.5, 0.5, color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2, 2 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Sky gradient stops (#87CEEB, #98FB98, #228B22)
    pub const SKY_TOP: [f32; 4] = [0.529, 0.808, 0.922, 1.0];
    pub const SKY_HORIZON: [f32; 4] = [0.596, 0.984, 0.596, 1.0];
    pub const SKY_BOTTOM: [f32; 4] = [0.133, 0.545, 0.133, 1.0];
    /// Fraction of the screen height where the horizon color sits
    pub const HORIZON_STOP: f32 = 0.7;
    /// Grass strokes (#32CD32)
    pub const GRASS: [f32; 4] = [0.196, 0.804, 0.196, 1.0];
    pub const SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.2];

    /// Stand-ins when a sprite image failed to load
    pub const FALLBACK_UNICORN: [f32; 4] = [1.0, 0.85, 0.95, 1.0];
    pub const FALLBACK_CLOUD: [f32; 4] = [0.97, 0.97, 1.0, 1.0];
    pub const FALLBACK_RAINBOW: [f32; 4] = [0.95, 0.4, 0.75, 1.0];
}
