//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in world pixels (y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Axis-aligned textured quad. `flip_x` mirrors the texture horizontally.
pub fn sprite(min: Vec2, size: Vec2, color: [f32; 4], flip_x: bool) -> [Vertex; 6] {
    let max = min + size;
    let (u0, u1) = if flip_x { (1.0, 0.0) } else { (0.0, 1.0) };

    let tl = Vertex::new(min.x, min.y, u0, 0.0, color);
    let tr = Vertex::new(max.x, min.y, u1, 0.0, color);
    let bl = Vertex::new(min.x, max.y, u0, 1.0, color);
    let br = Vertex::new(max.x, max.y, u1, 1.0, color);

    [tl, bl, tr, tr, bl, br]
}

/// Solid quad with a vertical color gradient
pub fn gradient_rect(min: Vec2, max: Vec2, top: [f32; 4], bottom: [f32; 4]) -> [Vertex; 6] {
    let tl = Vertex::solid(min.x, min.y, top);
    let tr = Vertex::solid(max.x, min.y, top);
    let bl = Vertex::solid(min.x, max.y, bottom);
    let br = Vertex::solid(max.x, max.y, bottom);

    [tl, bl, tr, tr, bl, br]
}

/// Straight line segment of the given width, drawn as a quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> [Vertex; 6] {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    [
        Vertex::solid(a.x, a.y, color),
        Vertex::solid(b.x, b.y, color),
        Vertex::solid(c.x, c.y, color),
        Vertex::solid(c.x, c.y, color),
        Vertex::solid(b.x, b.y, color),
        Vertex::solid(d.x, d.y, color),
    ]
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::solid(center.x, center.y, color));
        vertices.push(Vertex::solid(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::solid(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}
