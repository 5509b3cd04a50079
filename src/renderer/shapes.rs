//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::heading_to_unit;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Triangle inscribed in a circle of `radius`, nose along `heading_degrees`
pub fn ship_triangle(
    center: Vec2,
    radius: f32,
    heading_degrees: f32,
    color: [f32; 4],
) -> [Vertex; 3] {
    let corner = |offset: f32| {
        let p = center + heading_to_unit(heading_degrees + offset) * radius;
        Vertex::new(p.x, p.y, color)
    };
    [corner(0.0), corner(120.0), corner(240.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count_and_extent() {
        let verts = circle(Vec2::new(10.0, 10.0), 5.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
        for v in &verts {
            let d = Vec2::from(v.position) - Vec2::new(10.0, 10.0);
            assert!(d.length() <= 5.0 + 1e-4);
        }
    }

    #[test]
    fn test_ship_triangle_points_along_heading() {
        let [nose, ..] = ship_triangle(Vec2::new(400.0, 300.0), 20.0, 0.0, [1.0; 4]);
        assert!((nose.position[0] - 420.0).abs() < 1e-3);
        assert!((nose.position[1] - 300.0).abs() < 1e-3);
    }
}
