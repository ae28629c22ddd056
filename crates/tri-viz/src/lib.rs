//! Shared drawing utilities for the triangle-intersection viewer.

use macroquad::models::{Mesh, Vertex, draw_mesh};
use macroquad::prelude::*;
use nalgebra::Point3;
use tri_intersect::Triangle;

/// Converts a kernel point to a macroquad vector.
pub fn to_vec3(p: &Point3<f64>) -> Vec3 {
    vec3(p.x as f32, p.y as f32, p.z as f32)
}

/// Draws a filled triangle, visible from both sides.
pub fn draw_triangle_fill(tri: &Triangle, color: Color) {
    let verts: Vec<Vertex> = tri
        .vertices()
        .iter()
        .map(|p| Vertex::new2(to_vec3(p), vec2(0.0, 0.0), color))
        .collect();

    // Both windings, so the fill shows regardless of the camera side
    let mesh = Mesh {
        vertices: verts,
        indices: vec![0, 1, 2, 0, 2, 1],
        texture: None,
    };
    draw_mesh(&mesh);
}

/// Draws a triangle's outline.
pub fn draw_triangle_wire(tri: &Triangle, color: Color) {
    let [a, b, c] = tri.vertices();
    draw_line_3d(to_vec3(a), to_vec3(b), color);
    draw_line_3d(to_vec3(b), to_vec3(c), color);
    draw_line_3d(to_vec3(c), to_vec3(a), color);
}

/// Draws intersection geometry: a point, a segment, or a convex polygon.
pub fn draw_intersection(points: &[Point3<f64>], color: Color) {
    match points {
        [] => {}
        [p] => draw_sphere(to_vec3(p), 0.06, None, color),
        [p, q] => {
            draw_sphere(to_vec3(p), 0.06, None, color);
            draw_sphere(to_vec3(q), 0.06, None, color);
            draw_line_3d(to_vec3(p), to_vec3(q), color);
        }
        polygon => {
            for (i, p) in polygon.iter().enumerate() {
                let next = &polygon[(i + 1) % polygon.len()];
                draw_sphere(to_vec3(p), 0.05, None, color);
                draw_line_3d(to_vec3(p), to_vec3(next), color);
            }
        }
    }
}

/// Simple orbit camera: mouse drag to rotate, scroll wheel to zoom.
pub struct OrbitCamera {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub target: Vec3,
}

impl OrbitCamera {
    pub fn new(distance: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            distance,
            yaw,
            pitch,
            target: vec3(0.0, 0.0, 0.0),
        }
    }

    /// Updates camera state from user input.
    pub fn update(&mut self) {
        if is_mouse_button_down(MouseButton::Left) {
            let delta = mouse_delta_position();
            self.yaw -= delta.x * 2.0;
            self.pitch -= delta.y * 2.0;
        }

        // Clamp pitch to avoid gimbal lock
        self.pitch = self.pitch.clamp(-1.5, 1.5);

        let scroll = mouse_wheel().1;
        self.distance = (self.distance - scroll * 0.8).clamp(2.0, 60.0);
    }

    /// Returns the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + vec3(x, y, z)
    }

    /// Converts to macroquad's Camera3D for rendering.
    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            up: vec3(0.0, 1.0, 0.0),
            target: self.target,
            ..Default::default()
        }
    }
}
