//! Interactive viewer: move two triangles around and watch their
//! intersection classification and geometry update live.

use macroquad::prelude::*;
use nalgebra::Point3;
use tri_intersect::{Intersection, Triangle, triangles_intersect_into};
use tri_viz::{OrbitCamera, draw_intersection, draw_triangle_fill, draw_triangle_wire, to_vec3};

const MOVE_STEP: f64 = 0.03;

/// The six editable vertices: two triangles of three points each.
struct Scene {
    vertices: [Point3<f64>; 6],
    selected: usize,
}

impl Scene {
    fn new() -> Self {
        Self {
            vertices: [
                // A pair that crosses along a segment
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 5.0),
                Point3::new(5.0, 0.0, 0.0),
                Point3::new(1.0, -1.0, 1.0),
                Point3::new(1.0, -1.0, -1.0),
                Point3::new(1.0, 1.0, 1.0),
            ],
            selected: 0,
        }
    }

    fn triangle_1(&self) -> Triangle {
        Triangle::new(self.vertices[0], self.vertices[1], self.vertices[2])
    }

    fn triangle_2(&self) -> Triangle {
        Triangle::new(self.vertices[3], self.vertices[4], self.vertices[5])
    }

    /// Handles vertex selection and movement keys.
    fn update(&mut self) {
        if is_key_pressed(KeyCode::Tab) {
            self.selected = (self.selected + 1) % 6;
        }

        let v = &mut self.vertices[self.selected];
        if is_key_down(KeyCode::L) {
            v.x += MOVE_STEP;
        }
        if is_key_down(KeyCode::J) {
            v.x -= MOVE_STEP;
        }
        if is_key_down(KeyCode::I) {
            v.y += MOVE_STEP;
        }
        if is_key_down(KeyCode::K) {
            v.y -= MOVE_STEP;
        }
        if is_key_down(KeyCode::U) {
            v.z -= MOVE_STEP;
        }
        if is_key_down(KeyCode::O) {
            v.z += MOVE_STEP;
        }
    }
}

#[macroquad::main("Triangle Intersection")]
async fn main() {
    let mut camera = OrbitCamera::new(12.0, 0.6, 0.4);
    let mut scene = Scene::new();
    let mut points = Vec::new();

    loop {
        camera.update();
        scene.update();

        let t1 = scene.triangle_1();
        let t2 = scene.triangle_2();
        let result = triangles_intersect_into(&t1, &t2, &mut points);

        clear_background(Color::from_rgba(15, 15, 25, 255));
        set_camera(&camera.to_camera3d());

        // World axes
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(4.0, 0.0, 0.0), RED);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 4.0, 0.0), GREEN);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 4.0), BLUE);

        draw_triangle_fill(&t1, Color::from_rgba(80, 140, 220, 120));
        draw_triangle_wire(&t1, SKYBLUE);
        draw_triangle_fill(&t2, Color::from_rgba(220, 140, 80, 120));
        draw_triangle_wire(&t2, ORANGE);

        if result.is_some() {
            draw_intersection(&points, YELLOW);
        }

        // Selected vertex marker
        draw_sphere(to_vec3(&scene.vertices[scene.selected]), 0.09, None, WHITE);

        set_default_camera();

        let label = match result {
            Some(Intersection::Cross) => "Cross",
            Some(Intersection::Coplanar) => "Coplanar",
            None => "No intersection",
        };
        draw_text(
            &format!("{} ({} points)", label, points.len()),
            10.0,
            25.0,
            24.0,
            WHITE,
        );
        draw_text(
            &format!(
                "Selected vertex: {} of triangle {}",
                scene.selected % 3 + 1,
                scene.selected / 3 + 1
            ),
            10.0,
            50.0,
            18.0,
            YELLOW,
        );
        draw_text(
            "Tab: next vertex | J/L: x | I/K: y | U/O: z",
            10.0,
            72.0,
            16.0,
            DARKGRAY,
        );
        draw_text(
            "Drag mouse to rotate, scroll to zoom",
            10.0,
            90.0,
            16.0,
            DARKGRAY,
        );

        next_frame().await
    }
}
