/*
 * Renderer Module
 *
 * This module handles the drawing of the boid simulation: the light blue
 * backdrop, the world boundary cube, and each boid as a small cone mesh
 * oriented by its pose. Faces are flat shaded against a fixed directional
 * light, back faces are culled, and boids are drawn far to near so closer
 * ones paint over the ones behind them.
 */

use std::cmp::Ordering;
use std::f32::consts::TAU;
use std::sync::OnceLock;

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Pose;
use crate::camera::OrbitCamera;
use crate::ui;
use crate::{BOID_LENGTH, BOID_RADIUS};

const CONE_SEGMENTS: usize = 8;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(LIGHTBLUE);

    let window_rect = app.window_rect();

    draw_world_bounds(&draw, model.flock.config().world_scale, &model.camera, window_rect);

    // Painter's algorithm: draw the furthest boids first
    let mut order: Vec<usize> = (0..model.flock.boids.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        let depth_a = model.camera.view_depth(model.flock.boids[a].pose.position);
        let depth_b = model.camera.view_depth(model.flock.boids[b].pose.position);
        depth_b.partial_cmp(&depth_a).unwrap_or(Ordering::Equal)
    });

    let light = vec3(0.35, 0.8, 0.45).normalize();

    let mut visible = 0;
    for i in order {
        if draw_boid(&draw, &model.flock.boids[i].pose, &model.camera, window_rect, light) {
            visible += 1;
        }
    }
    *model.debug_info.visible_boids.lock().unwrap() = visible;

    // Draw debug visualization if enabled
    if model.params.show_debug {
        draw_velocity_marker(&draw, model, window_rect);
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.flock.boids.len());
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}

// The cone base circle in model space, built once. The apex sits at
// +z * BOID_LENGTH, so a boid's pose rotation points the cone along its
// direction of travel.
fn base_ring() -> &'static [Vec3; CONE_SEGMENTS] {
    static RING: OnceLock<[Vec3; CONE_SEGMENTS]> = OnceLock::new();
    RING.get_or_init(|| {
        let mut ring = [Vec3::ZERO; CONE_SEGMENTS];
        for (i, point) in ring.iter_mut().enumerate() {
            let theta = i as f32 / CONE_SEGMENTS as f32 * TAU;
            *point = vec3(theta.cos() * BOID_RADIUS, theta.sin() * BOID_RADIUS, 0.0);
        }
        ring
    })
}

// Draw one boid as a shaded cone. Returns false when the boid is off screen
// (at or behind the near plane).
fn draw_boid(
    draw: &Draw,
    pose: &Pose,
    camera: &OrbitCamera,
    window_rect: Rect,
    light: Vec3,
) -> bool {
    let apex_world = pose.position + pose.orientation * vec3(0.0, 0.0, BOID_LENGTH);
    let apex_screen = match camera.world_to_screen(apex_world, window_rect) {
        Some(point) => point,
        None => return false,
    };

    let mut ring_world = [Vec3::ZERO; CONE_SEGMENTS];
    let mut ring_screen = [Vec2::ZERO; CONE_SEGMENTS];
    for (i, point) in base_ring().iter().enumerate() {
        let world = pose.position + pose.orientation * *point;
        match camera.world_to_screen(world, window_rect) {
            Some(screen) => {
                ring_world[i] = world;
                ring_screen[i] = screen;
            }
            None => return false,
        }
    }

    let eye = camera.eye();

    // Side faces
    for i in 0..CONE_SEGMENTS {
        let j = (i + 1) % CONE_SEGMENTS;
        shade_face(
            draw,
            [apex_world, ring_world[i], ring_world[j]],
            [apex_screen, ring_screen[i], ring_screen[j]],
            eye,
            light,
        );
    }

    // Base cap, wound so its normal faces backward
    for i in 1..CONE_SEGMENTS - 1 {
        shade_face(
            draw,
            [ring_world[0], ring_world[i + 1], ring_world[i]],
            [ring_screen[0], ring_screen[i + 1], ring_screen[i]],
            eye,
            light,
        );
    }

    true
}

// Flat shade a single triangle against the light, skipping faces that point
// away from the camera
fn shade_face(draw: &Draw, world: [Vec3; 3], screen: [Vec2; 3], eye: Vec3, light: Vec3) {
    let normal = (world[1] - world[0]).cross(world[2] - world[0]);
    if normal.length_squared() < 1e-12 {
        return;
    }
    let normal = normal.normalize();

    let center = (world[0] + world[1] + world[2]) / 3.0;
    if normal.dot(center - eye) > 0.0 {
        return;
    }

    let brightness = 0.3 + 0.7 * normal.dot(light).max(0.0);
    draw.polygon()
        .color(rgb(0.85 * brightness, 0.25 * brightness, 0.2 * brightness))
        .points(screen);
}

// Wireframe cube marking the walls the boids steer back from
fn draw_world_bounds(draw: &Draw, world_scale: f32, camera: &OrbitCamera, window_rect: Rect) {
    let s = world_scale;
    let corners = [
        vec3(-s, -s, -s),
        vec3(s, -s, -s),
        vec3(s, s, -s),
        vec3(-s, s, -s),
        vec3(-s, -s, s),
        vec3(s, -s, s),
        vec3(s, s, s),
        vec3(-s, s, s),
    ];
    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    for (a, b) in EDGES {
        if let (Some(start), Some(end)) = (
            camera.world_to_screen(corners[a], window_rect),
            camera.world_to_screen(corners[b], window_rect),
        ) {
            draw.line()
                .start(start)
                .end(end)
                .weight(1.0)
                .color(rgba(0.3, 0.3, 0.3, 1.0));
        }
    }
}

// Velocity vector of the first boid, for eyeballing the rule pipeline
fn draw_velocity_marker(draw: &Draw, model: &Model, window_rect: Rect) {
    if let Some(boid) = model.flock.boids.first() {
        let tip = boid.position + boid.velocity * 5.0;
        if let (Some(start), Some(end)) = (
            model.camera.world_to_screen(boid.position, window_rect),
            model.camera.world_to_screen(tip, window_rect),
        ) {
            draw.arrow()
                .start(start)
                .end(end)
                .color(YELLOW)
                .stroke_weight(2.0);
        }
    }
}
