/*
 * Camera Module
 *
 * This module defines the OrbitCamera struct that orbits the world origin.
 * Dragging rotates the view with a damped tail-off, the mouse wheel moves
 * the eye closer or further, and world_to_screen provides the perspective
 * projection the renderer draws with.
 */

use nannou::prelude::*;

// Keep the pitch short of the poles so the view basis never degenerates
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
const NEAR_PLANE: f32 = 0.1;

pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov_y: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub damping: f32,
    pub is_dragging: bool,
    pub last_cursor_pos: Vec2,
    yaw_velocity: f32,
    pitch_velocity: f32,
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.6,
            pitch: 0.35,
            distance: 14.0,
            fov_y: 75.0_f32.to_radians(),
            min_distance: 2.0,
            max_distance: 60.0,
            rotate_speed: 0.5,
            damping: 0.1,
            is_dragging: false,
            last_cursor_pos: Vec2::ZERO,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
        }
    }

    // World-space eye position derived from the orbit angles
    pub fn eye(&self) -> Vec3 {
        let offset = vec3(
            self.distance * self.pitch.cos() * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            self.distance * self.pitch.cos() * self.yaw.cos(),
        );
        self.target + offset
    }

    // Orthonormal view basis looking from the eye toward the target
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.eye()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        (right, up, forward)
    }

    // Project a world point to screen coordinates centred on the window.
    // Returns None for points at or behind the near plane.
    pub fn world_to_screen(&self, point: Vec3, window_rect: Rect) -> Option<Vec2> {
        let (right, up, forward) = self.basis();
        let rel = point - self.eye();

        let depth = rel.dot(forward);
        if depth <= NEAR_PLANE {
            return None;
        }

        let focal = window_rect.h() / (2.0 * (self.fov_y / 2.0).tan());
        Some(vec2(
            rel.dot(right) / depth * focal,
            rel.dot(up) / depth * focal,
        ))
    }

    // Distance of a world point along the view direction, for depth sorting
    pub fn view_depth(&self, point: Vec3) -> f32 {
        let (_, _, forward) = self.basis();
        (point - self.eye()).dot(forward)
    }

    // Start dragging the camera
    pub fn start_drag(&mut self, position: Vec2) {
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Convert cursor motion into orbit rotation while dragging
    pub fn drag(&mut self, position: Vec2) {
        if self.is_dragging {
            let delta = position - self.last_cursor_pos;

            if delta.length_squared() > 0.0 {
                self.yaw_velocity = -delta.x * self.rotate_speed * 0.01;
                self.pitch_velocity = delta.y * self.rotate_speed * 0.01;
                self.apply_rotation();
                self.last_cursor_pos = position;
            }
        }
    }

    // End dragging
    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    // Handle mouse wheel events for zooming
    pub fn zoom(&mut self, scroll_delta: Vec2) {
        let factor = 1.0 - scroll_delta.y * 0.1;
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    // Carry leftover angular velocity after the cursor stops, decaying a
    // little each frame like a damped orbit control
    pub fn update(&mut self) {
        if !self.is_dragging {
            self.apply_rotation();
        }
        self.yaw_velocity *= 1.0 - self.damping;
        self.pitch_velocity *= 1.0 - self.damping;
    }

    fn apply_rotation(&mut self) {
        self.yaw += self.yaw_velocity;
        self.pitch = (self.pitch + self.pitch_velocity).clamp(-MAX_PITCH, MAX_PITCH);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
