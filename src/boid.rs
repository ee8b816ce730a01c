/*
 * Boid Module
 *
 * This module defines the Boid struct and the rule pipeline that drives it.
 * Each boid follows five rules, applied in a fixed order:
 * 1. Stay in bounds: Steer back toward the world cube near its walls
 * 2. Alignment: Match the average heading of nearby boids
 * 3. Cohesion: Move toward the average position of nearby boids
 * 4. Separation: Push away from boids that get too close
 * 5. Speed limit: Cap the velocity magnitude
 */

use nannou::prelude::*;

use crate::config::BoidConfig;

// The pipeline applied to every boid each tick. Order matters: every rule
// reads and writes the same velocity vector, so a later rule sees what the
// earlier rules of the same tick already contributed.
pub const RULES: [Rule; 5] = [
    Rule::StayInBounds,
    Rule::Alignment,
    Rule::Cohesion,
    Rule::Separation,
    Rule::SpeedLimit,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    StayInBounds,
    Alignment,
    Cohesion,
    Separation,
    SpeedLimit,
}

// Position and orientation mirrored to a boid's drawable representation.
// This is all the renderer ever reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Boid {
    pub position: Vec3,
    pub velocity: Vec3,
    pub pose: Pose,
}

impl Boid {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            pose: Pose {
                position,
                orientation: Quat::IDENTITY,
            },
        }
    }

    // Whether the other boid sits strictly inside the given radius
    pub fn is_near(&self, other: &Boid, threshold: f32) -> bool {
        self.position.distance(other.position) < threshold
    }

    // Refresh the pose from current simulation state, facing the direction
    // of travel. A boid that is not moving keeps its previous orientation.
    pub fn sync_pose(&mut self) {
        self.pose.position = self.position;
        if let Some(orientation) = look_rotation(self.velocity, Vec3::Y) {
            self.pose.orientation = orientation;
        }
    }
}

impl Rule {
    // Apply this rule to the boid at `index`. The other boids are read at
    // their current state, which within a tick means boids earlier in the
    // iteration have already moved.
    pub fn apply(self, index: usize, boids: &mut [Boid], config: &BoidConfig) {
        match self {
            Rule::StayInBounds => stay_in_bounds(&mut boids[index], config),
            Rule::Alignment => alignment(index, boids, config),
            Rule::Cohesion => cohesion(index, boids, config),
            Rule::Separation => separation(index, boids, config),
            Rule::SpeedLimit => speed_limit(&mut boids[index], config),
        }
    }
}

// Steer toward the center of mass of boids within visual range
fn cohesion(index: usize, boids: &mut [Boid], config: &BoidConfig) {
    let mut neighbours = 0;
    let mut center = Vec3::ZERO;

    for (i, other) in boids.iter().enumerate() {
        if i != index && boids[index].is_near(other, config.visual_range) {
            neighbours += 1;
            center += other.position;
        }
    }

    if neighbours > 0 {
        center /= neighbours as f32;
        let boid = &mut boids[index];
        boid.velocity += (center - boid.position) * config.cohesion_factor;
    }
}

// Push away from every boid closer than the separation distance. Applied
// unconditionally; with no close neighbours the sum is zero.
fn separation(index: usize, boids: &mut [Boid], config: &BoidConfig) {
    let mut push = Vec3::ZERO;

    for (i, other) in boids.iter().enumerate() {
        if i != index && boids[index].is_near(other, config.separation_min_distance) {
            push += boids[index].position - other.position;
        }
    }

    boids[index].velocity += push * config.separation_factor;
}

// Drift toward the average heading of boids within visual range
fn alignment(index: usize, boids: &mut [Boid], config: &BoidConfig) {
    let mut neighbours = 0;
    let mut heading = Vec3::ZERO;

    for (i, other) in boids.iter().enumerate() {
        if i != index && boids[index].is_near(other, config.visual_range) {
            neighbours += 1;
            heading += other.velocity;
        }
    }

    if neighbours > 0 {
        heading /= neighbours as f32;
        boids[index].velocity += heading * config.alignment_factor;
    }
}

// Soft steering back into the world cube. Each axis is nudged independently
// by exactly the turn factor, so a boid may still overshoot the wall briefly.
fn stay_in_bounds(boid: &mut Boid, config: &BoidConfig) {
    let low = -config.world_scale + config.wall_margin;
    let high = config.world_scale - config.wall_margin;

    if boid.position.x < low {
        boid.velocity.x += config.wall_turn_factor;
    }
    if boid.position.x > high {
        boid.velocity.x -= config.wall_turn_factor;
    }
    if boid.position.y < low {
        boid.velocity.y += config.wall_turn_factor;
    }
    if boid.position.y > high {
        boid.velocity.y -= config.wall_turn_factor;
    }
    if boid.position.z < low {
        boid.velocity.z += config.wall_turn_factor;
    }
    if boid.position.z > high {
        boid.velocity.z -= config.wall_turn_factor;
    }
}

// Rescale the velocity to the speed limit when it exceeds it, keeping the
// direction unchanged
fn speed_limit(boid: &mut Boid, config: &BoidConfig) {
    let speed = boid.velocity.length();

    if speed > config.speed_limit {
        boid.velocity *= config.speed_limit / speed;
    }
}

// Build a rotation that points the model +Z axis along `direction`, keeping
// `up` as the vertical reference. Returns None for a zero-length direction,
// which has no defined facing.
pub fn look_rotation(direction: Vec3, up: Vec3) -> Option<Quat> {
    if direction.length_squared() < f32::EPSILON {
        return None;
    }

    let forward = direction.normalize();
    let mut right = up.cross(forward);
    if right.length_squared() < 1e-6 {
        // Direction is (anti)parallel to the reference axis
        right = Vec3::X.cross(forward);
    }
    let right = right.normalize();
    let up = forward.cross(right);

    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: Vec3, b: Vec3) -> Vec<Boid> {
        vec![Boid::new(a, Vec3::ZERO), Boid::new(b, Vec3::ZERO)]
    }

    #[test]
    fn is_near_uses_strict_inequality() {
        let boids = pair(Vec3::ZERO, vec3(0.5, 0.0, 0.0));
        assert!(!boids[0].is_near(&boids[1], 0.5));
        assert!(boids[0].is_near(&boids[1], 0.51));
    }

    #[test]
    fn cohesion_pulls_toward_neighbour_center() {
        let mut boids = pair(Vec3::ZERO, vec3(0.4, 0.0, 0.0));
        let config = BoidConfig::default();

        Rule::Cohesion.apply(0, &mut boids, &config);

        let expected = 0.4 * config.cohesion_factor;
        assert!((boids[0].velocity.x - expected).abs() < 1e-6);
        assert_eq!(boids[0].velocity.y, 0.0);
        assert_eq!(boids[0].velocity.z, 0.0);
    }

    #[test]
    fn cohesion_ignores_boids_outside_visual_range() {
        let mut boids = pair(Vec3::ZERO, vec3(2.0, 0.0, 0.0));
        let config = BoidConfig::default();

        Rule::Cohesion.apply(0, &mut boids, &config);

        assert_eq!(boids[0].velocity, Vec3::ZERO);
    }

    #[test]
    fn separation_pushes_away_from_close_neighbour() {
        let mut boids = pair(Vec3::ZERO, vec3(0.1, 0.0, 0.0));
        let config = BoidConfig::default();

        Rule::Separation.apply(0, &mut boids, &config);

        // The neighbour sits on +x, so the push must point toward -x
        assert!(boids[0].velocity.x < 0.0);

        let expected = -0.1 * config.separation_factor;
        assert!((boids[0].velocity.x - expected).abs() < 1e-6);
    }

    #[test]
    fn separation_is_a_noop_without_close_neighbours() {
        // Inside visual range but outside the separation distance
        let mut boids = pair(Vec3::ZERO, vec3(0.4, 0.0, 0.0));
        let config = BoidConfig::default();

        Rule::Separation.apply(0, &mut boids, &config);

        assert_eq!(boids[0].velocity, Vec3::ZERO);
    }

    #[test]
    fn alignment_averages_neighbour_headings() {
        let config = BoidConfig::default();
        let mut boids = vec![
            Boid::new(Vec3::ZERO, Vec3::ZERO),
            Boid::new(vec3(0.2, 0.0, 0.0), vec3(0.1, 0.0, 0.0)),
            Boid::new(vec3(0.0, 0.2, 0.0), vec3(0.3, 0.0, 0.0)),
        ];

        Rule::Alignment.apply(0, &mut boids, &config);

        let expected = 0.2 * config.alignment_factor;
        assert!((boids[0].velocity.x - expected).abs() < 1e-6);
    }

    #[test]
    fn alignment_without_neighbours_leaves_velocity_untouched() {
        let config = BoidConfig::default();
        let mut boids = vec![Boid::new(Vec3::ZERO, vec3(0.05, 0.0, 0.0))];

        Rule::Alignment.apply(0, &mut boids, &config);

        assert_eq!(boids[0].velocity, vec3(0.05, 0.0, 0.0));
    }

    #[test]
    fn speed_limit_rescales_but_keeps_direction() {
        let config = BoidConfig::default();
        let mut boids = vec![Boid::new(Vec3::ZERO, vec3(3.0, 4.0, 0.0))];

        Rule::SpeedLimit.apply(0, &mut boids, &config);

        let velocity = boids[0].velocity;
        assert!((velocity.length() - config.speed_limit).abs() < 1e-6);
        // Direction preserved: components keep their 3:4 ratio
        assert!((velocity.x / velocity.y - 0.75).abs() < 1e-5);
    }

    #[test]
    fn speed_limit_leaves_slow_boids_alone() {
        let config = BoidConfig::default();
        let mut boids = vec![Boid::new(Vec3::ZERO, vec3(0.01, 0.02, 0.0))];

        Rule::SpeedLimit.apply(0, &mut boids, &config);

        assert_eq!(boids[0].velocity, vec3(0.01, 0.02, 0.0));
    }

    #[test]
    fn stay_in_bounds_nudges_each_axis_by_the_turn_factor() {
        let config = BoidConfig::default();
        let near_walls = vec3(
            -config.world_scale + 0.01,
            config.world_scale - 0.01,
            0.0,
        );
        let mut boids = vec![Boid::new(near_walls, Vec3::ZERO)];

        Rule::StayInBounds.apply(0, &mut boids, &config);

        assert_eq!(boids[0].velocity.x, config.wall_turn_factor);
        assert_eq!(boids[0].velocity.y, -config.wall_turn_factor);
        assert_eq!(boids[0].velocity.z, 0.0);
    }

    #[test]
    fn stay_in_bounds_is_inert_inside_the_margin() {
        let config = BoidConfig::default();
        let mut boids = vec![Boid::new(vec3(1.0, -2.0, 3.0), vec3(0.1, 0.0, 0.0))];

        Rule::StayInBounds.apply(0, &mut boids, &config);

        assert_eq!(boids[0].velocity, vec3(0.1, 0.0, 0.0));
    }

    #[test]
    fn look_rotation_aligns_model_z_with_direction() {
        let rotation = look_rotation(vec3(1.0, 0.0, 0.0), Vec3::Y).unwrap();
        let facing = rotation * Vec3::Z;
        assert!(facing.distance(Vec3::X) < 1e-5);
    }

    #[test]
    fn look_rotation_handles_direction_parallel_to_up() {
        let rotation = look_rotation(vec3(0.0, 2.0, 0.0), Vec3::Y).unwrap();
        let facing = rotation * Vec3::Z;
        assert!(facing.distance(Vec3::Y) < 1e-5);
    }

    #[test]
    fn look_rotation_rejects_zero_direction() {
        assert!(look_rotation(Vec3::ZERO, Vec3::Y).is_none());
    }

    #[test]
    fn sync_pose_retains_orientation_when_stopped() {
        let mut boid = Boid::new(Vec3::ZERO, vec3(1.0, 0.0, 0.0));
        boid.sync_pose();
        let moving_orientation = boid.pose.orientation;

        boid.velocity = Vec3::ZERO;
        boid.position = vec3(0.5, 0.0, 0.0);
        boid.sync_pose();

        assert_eq!(boid.pose.orientation, moving_orientation);
        assert_eq!(boid.pose.position, vec3(0.5, 0.0, 0.0));
    }
}
