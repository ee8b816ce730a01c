/*
 * Configuration Module
 *
 * This module defines the BoidConfig struct, the immutable set of tunables
 * the flock is constructed with. All behavior rules read from it; nothing
 * mutates it in place. Live parameter edits replace the whole value.
 */

// Tunables for the flocking rules and world bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidConfig {
    // Half-extent of the cubic world the boids steer back into
    pub world_scale: f32,
    // Neighbor radius for cohesion and alignment
    pub visual_range: f32,
    // Tighter radius that triggers repulsion
    pub separation_min_distance: f32,
    pub speed_limit: f32,
    pub cohesion_factor: f32,
    pub separation_factor: f32,
    pub alignment_factor: f32,
    // Distance from a wall at which the turn factor kicks in
    pub wall_margin: f32,
    pub wall_turn_factor: f32,
    // Half-extent scale of the spawn cube (positions and initial velocities)
    pub spawn_scale: f32,
}

impl Default for BoidConfig {
    fn default() -> Self {
        Self {
            world_scale: 5.0,
            visual_range: 0.5,
            separation_min_distance: 0.3,
            speed_limit: 0.1,
            cohesion_factor: 0.2,
            separation_factor: 0.5,
            alignment_factor: 0.2,
            wall_margin: 0.05,
            wall_turn_factor: 0.1,
            spawn_scale: 1.0,
        }
    }
}

impl BoidConfig {
    // Every tunable must be finite for the update rules to stay well behaved
    pub fn is_finite(&self) -> bool {
        [
            self.world_scale,
            self.visual_range,
            self.separation_min_distance,
            self.speed_limit,
            self.cohesion_factor,
            self.separation_factor,
            self.alignment_factor,
            self.wall_margin,
            self.wall_turn_factor,
            self.spawn_scale,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}
