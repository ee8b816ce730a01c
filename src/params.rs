/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the boid simulation. These parameters can be
 * modified through the UI. It also provides methods for parameter change
 * detection and for deriving the flock configuration from the current
 * slider values.
 */

use crate::config::BoidConfig;

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_boids: usize,
    pub world_scale: f32,
    pub visual_range: f32,
    pub separation_min_distance: f32,
    pub speed_limit: f32,
    pub cohesion_factor: f32,
    pub separation_factor: f32,
    pub alignment_factor: f32,
    pub wall_margin: f32,
    pub wall_turn_factor: f32,
    pub spawn_scale: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_boids: usize,
    world_scale: f32,
    visual_range: f32,
    separation_min_distance: f32,
    speed_limit: f32,
    cohesion_factor: f32,
    separation_factor: f32,
    alignment_factor: f32,
    wall_margin: f32,
    wall_turn_factor: f32,
    spawn_scale: f32,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        let config = BoidConfig::default();
        Self {
            num_boids: 20,
            world_scale: config.world_scale,
            visual_range: config.visual_range,
            separation_min_distance: config.separation_min_distance,
            speed_limit: config.speed_limit,
            cohesion_factor: config.cohesion_factor,
            separation_factor: config.separation_factor,
            alignment_factor: config.alignment_factor,
            wall_margin: config.wall_margin,
            wall_turn_factor: config.wall_turn_factor,
            spawn_scale: config.spawn_scale,
            show_debug: false,
            pause_simulation: false,
            // Initialize with no previous values
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // The flock configuration derived from the current slider values
    pub fn config(&self) -> BoidConfig {
        BoidConfig {
            world_scale: self.world_scale,
            visual_range: self.visual_range,
            separation_min_distance: self.separation_min_distance,
            speed_limit: self.speed_limit,
            cohesion_factor: self.cohesion_factor,
            separation_factor: self.separation_factor,
            alignment_factor: self.alignment_factor,
            wall_margin: self.wall_margin,
            wall_turn_factor: self.wall_turn_factor,
            spawn_scale: self.spawn_scale,
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_boids: self.num_boids,
            world_scale: self.world_scale,
            visual_range: self.visual_range,
            separation_min_distance: self.separation_min_distance,
            speed_limit: self.speed_limit,
            cohesion_factor: self.cohesion_factor,
            separation_factor: self.separation_factor,
            alignment_factor: self.alignment_factor,
            wall_margin: self.wall_margin,
            wall_turn_factor: self.wall_turn_factor,
            spawn_scale: self.spawn_scale,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check if any parameters have changed since the last snapshot.
    // Returns a tuple of (should_reset_boids, num_boids_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool, bool) {
        let mut num_boids_changed = false;
        let mut ui_changed = false;

        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            if self.num_boids != prev.num_boids {
                num_boids_changed = true;
                ui_changed = true;
            }

            if self.world_scale != prev.world_scale
                || self.visual_range != prev.visual_range
                || self.separation_min_distance != prev.separation_min_distance
                || self.speed_limit != prev.speed_limit
                || self.cohesion_factor != prev.cohesion_factor
                || self.separation_factor != prev.separation_factor
                || self.alignment_factor != prev.alignment_factor
                || self.wall_margin != prev.wall_margin
                || self.wall_turn_factor != prev.wall_turn_factor
                || self.spawn_scale != prev.spawn_scale
                || self.show_debug != prev.show_debug
                || self.pause_simulation != prev.pause_simulation
            {
                ui_changed = true;
            }
        }

        // The first element (should_reset_boids) is set by the UI when the
        // reset button is clicked
        (false, num_boids_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        1..=500
    }

    pub fn get_factor_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        0.05..=2.0
    }

    pub fn get_speed_limit_range() -> std::ops::RangeInclusive<f32> {
        0.01..=0.5
    }

    pub fn get_world_scale_range() -> std::ops::RangeInclusive<f32> {
        1.0..=20.0
    }

    pub fn get_wall_margin_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn get_spawn_scale_range() -> std::ops::RangeInclusive<f32> {
        0.5..=10.0
    }
}
