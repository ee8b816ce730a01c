/*
 * Flock Module
 *
 * This module defines the Flock struct that owns the whole population.
 * It spawns boids into a random cloud, advances the simulation one tick at
 * a time, and mirrors the result into each boid's pose for the renderer.
 */

use nannou::prelude::*;
use rand::Rng;
use tracing::info;

use crate::boid::{Boid, RULES};
use crate::config::BoidConfig;

pub struct Flock {
    pub boids: Vec<Boid>,
    config: BoidConfig,
}

impl Flock {
    pub fn new(config: BoidConfig) -> Self {
        debug_assert!(config.is_finite(), "flock configuration must be finite");
        Self {
            boids: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &BoidConfig {
        &self.config
    }

    // Swap in a new parameter set; takes effect on the next update
    pub fn set_config(&mut self, config: BoidConfig) {
        debug_assert!(config.is_finite(), "flock configuration must be finite");
        self.config = config;
    }

    // (Re)populate the flock with `count` boids at random positions and with
    // random initial headings. Any previous population is discarded.
    pub fn create(&mut self, count: usize) {
        let mut rng = rand::thread_rng();

        self.boids.clear();
        self.boids.reserve(count);

        for _ in 0..count {
            let position = random_point(&mut rng, self.config.spawn_scale);
            let velocity = random_point(&mut rng, self.config.spawn_scale);
            self.boids.push(Boid::new(position, velocity));
        }

        info!("created {} boids", self.boids.len());
    }

    // Advance the simulation by one tick. Boids update in place and in
    // order, so a boid later in the list sees the already-moved state of
    // earlier boids within the same tick.
    pub fn update(&mut self) {
        for index in 0..self.boids.len() {
            for rule in RULES {
                rule.apply(index, &mut self.boids, &self.config);
            }

            let boid = &mut self.boids[index];
            boid.position += boid.velocity;
        }
    }

    // Mirror simulation state into every boid's pose. Pure side effect on
    // the visual state; positions and velocities are untouched.
    pub fn render(&mut self) {
        for boid in &mut self.boids {
            boid.sync_pose();
        }
    }
}

// A point with each coordinate uniform in [-0.5, 0.5), scaled
pub fn random_point(rng: &mut impl Rng, scale: f32) -> Vec3 {
    vec3(
        rng.gen_range(-0.5..0.5),
        rng.gen_range(-0.5..0.5),
        rng.gen_range(-0.5..0.5),
    ) * scale
}
