/*
 * 3D Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the boid simulation application.
 * The simulation core (config, boid, flock) only touches vector math; the
 * remaining modules wrap it in a nannou window with an orbit camera and an
 * egui parameter panel.
 */

// Re-export key components for easier access
pub use boid::{Boid, Pose, Rule};
pub use camera::OrbitCamera;
pub use config::BoidConfig;
pub use flock::Flock;
pub use params::SimulationParams;
pub use debug::DebugInfo;
pub use app::Model;

// Define modules
pub mod boid;
pub mod camera;
pub mod config;
pub mod flock;
pub mod params;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;

// Constants
pub const BOID_LENGTH: f32 = 0.25;
pub const BOID_RADIUS: f32 = 0.08;
