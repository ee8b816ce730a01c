/*
 * 3D Boid Flocking Simulation
 *
 * This application simulates the flocking behavior of birds (boids) inside a
 * bounded cubic world. Each boid follows five rules every tick:
 * 1. Stay in bounds: Steer back toward the world cube near its walls
 * 2. Alignment: Match the average heading of nearby boids
 * 3. Cohesion: Move toward the average position of nearby boids
 * 4. Separation: Push away from boids that get too close
 * 5. Speed limit: Cap the velocity magnitude
 *
 * The scene is drawn under an orbiting camera, with interactive sliders to
 * adjust parameters in real time and an optional debug overlay.
 */

use boids3d::app;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    nannou::app(app::model).update(app::update).run();
}
