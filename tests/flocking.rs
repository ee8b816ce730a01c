/*
 * Flocking Integration Tests
 *
 * End-to-end scenarios over the whole simulation loop: populations are
 * created, positions forced into known configurations, and the flock is
 * ticked through update/render cycles.
 */

use nannou::prelude::*;

use boids3d::{BoidConfig, Flock};

#[test]
fn speed_stays_limited_on_every_tick() {
    let config = BoidConfig::default();
    let mut flock = Flock::new(config);
    flock.create(20);

    for _ in 0..50 {
        flock.update();

        for boid in &flock.boids {
            assert!(boid.velocity.length() <= config.speed_limit + 1e-4);
        }
    }
}

#[test]
fn distant_boids_do_not_influence_each_other() {
    let mut flock = Flock::new(BoidConfig::default());
    flock.create(2);

    // Well inside the walls, far outside both perception radii
    flock.boids[0].position = vec3(-2.0, 0.0, 0.0);
    flock.boids[0].velocity = vec3(0.05, 0.01, 0.0);
    flock.boids[1].position = vec3(2.0, 0.0, 0.0);
    flock.boids[1].velocity = vec3(-0.02, 0.0, 0.03);

    flock.update();

    // No rule fired, so each velocity is untouched and each position moved
    // by exactly that velocity
    assert!(flock.boids[0].velocity.distance(vec3(0.05, 0.01, 0.0)) < 1e-6);
    assert!(flock.boids[1].velocity.distance(vec3(-0.02, 0.0, 0.03)) < 1e-6);
    assert!(flock.boids[0].position.distance(vec3(-1.95, 0.01, 0.0)) < 1e-6);
    assert!(flock.boids[1].position.distance(vec3(1.98, 0.0, 0.03)) < 1e-6);
}

#[test]
fn close_pair_repels_along_the_axis_between_them() {
    let config = BoidConfig::default();
    let mut flock = Flock::new(config);
    flock.create(2);

    // Closer than the separation distance, inside visual range
    flock.boids[0].position = vec3(0.0, 0.0, 0.0);
    flock.boids[0].velocity = Vec3::ZERO;
    flock.boids[1].position = vec3(0.1, 0.0, 0.0);
    flock.boids[1].velocity = Vec3::ZERO;

    flock.update();

    // Both ended up moving, away from each other along x, within the limit
    assert!(flock.boids[0].velocity.length() > 0.0);
    assert!(flock.boids[1].velocity.length() > 0.0);
    assert!(flock.boids[0].velocity.x < 0.0);
    assert!(flock.boids[1].velocity.x > 0.0);
    assert!(flock.boids[0].velocity.length() <= config.speed_limit + 1e-4);
    assert!(flock.boids[1].velocity.length() <= config.speed_limit + 1e-4);
}

#[test]
fn pair_in_visual_range_drifts_together() {
    let mut flock = Flock::new(BoidConfig::default());
    flock.create(2);

    // Inside visual range but beyond the separation distance
    flock.boids[0].position = vec3(0.0, 0.0, 0.0);
    flock.boids[0].velocity = Vec3::ZERO;
    flock.boids[1].position = vec3(0.4, 0.0, 0.0);
    flock.boids[1].velocity = Vec3::ZERO;

    flock.update();

    assert!(flock.boids[0].velocity.x > 0.0);
    assert!(flock.boids[1].velocity.x < 0.0);
}

#[test]
fn walls_keep_a_wandering_boid_contained() {
    let config = BoidConfig::default();
    let mut flock = Flock::new(config);
    flock.create(1);

    flock.boids[0].position = Vec3::ZERO;
    flock.boids[0].velocity = vec3(config.speed_limit, 0.0, 0.0);

    for _ in 0..100 {
        flock.update();

        let position = flock.boids[0].position;
        for value in [position.x, position.y, position.z] {
            assert!(value.abs() <= config.world_scale + 1e-3);
        }
    }
}

#[test]
fn create_twice_yields_exactly_the_requested_population() {
    let mut flock = Flock::new(BoidConfig::default());

    flock.create(2);
    assert_eq!(flock.boids.len(), 2);

    flock.create(2);
    assert_eq!(flock.boids.len(), 2);
}

#[test]
fn render_faces_boids_along_their_travel_direction() {
    let mut flock = Flock::new(BoidConfig::default());
    flock.create(1);

    flock.boids[0].velocity = vec3(0.1, 0.0, 0.0);
    flock.render();

    let facing = flock.boids[0].pose.orientation * Vec3::Z;
    assert!(facing.distance(Vec3::X) < 1e-5);

    // A stopped boid keeps the orientation it had while moving
    flock.boids[0].velocity = Vec3::ZERO;
    let kept = flock.boids[0].pose.orientation;
    flock.render();
    assert_eq!(flock.boids[0].pose.orientation, kept);
}
