/*
 * Application Module
 *
 * This module defines the main application model and logic for the boid
 * simulation. It creates the window, owns the flock and camera, and runs
 * one simulation tick per rendered frame.
 */

use std::time::Instant;

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::camera::OrbitCamera;
use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::input;
use crate::params::SimulationParams;
use crate::renderer;
use crate::ui;

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: OrbitCamera,
    pub mouse_position: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("3D Boid Flocking Simulation")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .mouse_wheel(input::mouse_wheel)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters and spawn the flock from them
    let params = SimulationParams::default();
    let mut flock = Flock::new(params.config());
    flock.create(params.num_boids);

    Model {
        flock,
        params,
        egui,
        debug_info: DebugInfo::default(),
        camera: OrbitCamera::new(),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check if boids need to be reset
    let (should_reset_boids, num_boids_changed, ui_changed) = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &model.camera,
        &model.debug_info,
    );

    // Push the changed parameter set into the flock
    if ui_changed {
        model.flock.set_config(model.params.config());
    }

    // Handle reset boids
    if should_reset_boids || num_boids_changed {
        model.flock.create(model.params.num_boids);
    }

    // One simulation tick per rendered frame
    if !model.params.pause_simulation {
        let started = Instant::now();
        model.flock.update();
        model.debug_info.update_time = started.elapsed();
    }

    // Sync poses even when paused so newly created boids get drawn
    model.flock.render();

    // Let leftover orbit momentum decay
    model.camera.update();
}
