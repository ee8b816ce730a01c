/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting simulation parameters.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::camera::OrbitCamera;
use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether boids should be reset, whether the
// population size changed, and whether any parameter changed at all
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    camera: &OrbitCamera,
    debug_info: &DebugInfo,
) -> (bool, bool, bool) {
    let mut should_reset_boids = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range())
                        .text("Number of Boids"),
                );
                ui.add(
                    egui::Slider::new(&mut params.spawn_scale, SimulationParams::get_spawn_scale_range())
                        .text("Spawn Volume"),
                );

                if ui.button("Reset Boids").clicked() {
                    should_reset_boids = true;
                }
            });

            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.cohesion_factor, SimulationParams::get_factor_range())
                        .text("Cohesion Factor"),
                );
                ui.add(
                    egui::Slider::new(&mut params.separation_factor, SimulationParams::get_factor_range())
                        .text("Separation Factor"),
                );
                ui.add(
                    egui::Slider::new(&mut params.alignment_factor, SimulationParams::get_factor_range())
                        .text("Alignment Factor"),
                );
                ui.add(
                    egui::Slider::new(&mut params.visual_range, SimulationParams::get_radius_range())
                        .text("Visual Range"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.separation_min_distance,
                        SimulationParams::get_radius_range(),
                    )
                    .text("Separation Distance"),
                );
                ui.add(
                    egui::Slider::new(&mut params.speed_limit, SimulationParams::get_speed_limit_range())
                        .text("Speed Limit"),
                );
            });

            ui.collapsing("World Bounds", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.world_scale, SimulationParams::get_world_scale_range())
                        .text("World Scale"),
                );
                ui.add(
                    egui::Slider::new(&mut params.wall_margin, SimulationParams::get_wall_margin_range())
                        .text("Wall Margin"),
                );
                ui.add(
                    egui::Slider::new(&mut params.wall_turn_factor, SimulationParams::get_factor_range())
                        .text("Wall Turn Factor"),
                );
            });

            ui.collapsing("Camera", |ui| {
                ui.label("Orbit: Click and drag");
                ui.label("Zoom: Mouse wheel or trackpad pinch");
                ui.label(format!("Distance: {:.1}", camera.distance));
                ui.label(format!(
                    "Yaw / Pitch: {:.0}° / {:.0}°",
                    camera.yaw.to_degrees(),
                    camera.pitch.to_degrees()
                ));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Detect parameter changes
    let (_, num_boids_changed, ui_changed) = params.detect_changes();

    (should_reset_boids, num_boids_changed, ui_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    boid_count: usize,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 210.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Update time: {:.2} ms", debug_info.update_time.as_secs_f64() * 1000.0),
        format!("Total Boids: {}", boid_count),
        format!("Visible Boids: {}", *debug_info.visible_boids.lock().unwrap()),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
