/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and other debug information to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Simulation update time
 * - Number of boids actually drawn this frame
 */

use std::sync::Mutex;
use std::time::Duration;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub update_time: Duration,
    // Written from the render pass, which only sees a shared model
    pub visible_boids: Mutex<usize>,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            update_time: Duration::ZERO,
            visible_boids: Mutex::new(0),
        }
    }
}
