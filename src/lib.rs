//! Swarm Range - two small real-time 2D simulations
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//! - `raster`: CPU framebuffer drawing
//! - `settings`: User-tunable knobs loaded from disk
//!
//! The binaries (`wander`, `range`) own the window, input, and render loop;
//! everything gameplay-relevant lives in `sim` and runs on a fixed timestep.

pub mod raster;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Simulation constants shared by both binaries
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame rate cap for the window loop
    pub const TARGET_FPS: usize = 60;

    /// Playfield dimensions in pixels
    pub const SCREEN_WIDTH: usize = 800;
    pub const SCREEN_HEIGHT: usize = 600;

    /// Wandering agent defaults
    pub const AGENT_RADIUS: f32 = 10.0;
    pub const AGENT_MIN_SPEED: f32 = 60.0;
    pub const AGENT_MAX_SPEED: f32 = 180.0;
    /// Ticks between random heading changes
    pub const HEADING_RETIME_MIN: u32 = 40;
    pub const HEADING_RETIME_MAX: u32 = 160;
    /// Ticks between random speed changes
    pub const SPEED_RETIME_MIN: u32 = 60;
    pub const SPEED_RETIME_MAX: u32 = 240;
    /// Spawn attempts before the overlap constraint is relaxed
    pub const MAX_SPAWN_ATTEMPTS: u32 = 1000;

    /// Target-range player
    pub const PLAYER_RADIUS: f32 = 10.0;
    pub const PLAYER_SPEED: f32 = 240.0;
    /// Aim rotation rate (radians per second)
    pub const TURN_RATE: f32 = 6.0;
    /// Length of the drawn gun barrel past the player edge
    pub const GUN_LENGTH: f32 = 10.0;

    /// Shots
    pub const SHOT_SPEED: f32 = 600.0;
    pub const SHOT_LENGTH: f32 = 10.0;

    /// Range entities
    pub const ENEMY_RADIUS: f32 = 10.0;
    pub const ENEMY_MIN_SPEED: f32 = 60.0;
    pub const ENEMY_MAX_SPEED: f32 = 180.0;
    pub const TARGET_RADIUS: f32 = 10.0;
    /// Margin of the enemy/target spawn band from the screen edges
    pub const SPAWN_MARGIN: f32 = 50.0;
    /// Extra bottom margin keeping spawns away from the player start
    pub const SPAWN_BOTTOM_MARGIN: f32 = 200.0;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

/// Wall-clock seed for runs without a fixed seed in settings
pub fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
