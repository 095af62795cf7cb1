//! Ring Hop - hop over the gaps of a spinning ring
//!
//! Core modules:
//! - `sim`: Platform rotation, ball physics, collision and scoring
//! - `renderer`: Drawing surface abstraction and a software rasterizer
//! - `platform`: Browser bindings (Canvas 2D, DOM score display)
//! - `config`: Data-driven game setup

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::GameError;

/// Game configuration constants
pub mod consts {
    /// Rotation step per frame (~1°, truncated literal)
    pub const ONE_DEGREE_AS_RADIAN: f64 = 0.01745329;
    /// Rotation wraps to zero once it exceeds this value.
    /// Deliberately a truncated literal, not `TAU`.
    pub const WRAP_THRESHOLD: f64 = 6.283185;
    /// Angular width of the gap at the start of every segment (π/10)
    pub const SIZE_OF_HOLE: f64 = 0.3141592653589793;

    /// Vertical offset applied to the ball for collision so a resting ball still touches
    pub const COLLISION_OFFSET_Y: f64 = 1.0;

    /// Score text shown once the ball has fallen through
    pub const FAILED_MARKER: &str = ":(";
    /// `KeyboardEvent.key` value for jump/recover
    pub const JUMP_KEY: &str = " ";

    /// Canvas angle of the top of the ring (y axis points down)
    pub const TOP_ANGLE: f64 = -std::f64::consts::FRAC_PI_2;

    /// Platform defaults
    pub const PLATFORM_RADIUS: f64 = 100.0;
    pub const PLATFORM_OFFSET_Y: f64 = 70.0;
    pub const MAX_SECTIONS: u32 = 10;
    pub const LINE_WIDTH: f64 = 3.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 10.0;
    /// Initial upward speed of a jump (pixels/frame)
    pub const JUMP_SPEED: f64 = 6.0;
    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f64 = 0.35;
}

/// Normalized angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(std::f64::consts::TAU)
}

/// Canvas angle (clockwise from +x, y down) of `point` around `center`
#[inline]
pub fn canvas_angle(center: glam::DVec2, point: glam::DVec2) -> f64 {
    let d = point - center;
    d.y.atan2(d.x)
}
