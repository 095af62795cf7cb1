//! The ball resting on top of the ring
//!
//! Vertical motion only: a jump launches it upward, gravity brings it back
//! to its resting height on the ring.

use glam::DVec2;

use crate::GameConfig;
use crate::error::GameError;
use crate::renderer::{Rgb, Surface};

#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: DVec2,
    pub radius: f64,
    /// Vertical speed (pixels/frame, negative is up)
    pub vel_y: f64,
    /// Height the ball lands back on
    rest_y: f64,
    jump_speed: f64,
    gravity: f64,
    color: Rgb,
}

impl Ball {
    /// A ball resting at `pos`
    pub fn new(pos: DVec2, radius: f64, jump_speed: f64, gravity: f64, color: Rgb) -> Self {
        Self {
            pos,
            radius,
            vel_y: 0.0,
            rest_y: pos.y,
            jump_speed,
            gravity,
            color,
        }
    }

    /// A ball resting on top of a ring
    pub fn on_ring(config: &GameConfig, ring_center: DVec2, ring_radius: f64) -> Self {
        let pos = DVec2::new(
            ring_center.x,
            ring_center.y - ring_radius - config.ball_radius,
        );
        Self::new(
            pos,
            config.ball_radius,
            config.jump_speed,
            config.gravity,
            config.ball_rgb(),
        )
    }

    pub fn x_pos(&self) -> f64 {
        self.pos.x
    }

    pub fn y_pos(&self) -> f64 {
        self.pos.y
    }

    pub fn is_resting(&self) -> bool {
        self.vel_y == 0.0 && self.pos.y >= self.rest_y
    }

    /// Draw at the current position, then advance one frame
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), GameError> {
        surface.fill_circle(self.pos, self.radius, self.color)?;
        self.step();
        Ok(())
    }

    /// One frame of vertical physics
    pub fn step(&mut self) {
        if self.is_resting() {
            return;
        }
        self.vel_y += self.gravity;
        self.pos.y += self.vel_y;
        if self.pos.y >= self.rest_y {
            self.pos.y = self.rest_y;
            self.vel_y = 0.0;
        }
    }

    /// React to the jump key. Ignored while airborne.
    pub fn ball_movement_handler(&mut self) {
        if self.is_resting() {
            self.vel_y = -self.jump_speed;
        }
    }

    /// Frames between takeoff and landing. `None` when the ball would never
    /// come back down.
    pub fn airtime_frames(&self) -> Option<u32> {
        if !(self.gravity > 0.0) || !self.jump_speed.is_finite() {
            return None;
        }
        let mut ball = self.clone();
        ball.pos.y = ball.rest_y;
        ball.vel_y = -ball.jump_speed;
        let mut frames = 0;
        while !ball.is_resting() {
            ball.step();
            frames += 1;
        }
        Some(frames)
    }
}
