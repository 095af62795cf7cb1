//! One game session: ball, ring, failure detection and score
//!
//! Failure is read back from rendered pixels: if the ball touches the ring
//! while the pixel at the ring's top is fully transparent, the ball is over a
//! gap and falls through.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::collision::ball_ring_collision;
use super::platform::RotatingPlatform;
use crate::GameConfig;
use crate::consts::*;
use crate::error::GameError;
use crate::renderer::{ScoreDisplay, Surface};

pub struct Game<S: Surface, D: ScoreDisplay> {
    surface: S,
    display: D,
    ball: Ball,
    platform: RotatingPlatform,
    /// Fixed at construction; resizing is not supported
    canvas_center: DVec2,
    seed: u64,
    /// Set once the ball falls through; freezes the game until recovery
    user_failed: bool,
    /// Last text written to `display`
    most_recent_msg: String,
}

impl<S: Surface, D: ScoreDisplay> Game<S, D> {
    /// Build a session on `surface`. `seed` picks the segment colors.
    pub fn new(surface: S, display: D, config: &GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;

        let canvas_center = DVec2::new(surface.width() / 2.0, surface.height() / 2.0);
        let platform_center = canvas_center + DVec2::new(0.0, config.platform_offset_y);

        let mut rng = Pcg32::seed_from_u64(seed);
        let platform = RotatingPlatform::from_config(config, platform_center, &mut rng);
        let ball = Ball::on_ring(config, platform.center(), platform.radius());

        Ok(Self {
            surface,
            display,
            ball,
            platform,
            canvas_center,
            seed,
            user_failed: false,
            most_recent_msg: String::new(),
        })
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn platform(&self) -> &RotatingPlatform {
        &self.platform
    }

    /// Mutable platform access, e.g. for rotation subscriptions
    pub fn platform_mut(&mut self) -> &mut RotatingPlatform {
        &mut self.platform
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn canvas_center(&self) -> DVec2 {
        self.canvas_center
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn user_failed(&self) -> bool {
        self.user_failed
    }

    pub fn most_recent_msg(&self) -> &str {
        &self.most_recent_msg
    }

    pub fn ball_is_colliding(&self) -> bool {
        ball_ring_collision(
            self.ball.pos,
            self.ball.radius,
            self.platform.center(),
            self.platform.radius(),
        )
    }

    /// Mark the user as failed if the ball sits on an undrawn pixel
    pub fn update_user_status(&mut self) -> Result<(), GameError> {
        if self.ball_is_colliding() && !self.user_failed {
            let top = self.platform.top();
            let rgba = self.surface.pixel(top.x, top.y)?;

            if rgba.iter().all(|&c| c == 0) {
                self.user_failed = true;
                log::info!(
                    "Fell through after {} rotations",
                    self.platform.number_of_rotations()
                );
            }
        }
        Ok(())
    }

    /// Show the rotation count (or the failed marker) while touching the ring
    pub fn handle_score(&mut self) {
        if !self.ball_is_colliding() {
            return;
        }

        let msg = if self.user_failed {
            FAILED_MARKER.to_string()
        } else {
            self.platform.number_of_rotations().to_string()
        };

        // Display writes can be slow (DOM), only write on change
        if self.most_recent_msg != msg {
            self.display.set_text(&msg);
            self.most_recent_msg = msg;
        }
    }

    /// One frame: draw, advance, detect failure, update score
    pub fn draw_game(&mut self) -> Result<(), GameError> {
        if self.user_failed {
            return Ok(());
        }

        self.surface.clear()?;
        self.platform.render(&mut self.surface)?;
        self.ball.render(&mut self.surface)?;
        self.update_user_status()?;
        self.handle_score();
        Ok(())
    }

    /// Jump, or recover after a fall. Returns whether `key` was used.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key != JUMP_KEY {
            return false;
        }

        if self.user_failed {
            self.platform.reset();
            self.user_failed = false;
            log::info!("Recovered, starting over");
        } else {
            self.ball.ball_movement_handler();
        }
        true
    }
}
