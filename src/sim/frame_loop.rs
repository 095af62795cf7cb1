//! Explicit frame driver
//!
//! The host (animation frames in the browser, a plain loop natively) calls
//! `tick` once per frame and stops scheduling once it returns `false`.

use super::game::Game;
use crate::error::GameError;
use crate::renderer::{ScoreDisplay, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Drawing every frame
    Running,
    /// Frames keep coming but nothing is drawn; input is ignored
    Paused,
    /// No further frames should be scheduled
    Stopped,
}

pub struct FrameLoop<S: Surface, D: ScoreDisplay> {
    game: Game<S, D>,
    state: LoopState,
    /// Frames actually drawn
    frames: u64,
}

impl<S: Surface, D: ScoreDisplay> FrameLoop<S, D> {
    pub fn new(game: Game<S, D>) -> Self {
        Self {
            game,
            state: LoopState::Running,
            frames: 0,
        }
    }

    pub fn game(&self) -> &Game<S, D> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<S, D> {
        &mut self.game
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame. Returns whether another frame should be scheduled.
    pub fn tick(&mut self) -> Result<bool, GameError> {
        match self.state {
            LoopState::Stopped => Ok(false),
            LoopState::Paused => Ok(true),
            LoopState::Running => {
                self.frames += 1;
                self.game.draw_game()?;
                Ok(true)
            }
        }
    }

    /// Forward a key press unless paused or stopped
    pub fn handle_key(&mut self, key: &str) -> bool {
        match self.state {
            LoopState::Running => self.game.handle_key(key),
            LoopState::Paused | LoopState::Stopped => false,
        }
    }

    pub fn pause(&mut self) {
        if self.state == LoopState::Running {
            self.state = LoopState::Paused;
            log::info!("Paused at frame {}", self.frames);
        }
    }

    pub fn resume(&mut self) {
        if self.state == LoopState::Paused {
            self.state = LoopState::Running;
            log::info!("Resumed");
        }
    }

    /// Stop for good; `tick` returns `false` from now on
    pub fn stop(&mut self) {
        if self.state != LoopState::Stopped {
            self.state = LoopState::Stopped;
            log::info!("Stopped after {} frames", self.frames);
        }
    }
}
