//! Idle/demo mode: decides when to press jump
//!
//! The ring's rotation is fully deterministic, so the next gap at the top
//! can be predicted exactly from the platform state.

use super::ball::Ball;
use super::platform::RotatingPlatform;

/// Jump this many frames ahead of a gap (at most). Must leave the ball in
/// the air for the whole gap: lead + gap frames < airtime.
pub const LEAD_FRAMES: u32 = 8;

/// Whether to jump before the next frame
pub fn should_jump(platform: &RotatingPlatform, ball: &Ball, lead_frames: u32) -> bool {
    ball.is_resting() && (0..=lead_frames).any(|f| platform.gap_at_top_after(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use crate::consts::{JUMP_KEY, SIZE_OF_HOLE, ONE_DEGREE_AS_RADIAN};
    use crate::renderer::{RecordingDisplay, SoftwareSurface};
    use crate::sim::Game;

    #[test]
    fn test_lead_fits_in_airtime() {
        let config = GameConfig::default();
        let game = Game::new(
            SoftwareSurface::new(400, 400),
            RecordingDisplay::default(),
            &config,
            1,
        )
        .unwrap();
        let gap_frames = (SIZE_OF_HOLE / ONE_DEGREE_AS_RADIAN).ceil() as u32 + 1;
        assert!(LEAD_FRAMES + gap_frames < game.ball().airtime_frames().unwrap());
    }

    #[test]
    fn test_autopilot_survives_several_rotations() {
        let config = GameConfig {
            max_sections: 3,
            ..Default::default()
        };
        let mut game = Game::new(
            SoftwareSurface::new(400, 400),
            RecordingDisplay::default(),
            &config,
            99,
        )
        .unwrap();

        for _ in 0..(361 * 5 + 10) {
            if should_jump(game.platform(), game.ball(), LEAD_FRAMES) {
                game.handle_key(JUMP_KEY);
            }
            game.draw_game().unwrap();
            assert!(!game.user_failed());
        }

        assert_eq!(game.platform().number_of_rotations(), 5);
        let expected: Vec<String> = (0..=5).map(|n| n.to_string()).collect();
        assert_eq!(game.display().writes, expected);
    }

    #[test]
    fn test_no_jump_far_from_gap() {
        let config = GameConfig::default();
        let game = Game::new(
            SoftwareSurface::new(400, 400),
            RecordingDisplay::default(),
            &config,
            1,
        )
        .unwrap();
        // Fresh ring: the only gap reaches the top ~90 frames from now
        assert!(!should_jump(game.platform(), game.ball(), LEAD_FRAMES));
    }
}
