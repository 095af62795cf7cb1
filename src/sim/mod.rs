//! Simulation module
//!
//! All gameplay logic lives here. Everything is frame-stepped and
//! deterministic for a given seed; drawing goes through `renderer::Surface`.

pub mod arc;
pub mod autopilot;
pub mod ball;
pub mod collision;
pub mod frame_loop;
pub mod game;
pub mod platform;

pub use arc::ArcSegment;
pub use autopilot::{LEAD_FRAMES, should_jump};
pub use ball::Ball;
pub use collision::ball_ring_collision;
pub use frame_loop::{FrameLoop, LoopState};
pub use game::Game;
pub use platform::{HandlerId, RotatingPlatform, RotationHandler};
