//! Rendering module
//!
//! The game draws through the `Surface` trait: Canvas 2D in the browser,
//! `SoftwareSurface` everywhere else.

pub mod color;
pub mod software;
pub mod surface;

pub use color::Rgb;
pub use software::SoftwareSurface;
pub use surface::{LogScoreDisplay, RecordingDisplay, ScoreDisplay, Surface};
