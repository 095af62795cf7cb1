//! Drawing and display contracts the game renders through

use glam::DVec2;

use super::color::Rgb;
use crate::error::GameError;
use crate::sim::ArcSegment;

/// A 2D drawing target with pixel read-back.
///
/// Angles follow the canvas convention: radians clockwise from +x, y down.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Clear the whole surface to transparent black
    fn clear(&mut self) -> Result<(), GameError>;

    /// Stroke `arc` around `center`, clockwise from `theta_start` to `theta_end`
    fn stroke_arc(&mut self, center: DVec2, arc: &ArcSegment) -> Result<(), GameError>;

    /// Fill a solid disc
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb) -> Result<(), GameError>;

    /// RGBA of the pixel containing (x, y). Outside the surface reads as `[0; 4]`.
    fn pixel(&self, x: f64, y: f64) -> Result<[u8; 4], GameError>;
}

/// Text sink for the score
pub trait ScoreDisplay {
    fn set_text(&mut self, text: &str);
}

/// Score display that only logs (headless runs)
#[derive(Debug, Default)]
pub struct LogScoreDisplay;

impl ScoreDisplay for LogScoreDisplay {
    fn set_text(&mut self, text: &str) {
        log::info!("Score: {}", text);
    }
}

/// Score display that remembers every write
#[derive(Debug, Default, Clone)]
pub struct RecordingDisplay {
    pub writes: Vec<String>,
}

impl RecordingDisplay {
    /// Most recent text, if anything was written
    pub fn text(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl ScoreDisplay for RecordingDisplay {
    fn set_text(&mut self, text: &str) {
        self.writes.push(text.to_string());
    }
}
