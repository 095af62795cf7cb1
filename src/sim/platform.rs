//! The rotating segmented ring the ball sits on
//!
//! Rendering and simulation are fused: every `render` draws the current ring
//! and then advances rotation by one step. After each completed turn one more
//! segment (and so one more gap) appears, up to `max_sections`.

use glam::DVec2;
use rand::Rng;
use std::collections::BTreeMap;
use std::f64::consts::TAU;
use std::fmt;

use super::arc::ArcSegment;
use crate::consts::*;
use crate::{GameConfig, canvas_angle};
use crate::error::GameError;
use crate::renderer::{Rgb, Surface};

/// Callback fired once per completed rotation
pub type RotationHandler = Box<dyn FnMut()>;

/// Subscription handle returned by `subscribe_on_rotation`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerId(u32);

pub struct RotatingPlatform {
    center: DVec2,
    radius: f64,
    line_width: f64,

    max_sections: u32,
    number_of_sections: u32,
    /// Rotation offset, in [0, WRAP_THRESHOLD]
    current_radian: f64,
    number_of_rotations: u32,

    /// One color per possible segment, fixed for the platform's lifetime
    colors: Vec<Rgb>,

    /// Ids only grow, so map order is subscription order
    rotation_handlers: BTreeMap<HandlerId, RotationHandler>,
    last_handler_id: u32,
}

impl RotatingPlatform {
    /// Create a platform. `max_sections` is clamped to at least 1.
    pub fn new<R: Rng + ?Sized>(
        center: DVec2,
        radius: f64,
        max_sections: u32,
        line_width: f64,
        rng: &mut R,
    ) -> Self {
        let max_sections = max_sections.max(1);
        let colors = (0..max_sections).map(|_| Rgb::random(rng)).collect();

        Self {
            center,
            radius,
            line_width,
            max_sections,
            number_of_sections: 1,
            current_radian: 0.0,
            number_of_rotations: 0,
            colors,
            rotation_handlers: BTreeMap::new(),
            last_handler_id: 0,
        }
    }

    pub fn from_config<R: Rng + ?Sized>(config: &GameConfig, center: DVec2, rng: &mut R) -> Self {
        Self::new(
            center,
            config.platform_radius,
            config.max_sections,
            config.line_width,
            rng,
        )
    }

    pub fn x_pos(&self) -> f64 {
        self.center.x
    }

    pub fn y_pos(&self) -> f64 {
        self.center.y
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn max_sections(&self) -> u32 {
        self.max_sections
    }

    pub fn number_of_sections(&self) -> u32 {
        self.number_of_sections
    }

    pub fn current_radian(&self) -> f64 {
        self.current_radian
    }

    pub fn number_of_rotations(&self) -> u32 {
        self.number_of_rotations
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Point on the ring directly above its center
    pub fn top(&self) -> DVec2 {
        DVec2::new(self.center.x, self.center.y - self.radius)
    }

    /// Angle of the pixel a read-back at `top()` samples. Pixel centers sit
    /// half a pixel off the integer grid, so this is not exactly `TOP_ANGLE`.
    pub fn top_sample_angle(&self) -> f64 {
        let top = self.top();
        canvas_angle(self.center, top.floor() + DVec2::splat(0.5))
    }

    /// Segment count for a given number of completed rotations
    fn sections_for(&self, rotations: u32) -> u32 {
        rotations.saturating_add(1).min(self.max_sections)
    }

    /// Rotation after one more step: a hard reset to 0 once past the threshold
    fn step_radian(radian: f64) -> f64 {
        let combined = radian + ONE_DEGREE_AS_RADIAN;
        if combined > WRAP_THRESHOLD { 0.0 } else { combined }
    }

    /// Draw the ring, then advance rotation one step
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), GameError> {
        self.number_of_sections = self.sections_for(self.number_of_rotations);

        for arc in self.segments() {
            surface.stroke_arc(self.center, &arc)?;
        }

        self.handle_radian_calculation(false);
        self.handle_rotation(false);
        Ok(())
    }

    /// Arcs the next `render` will stroke
    pub fn segments(&self) -> Vec<ArcSegment> {
        self.arcs_at(
            self.current_radian,
            self.sections_for(self.number_of_rotations),
        )
    }

    fn arcs_at(&self, radian: f64, sections: u32) -> Vec<ArcSegment> {
        let size_of_line = TAU / sections as f64;

        (0..sections)
            .map(|i| {
                let start = i as f64 * size_of_line - radian + SIZE_OF_HOLE;
                let stop = (i + 1) as f64 * size_of_line - radian;
                ArcSegment::new(
                    self.radius,
                    self.line_width,
                    start,
                    stop,
                    self.colors[i as usize],
                )
            })
            .collect()
    }

    /// Whether canvas angle `theta` falls in a gap of the next drawn ring
    pub fn gap_at(&self, theta: f64) -> bool {
        !self.segments().iter().any(|arc| arc.contains_angle(theta))
    }

    /// Whether the pixel at the ring's top will be empty in the frame drawn
    /// `frames` renders from now (0 = the next render)
    pub fn gap_at_top_after(&self, frames: u32) -> bool {
        let mut radian = self.current_radian;
        let mut rotations = self.number_of_rotations;
        for _ in 0..frames {
            radian = Self::step_radian(radian);
            if radian == 0.0 {
                rotations = rotations.saturating_add(1);
            }
        }
        let theta = self.top_sample_angle();
        let arcs = self.arcs_at(radian, self.sections_for(rotations));
        !arcs.iter().any(|arc| arc.contains_angle(theta))
    }

    pub fn handle_radian_calculation(&mut self, reset: bool) {
        self.current_radian = if reset {
            0.0
        } else {
            Self::step_radian(self.current_radian)
        };
    }

    pub fn handle_rotation(&mut self, reset: bool) {
        if reset {
            self.number_of_rotations = 0;
        } else if self.current_radian == 0.0 {
            self.number_of_rotations = self.number_of_rotations.saturating_add(1);
            log::debug!("Rotation {} complete", self.number_of_rotations);
            for handler in self.rotation_handlers.values_mut() {
                handler();
            }
        }
    }

    /// Return rotation angle and count to zero. Colors and geometry stay.
    pub fn reset(&mut self) {
        self.handle_radian_calculation(true);
        self.handle_rotation(true);
    }

    pub fn subscribe_on_rotation(&mut self, handler: impl FnMut() + 'static) -> HandlerId {
        self.last_handler_id += 1;
        let id = HandlerId(self.last_handler_id);
        self.rotation_handlers.insert(id, Box::new(handler));
        id
    }

    /// Remove a handler; unknown ids are ignored
    pub fn unsubscribe_on_rotation(&mut self, id: HandlerId) {
        self.rotation_handlers.remove(&id);
    }
}

impl fmt::Debug for RotatingPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotatingPlatform")
            .field("center", &self.center)
            .field("radius", &self.radius)
            .field("max_sections", &self.max_sections)
            .field("number_of_sections", &self.number_of_sections)
            .field("current_radian", &self.current_radian)
            .field("number_of_rotations", &self.number_of_rotations)
            .field("handlers", &self.rotation_handlers.len())
            .finish()
    }
}
