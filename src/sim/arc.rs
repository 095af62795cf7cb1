//! Arc segment geometry for the ring
//!
//! Angles follow the canvas convention (clockwise from +x, y down) and are
//! kept raw: a segment may start below zero or end past 2π.

use std::f64::consts::TAU;

use crate::normalize_angle;
use crate::renderer::Rgb;

/// A stroked arc of the ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    /// Centerline radius
    pub radius: f64,
    /// Stroke width
    pub thickness: f64,
    /// Start angle (radians)
    pub theta_start: f64,
    /// End angle (radians), swept clockwise from `theta_start`
    pub theta_end: f64,
    pub color: Rgb,
}

impl ArcSegment {
    pub fn new(radius: f64, thickness: f64, theta_start: f64, theta_end: f64, color: Rgb) -> Self {
        Self {
            radius,
            thickness,
            theta_start,
            theta_end,
            color,
        }
    }

    /// Swept angle, canvas rules: a difference of 2π or more is a full circle,
    /// anything else is wrapped into [0, 2π)
    pub fn angular_span(&self) -> f64 {
        let diff = self.theta_end - self.theta_start;
        if diff >= TAU {
            TAU
        } else {
            normalize_angle(diff)
        }
    }

    /// Check if an angle is within the swept extent
    pub fn contains_angle(&self, theta: f64) -> bool {
        let span = self.angular_span();
        if span >= TAU {
            return true;
        }
        normalize_angle(theta - self.theta_start) <= span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn arc(start: f64, end: f64) -> ArcSegment {
        ArcSegment::new(100.0, 1.0, start, end, Rgb::WHITE)
    }

    #[test]
    fn test_arc_contains_angle_no_wrap() {
        let a = arc(0.0, FRAC_PI_2);
        assert!(a.contains_angle(0.1));
        assert!(a.contains_angle(PI / 4.0));
        assert!(!a.contains_angle(PI));
        assert!(!a.contains_angle(-PI / 4.0));
    }

    #[test]
    fn test_arc_contains_angle_past_tau() {
        // 350° → 370° straddles zero
        let a = arc(350.0_f64.to_radians(), 370.0_f64.to_radians());
        assert!(a.contains_angle(0.0));
        assert!(a.contains_angle(TAU - 0.01));
        assert!(!a.contains_angle(PI));
    }

    #[test]
    fn test_angular_span() {
        assert!((arc(0.0, FRAC_PI_2).angular_span() - FRAC_PI_2).abs() < 1e-12);
        assert!((arc(-1.0, 0.5).angular_span() - 1.5).abs() < 1e-12);
        assert_eq!(arc(0.0, TAU).angular_span(), TAU);
        assert!(arc(0.0, TAU + 0.5).contains_angle(2.0));
    }
}
