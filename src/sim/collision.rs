//! Ball vs. ring overlap
//!
//! The test is against the ring's nominal circle only. Whether the ball is
//! over a segment or a gap is decided separately from rendered pixels.

use glam::DVec2;

use crate::consts::COLLISION_OFFSET_Y;

/// Check whether a ball overlaps the ring circle.
///
/// The ball is nudged down by `COLLISION_OFFSET_Y` so that a ball resting
/// exactly on the ring (touching, not overlapping) still counts. Only the
/// test point moves, never the ball.
pub fn ball_ring_collision(
    ball_pos: DVec2,
    ball_radius: f64,
    ring_center: DVec2,
    ring_radius: f64,
) -> bool {
    let contact = ball_pos + DVec2::new(0.0, COLLISION_OFFSET_Y);
    contact.distance(ring_center) < ball_radius + ring_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_ring_collides() {
        // distance 69 < 10 + 100
        assert!(ball_ring_collision(
            DVec2::new(100.0, 100.0),
            10.0,
            DVec2::new(100.0, 169.0),
            100.0
        ));
    }

    #[test]
    fn test_resting_ball_collides_thanks_to_offset() {
        // Touching exactly: center distance == 110
        let ring = DVec2::new(200.0, 270.0);
        let resting = DVec2::new(200.0, 160.0);
        assert_eq!(resting.distance(ring), 110.0);
        assert!(ball_ring_collision(resting, 10.0, ring, 100.0));
    }

    #[test]
    fn test_airborne_ball_misses() {
        let ring = DVec2::new(200.0, 270.0);
        assert!(!ball_ring_collision(DVec2::new(200.0, 155.0), 10.0, ring, 100.0));
        // One pixel above rest: the offset only just brings it back to touching
        assert!(!ball_ring_collision(DVec2::new(200.0, 159.0), 10.0, ring, 100.0));
    }

    #[test]
    fn test_horizontal_offset_counts() {
        let ring = DVec2::ZERO;
        assert!(!ball_ring_collision(DVec2::new(111.0, -1.0), 10.0, ring, 100.0));
        assert!(ball_ring_collision(DVec2::new(109.0, -1.0), 10.0, ring, 100.0));
    }
}
