//! CPU rasterizer implementing `Surface`
//!
//! Used by tests and the native binary. Coverage is binary (no antialiasing):
//! a pixel is painted when its center lies inside the shape. Strokes are at
//! least one pixel wide so a thin ring never falls between pixel centers.

use glam::DVec2;

use super::color::Rgb;
use super::surface::Surface;
use crate::canvas_angle;
use crate::error::GameError;
use crate::sim::ArcSegment;

/// Minimum half-width of a stroke (pixels)
const MIN_HALF_STROKE: f64 = 0.5;

/// RGBA pixel buffer, row-major, origin top-left
#[derive(Debug, Clone)]
pub struct SoftwareSurface {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl SoftwareSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; (width as usize) * (height as usize)],
        }
    }

    /// Number of pixels with any non-zero channel
    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| p.iter().any(|&c| c != 0)).count()
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Paint every pixel in the bounding box whose center passes `inside`
    fn paint_where(
        &mut self,
        min: DVec2,
        max: DVec2,
        color: [u8; 4],
        inside: impl Fn(DVec2) -> bool,
    ) {
        let x0 = (min.x.floor() as i64).max(0);
        let y0 = (min.y.floor() as i64).max(0);
        let x1 = (max.x.ceil() as i64).min(self.width as i64 - 1);
        let y1 = (max.y.ceil() as i64).min(self.height as i64 - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
                if inside(center) {
                    if let Some(i) = self.index(x, y) {
                        self.pixels[i] = color;
                    }
                }
            }
        }
    }
}

impl Surface for SoftwareSurface {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn clear(&mut self) -> Result<(), GameError> {
        self.pixels.fill([0; 4]);
        Ok(())
    }

    fn stroke_arc(&mut self, center: DVec2, arc: &ArcSegment) -> Result<(), GameError> {
        let half = (arc.thickness / 2.0).max(MIN_HALF_STROKE);
        let reach = DVec2::splat(arc.radius + half);

        self.paint_where(center - reach, center + reach, arc.color.to_rgba(), |p| {
            let d = p.distance(center);
            (d - arc.radius).abs() <= half && arc.contains_angle(canvas_angle(center, p))
        });
        Ok(())
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb) -> Result<(), GameError> {
        let reach = DVec2::splat(radius);
        self.paint_where(center - reach, center + reach, color.to_rgba(), |p| {
            p.distance(center) <= radius
        });
        Ok(())
    }

    fn pixel(&self, x: f64, y: f64) -> Result<[u8; 4], GameError> {
        Ok(self
            .index(x.floor() as i64, y.floor() as i64)
            .map(|i| self.pixels[i])
            .unwrap_or([0; 4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn test_full_ring_covers_top() {
        let mut surface = SoftwareSurface::new(200, 200);
        let center = DVec2::new(100.0, 100.0);
        let ring = ArcSegment::new(50.0, 1.0, 0.0, TAU, RED);
        surface.stroke_arc(center, &ring).unwrap();

        assert_eq!(surface.pixel(100.0, 50.0).unwrap(), [255, 0, 0, 255]);
        // Center stays empty
        assert_eq!(surface.pixel(100.0, 100.0).unwrap(), [0; 4]);
    }

    #[test]
    fn test_arc_only_covers_its_sweep() {
        let mut surface = SoftwareSurface::new(200, 200);
        let center = DVec2::new(100.0, 100.0);
        // Lower half only (0 → π, clockwise on screen means through +y)
        let arc = ArcSegment::new(50.0, 3.0, 0.0, PI, RED);
        surface.stroke_arc(center, &arc).unwrap();

        assert_ne!(surface.pixel(100.0, 150.0).unwrap(), [0; 4]);
        assert_eq!(surface.pixel(100.0, 50.0).unwrap(), [0; 4]);
    }

    #[test]
    fn test_arc_with_negative_angles() {
        let mut surface = SoftwareSurface::new(200, 200);
        let center = DVec2::new(100.0, 100.0);
        // Around the top: -3π/4 → -π/4
        let arc = ArcSegment::new(50.0, 3.0, -3.0 * PI / 4.0, -PI / 4.0, RED);
        surface.stroke_arc(center, &arc).unwrap();

        assert_ne!(surface.pixel(100.0, 50.0).unwrap(), [0; 4]);
        assert_eq!(surface.pixel(100.0, 150.0).unwrap(), [0; 4]);
        // Sanity: top is -π/2 in canvas space
        assert!(arc.contains_angle(-FRAC_PI_2));
    }

    #[test]
    fn test_fill_circle_and_clear() {
        let mut surface = SoftwareSurface::new(50, 50);
        surface.fill_circle(DVec2::new(25.0, 25.0), 5.0, RED).unwrap();
        assert!(surface.painted_pixels() > 60);
        assert_eq!(surface.pixel(25.0, 25.0).unwrap(), [255, 0, 0, 255]);

        surface.clear().unwrap();
        assert_eq!(surface.painted_pixels(), 0);
    }

    #[test]
    fn test_out_of_bounds_reads_transparent() {
        let surface = SoftwareSurface::new(10, 10);
        assert_eq!(surface.pixel(-1.0, 3.0).unwrap(), [0; 4]);
        assert_eq!(surface.pixel(3.0, 10.0).unwrap(), [0; 4]);
    }
}
