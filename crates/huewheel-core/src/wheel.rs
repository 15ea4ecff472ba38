//! Hue/saturation wheel geometry and rasterization.
//!
//! The wheel maps the angle around its center to hue and the distance from
//! the center to saturation. Brightness is always full.

use crate::color::{hsv_to_rgb, normalize_degrees, Rgb};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Brightness used for every color on the wheel.
pub const WHEEL_VALUE: f64 = 100.0;

/// Relative slack on the rim test, enough to absorb float error in
/// coordinates that were computed from a hue and saturation.
const RIM_TOLERANCE: f64 = 1e-12;

/// A surface the wheel can be painted onto.
pub trait DisplaySurface {
    /// Paint a single pixel. `x` and `y` are surface coordinates.
    fn paint_pixel(&mut self, x: u32, y: u32, rgb: Rgb);
}

/// Geometry of a wheel rendered into a square of `diameter` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelGeometry {
    diameter: u32,
}

impl WheelGeometry {
    pub fn new(diameter: u32) -> Self {
        Self { diameter }
    }

    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// Half the rendered width.
    pub fn radius(&self) -> f64 {
        f64::from(self.diameter) / 2.0
    }

    /// Center of the wheel in surface coordinates.
    pub fn center(&self) -> Point {
        let r = self.radius();
        Point::new(r, r)
    }

    /// Convert a surface point to an offset from the wheel center.
    pub fn to_local(&self, point: Point) -> Vec2 {
        point - self.center()
    }

    /// Check whether a wheel-local offset lies on the disc (rim included).
    pub fn contains(&self, local: Vec2) -> bool {
        self.within_rim(local.hypot())
    }

    // NaN and infinite distances are off the disc
    fn within_rim(&self, distance: f64) -> bool {
        let radius = self.radius();
        distance <= radius + radius * RIM_TOLERANCE
    }

    /// Hue (degrees) and saturation (percent) at a wheel-local offset.
    ///
    /// Returns `None` outside the disc.
    pub fn hue_saturation_at(&self, local: Vec2) -> Option<(f64, f64)> {
        let radius = self.radius();
        let distance = local.hypot();
        if !self.within_rim(distance) {
            return None;
        }

        let theta = local.y.atan2(local.x);
        let hue = normalize_degrees((theta + PI) / (2.0 * PI) * 360.0);
        let saturation = if radius > 0.0 {
            (distance / radius * 100.0).min(100.0)
        } else {
            0.0
        };
        Some((hue, saturation))
    }

    /// Surface point where the given hue and saturation are painted.
    pub fn position_for(&self, hue: f64, saturation: f64) -> Point {
        let theta = normalize_degrees(hue) / 360.0 * 2.0 * PI - PI;
        let distance = saturation.clamp(0.0, 100.0) / 100.0 * self.radius();
        let mut offset = Vec2::new(theta.cos() * distance, theta.sin() * distance);
        let length = offset.hypot();
        if length > distance {
            offset *= distance / length;
        }
        self.center() + offset
    }
}

/// Paint the wheel onto a surface. Pixels outside the disc are left untouched.
pub fn paint_wheel<S: DisplaySurface + ?Sized>(geometry: &WheelGeometry, surface: &mut S) {
    let radius = geometry.radius();
    let mut painted = 0usize;

    for py in 0..geometry.diameter() {
        for px in 0..geometry.diameter() {
            let local = Vec2::new(f64::from(px) - radius, f64::from(py) - radius);
            if let Some((hue, saturation)) = geometry.hue_saturation_at(local) {
                surface.paint_pixel(px, py, hsv_to_rgb(hue, saturation, WHEEL_VALUE));
                painted += 1;
            }
        }
    }

    log::debug!(
        "Painted color wheel: diameter={}, pixels={}",
        geometry.diameter(),
        painted
    );
}

/// Render a wheel of the given diameter into a fresh RGBA buffer.
pub fn render(diameter: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(diameter, diameter);
    paint_wheel(&WheelGeometry::new(diameter), &mut buffer);
    buffer
}

/// An RGBA8 pixel buffer. Unpainted pixels are fully transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA value at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.index(x, y)?;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

impl DisplaySurface for PixelBuffer {
    fn paint_pixel(&mut self, x: u32, y: u32, rgb: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&[rgb.r, rgb.g, rgb.b, 255]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }

    #[test]
    fn test_geometry() {
        let geometry = WheelGeometry::new(300);
        assert_eq!(geometry.radius(), 150.0);
        assert_eq!(geometry.center(), Point::new(150.0, 150.0));
        assert_eq!(geometry.to_local(Point::new(160.0, 140.0)), Vec2::new(10.0, -10.0));
    }

    #[test]
    fn test_disc_boundary() {
        let geometry = WheelGeometry::new(100);
        assert!(geometry.contains(Vec2::new(50.0, 0.0)));
        assert!(geometry.contains(Vec2::new(0.0, -50.0)));
        assert!(!geometry.contains(Vec2::new(50.0 + 1e-9, 0.0)));
        assert!(geometry.hue_saturation_at(Vec2::new(0.0, 50.0 + 1e-9)).is_none());

        let (_, saturation) = geometry.hue_saturation_at(Vec2::new(-50.0, 0.0)).unwrap();
        assert_eq!(saturation, 100.0);
    }

    #[test]
    fn test_non_finite_offsets_are_off_disc() {
        let geometry = WheelGeometry::new(100);
        for local in [
            Vec2::new(f64::NAN, 0.0),
            Vec2::new(0.0, f64::NAN),
            Vec2::new(f64::INFINITY, 0.0),
            Vec2::new(0.0, f64::NEG_INFINITY),
        ] {
            assert!(!geometry.contains(local));
            assert_eq!(geometry.hue_saturation_at(local), None);
        }
    }

    #[test]
    fn test_polar_mapping() {
        let geometry = WheelGeometry::new(100);

        // Left of center is hue 0, right is 180, up is 90, down is 270
        let (hue, _) = geometry.hue_saturation_at(Vec2::new(-25.0, 0.0)).unwrap();
        assert_eq!(hue, 0.0);
        let (hue, saturation) = geometry.hue_saturation_at(Vec2::new(25.0, 0.0)).unwrap();
        assert!((hue - 180.0).abs() < 1e-9);
        assert!((saturation - 50.0).abs() < 1e-9);
        let (hue, _) = geometry.hue_saturation_at(Vec2::new(0.0, -25.0)).unwrap();
        assert!((hue - 90.0).abs() < 1e-9);
        let (hue, _) = geometry.hue_saturation_at(Vec2::new(0.0, 25.0)).unwrap();
        assert!((hue - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_center_is_achromatic() {
        let geometry = WheelGeometry::new(100);
        let (hue, saturation) = geometry.hue_saturation_at(Vec2::ZERO).unwrap();
        assert!((0.0..360.0).contains(&hue));
        assert_eq!(saturation, 0.0);
    }

    #[test]
    fn test_zero_diameter() {
        let geometry = WheelGeometry::new(0);
        assert_eq!(geometry.hue_saturation_at(Vec2::ZERO), Some((180.0, 0.0)));
        let buffer = render(0);
        assert!(buffer.as_bytes().is_empty());
    }

    #[test]
    fn test_position_for_inverts_mapping() {
        let geometry = WheelGeometry::new(200);
        for hue in [0.0, 15.0, 90.0, 179.5, 270.0, 359.0] {
            for saturation in [10.0, 50.0, 100.0] {
                let point = geometry.position_for(hue, saturation);
                let local = geometry.to_local(point);
                assert!(geometry.contains(local), "{hue}/{saturation} left the disc");
                let (h, s) = geometry.hue_saturation_at(local).unwrap();
                assert!(hue_distance(h, hue) < 1e-6, "hue {hue} came back as {h}");
                assert!((s - saturation).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_render_pixels() {
        let buffer = render(100);
        assert_eq!(buffer.width(), 100);
        assert_eq!(buffer.height(), 100);

        // Rim on the left is pure red
        assert_eq!(buffer.pixel(0, 50), Some([255, 0, 0, 255]));
        // Top rim is hue 90
        assert_eq!(buffer.pixel(50, 0), Some([128, 255, 0, 255]));
        // Right, one pixel inside the rim: hue 180 at 98% saturation
        assert_eq!(buffer.pixel(99, 50), Some([5, 255, 255, 255]));
        // Center is white
        assert_eq!(buffer.pixel(50, 50), Some([255, 255, 255, 255]));
        // Corners stay transparent
        assert_eq!(buffer.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(buffer.pixel(99, 99), Some([0, 0, 0, 0]));
        assert_eq!(buffer.pixel(100, 0), None);
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(64), render(64));
        assert_eq!(render(33).as_bytes(), render(33).as_bytes());
    }

    #[test]
    fn test_paint_only_inside_disc() {
        struct Recorder {
            geometry: WheelGeometry,
            painted: usize,
        }

        impl DisplaySurface for Recorder {
            fn paint_pixel(&mut self, x: u32, y: u32, _rgb: Rgb) {
                let local = Vec2::new(
                    f64::from(x) - self.geometry.radius(),
                    f64::from(y) - self.geometry.radius(),
                );
                assert!(self.geometry.contains(local));
                self.painted += 1;
            }
        }

        let geometry = WheelGeometry::new(40);
        let mut recorder = Recorder { geometry, painted: 0 };
        paint_wheel(&geometry, &mut recorder);

        // Roughly the disc area, well under the full square
        let area = PI * 20.0 * 20.0;
        assert!((recorder.painted as f64 - area).abs() < 60.0);
        assert!(recorder.painted < 40 * 40);
    }
}
