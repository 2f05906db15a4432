/// The scene's single point light and the path it travels
use nalgebra::{Point3, Vector3};

/// Convert an 8-bit RGB triple to a 0..1 color
pub fn rgb8(r: u8, g: u8, b: u8) -> Vector3<f32> {
    Vector3::new(r as f32, g as f32, b as f32) / 255.0
}

/// Point light with a smooth distance falloff
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Point3<f32>,
    pub color: Vector3<f32>,
    pub ambient: Vector3<f32>,
    /// Attenuation cutoff; contribution below this is clamped to zero
    pub falloff: f32,
    pub radius: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            color: rgb8(0xff, 0xc8, 0x68),
            ambient: rgb8(0x0a, 0x04, 0x0b),
            falloff: 0.15,
            radius: 5.0,
        }
    }
}

/// Per-axis sine oscillation: `offset + amplitude * sin(time * frequency)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightPath {
    pub offset: Vector3<f32>,
    pub amplitude: Vector3<f32>,
    pub frequency: Vector3<f32>,
}

impl LightPath {
    pub fn position_at(&self, time: f32) -> Point3<f32> {
        let wave = self.frequency.map(|f| (time * f).sin());
        Point3::from(self.offset + self.amplitude.component_mul(&wave))
    }
}

impl Default for LightPath {
    fn default() -> Self {
        Self {
            offset: Vector3::new(0.0, 0.0, 0.5),
            amplitude: Vector3::new(-0.9, 0.3, 2.0),
            frequency: Vector3::repeat(0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_colors() {
        let light = Light::default();
        assert_relative_eq!(light.color, Vector3::new(1.0, 200.0 / 255.0, 104.0 / 255.0));
        assert_relative_eq!(light.ambient, Vector3::new(10.0, 4.0, 11.0) / 255.0);
    }

    #[test]
    fn test_path_bounded_by_amplitude() {
        let path = LightPath::default();
        for step in 0..2000 {
            let time = step as f32 * 0.05;
            let offset = path.position_at(time) - Point3::from(path.offset);
            for axis in 0..3 {
                assert!(offset[axis].abs() <= path.amplitude[axis].abs() + 1e-6);
            }
        }
    }

    #[test]
    fn test_path_values() {
        let path = LightPath::default();
        assert_relative_eq!(path.position_at(0.0), Point3::new(0.0, 0.0, 0.5));

        // sin(t/2) == 1 at t = pi
        let peak = path.position_at(std::f32::consts::PI);
        assert_relative_eq!(peak, Point3::new(-0.9, 0.3, 2.5), epsilon = 1e-6);
    }

    #[test]
    fn test_path_is_deterministic() {
        let path = LightPath::default();
        assert_eq!(path.position_at(12.5), path.position_at(12.5));
    }
}
