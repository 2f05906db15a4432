/// Orbiting camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};
use std::f32::consts::PI;

/// Matrices handed to the scene for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    pub projection: Matrix4<f32>,
    pub view: Matrix4<f32>,
    pub eye: Point3<f32>,
}

/// Camera circling `target` in the XZ plane at a fixed radius.
///
/// The orbit angle is `start_angle + time * angular_speed`, so the camera is
/// a pure function of elapsed time and viewport aspect.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub radius: f32,
    /// Orbit angle at time zero, in radians
    pub start_angle: f32,
    /// Radians per second
    pub angular_speed: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl OrbitCamera {
    pub fn new(radius: f32) -> Self {
        Self {
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            radius,
            start_angle: PI / 4.0,
            angular_speed: 0.2,
            fov: PI / 4.0, // 45 degrees
            near: 0.01,
            far: 100.0,
        }
    }

    /// Eye position after `time` seconds
    pub fn eye(&self, time: f32) -> Point3<f32> {
        let rotation = self.start_angle + time * self.angular_speed;
        Point3::new(
            self.target.x + rotation.cos() * self.radius,
            self.target.y,
            self.target.z + rotation.sin() * self.radius,
        )
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self, time: f32) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.eye(time), &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        Matrix4::new_perspective(aspect, self.fov, self.near, self.far)
    }

    pub fn matrices(&self, time: f32, aspect: f32) -> CameraMatrices {
        CameraMatrices {
            projection: self.projection_matrix(aspect),
            view: self.view_matrix(time),
            eye: self.eye(time),
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_creation() {
        let camera = OrbitCamera::default();
        assert_eq!(camera.radius, 4.0);
        assert_relative_eq!(camera.fov, PI / 4.0);
        assert_relative_eq!(camera.near, 0.01);
        assert_relative_eq!(camera.far, 100.0);
    }

    #[test]
    fn test_eye_stays_on_orbit() {
        let camera = OrbitCamera::default();
        for step in 0..500 {
            let time = step as f32 * 0.37;
            let eye = camera.eye(time);
            assert_relative_eq!(eye.x * eye.x + eye.z * eye.z, 16.0, epsilon = 1e-3);
            assert_eq!(eye.y, 0.0);
        }
    }

    #[test]
    fn test_initial_eye() {
        let eye = OrbitCamera::default().eye(0.0);
        let expected = 4.0 * (PI / 4.0).cos();
        assert_relative_eq!(eye.x, expected, epsilon = 1e-6);
        assert_relative_eq!(eye.z, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_view_matrix_looks_at_target() {
        let camera = OrbitCamera::default();
        let view = camera.view_matrix(3.0);
        // The target sits straight ahead, `radius` units down -Z in view space
        let target = view.transform_point(&camera.target);
        assert_relative_eq!(target, Point3::new(0.0, 0.0, -4.0), epsilon = 1e-5);
        // The eye maps to the origin
        let eye = view.transform_point(&camera.eye(3.0));
        assert_relative_eq!(eye, Point3::origin(), epsilon = 1e-5);
    }

    #[test]
    fn test_projection_matches_perspective() {
        let camera = OrbitCamera::default();
        let aspect = 1280.0 / 720.0;
        let projection = camera.projection_matrix(aspect);
        let expected = Matrix4::new_perspective(aspect, PI / 4.0, 0.01, 100.0);
        assert_relative_eq!(projection, expected);

        let matrices = camera.matrices(1.0, aspect);
        assert_eq!(matrices.projection, projection);
        assert_eq!(matrices.eye, camera.eye(1.0));
    }
}
