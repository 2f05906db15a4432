/// Model matrices for the scene's drawables
use nalgebra::{Matrix4, Point3, Vector3};

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a translation matrix
    pub fn translation_matrix(position: &Point3<f32>) -> Matrix4<f32> {
        Matrix4::new_translation(&position.coords)
    }

    /// Create a scale matrix
    pub fn scale_matrix(scale: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_nonuniform_scaling(scale)
    }

    /// Translate, then scale in the translated frame
    pub fn model_matrix(position: &Point3<f32>, scale: &Vector3<f32>) -> Matrix4<f32> {
        Self::translation_matrix(position) * Self::scale_matrix(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_model() {
        let matrix = Transform::model_matrix(&Point3::origin(), &Vector3::repeat(1.0));
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_model_scales_about_position() {
        let position = Point3::new(1.0, -2.0, 0.5);
        let model = Transform::model_matrix(&position, &Vector3::repeat(0.05));

        assert_relative_eq!(model.transform_point(&Point3::origin()), position);
        assert_relative_eq!(
            model.transform_point(&Point3::new(1.0, 0.0, 0.0)),
            Point3::new(1.05, -2.0, 0.5),
            epsilon = 1e-6
        );
    }
}
