/// Small unlit sphere marking where the light is
use nalgebra::{Matrix4, Point3, Vector3};

use crate::backend::Gpu;
use crate::drawable::{Drawable, Frame};
use crate::error::Result;
use crate::geometry;
use crate::light::Light;
use crate::shaders::BASIC;
use crate::transform::Transform;
use crate::uniforms::BasicUniforms;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereOptions {
    pub subdivisions: u32,
    /// Uniform scale applied to the unit icosphere
    pub scale: f32,
    pub color: Vector3<f32>,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            subdivisions: 2,
            scale: 0.05,
            color: Vector3::new(1.0, 0.0, 0.0),
        }
    }
}

pub struct Sphere<G: Gpu> {
    program: G::Program,
    geometry: G::Geometry,
    pub position: Point3<f32>,
    pub scale: Vector3<f32>,
    pub color: Vector3<f32>,
}

impl<G: Gpu> Sphere<G> {
    pub fn new(gpu: &mut G, options: &SphereOptions) -> Result<Self> {
        let mesh = geometry::icosphere(options.subdivisions);
        log::debug!(
            "icosphere mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        let program = gpu.create_program(&BASIC)?;
        let geometry = gpu.create_geometry(&mesh)?;

        Ok(Self {
            program,
            geometry,
            position: Point3::origin(),
            scale: Vector3::repeat(options.scale),
            color: options.color,
        })
    }

    /// Take the light's position and color
    pub fn follow(&mut self, light: &Light) {
        self.position = light.position;
        self.color = light.color;
    }

    pub fn model_matrix(&self) -> Matrix4<f32> {
        Transform::model_matrix(&self.position, &self.scale)
    }

    pub fn uniforms(&self, frame: &Frame) -> BasicUniforms {
        BasicUniforms {
            projection: frame.projection,
            view: frame.view,
            model: self.model_matrix(),
            color: self.color,
        }
    }
}

impl<G: Gpu> Drawable<G> for Sphere<G> {
    fn draw(&self, gpu: &mut G, frame: &Frame) {
        gpu.upload_uniforms(&self.program, &self.uniforms(frame));
        gpu.draw_indexed(&self.program, &self.geometry);
    }
}
