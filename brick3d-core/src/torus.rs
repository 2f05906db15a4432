/// The brick torus: a static, textured, normal-mapped mesh
use nalgebra::Matrix4;

use crate::backend::{Gpu, STANDARD_DERIVATIVES};
use crate::drawable::{Drawable, Frame};
use crate::error::{RenderError, Result};
use crate::geometry::{self, TorusOptions};
use crate::shaders::PHONG;
use crate::uniforms::PhongUniforms;

pub struct Torus<G: Gpu> {
    program: G::Program,
    geometry: G::Geometry,
    model: Matrix4<f32>,
    flat_shading: bool,
}

impl<G: Gpu> Torus<G> {
    /// Fails with [`RenderError::MissingExtension`] before touching any
    /// other GPU state when derivatives are unavailable.
    pub fn new(gpu: &mut G, options: &TorusOptions) -> Result<Self> {
        // Face normals and the normal-map tangent frame both use dFdx/dFdy
        if !gpu.enable_extension(STANDARD_DERIVATIVES) {
            return Err(RenderError::MissingExtension(STANDARD_DERIVATIVES));
        }

        let mesh = geometry::torus(options);
        log::debug!(
            "torus mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        let program = gpu.create_program(&PHONG)?;
        let geometry = gpu.create_geometry(&mesh)?;

        Ok(Self {
            program,
            geometry,
            model: Matrix4::identity(),
            flat_shading: false,
        })
    }

    /// Shade with per-face normals instead of the interpolated ones
    pub fn set_flat_shading(&mut self, enabled: bool) {
        self.flat_shading = enabled;
    }

    pub fn uniforms(&self, frame: &Frame) -> PhongUniforms {
        PhongUniforms {
            projection: frame.projection,
            view: frame.view,
            model: self.model,
            flat_shading: self.flat_shading,
            light: frame.light,
        }
    }
}

impl<G: Gpu> Drawable<G> for Torus<G> {
    fn draw(&self, gpu: &mut G, frame: &Frame) {
        gpu.upload_uniforms(&self.program, &self.uniforms(frame));
        gpu.draw_indexed(&self.program, &self.geometry);
    }
}
