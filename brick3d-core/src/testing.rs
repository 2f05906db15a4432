/// Backend that records every call, for asserting on drawables and scenes
use crate::backend::{Gpu, Viewport, STANDARD_DERIVATIVES, TEXTURE_FILTER_ANISOTROPIC};
use crate::error::Result;
use crate::geometry::MeshData;
use crate::shaders::ShaderSource;
use crate::texture::SamplerSettings;
use crate::uniforms::{UniformBlock, UniformValue};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    EnableExtension(String),
    CreateProgram(&'static str),
    CreateGeometry { vertices: usize, triangles: usize },
    CreateTexture { image: &'static str, sampler: SamplerSettings },
    BeginFrame { viewport: Viewport, clear_color: [f32; 4] },
    BindTexture { texture: usize, unit: u32 },
    Uniforms { program: &'static str, values: Vec<(&'static str, UniformValue)> },
    Draw { program: &'static str, geometry: usize },
}

pub struct RecordingGpu {
    pub extensions: Vec<&'static str>,
    pub anisotropy_limit: f32,
    pub calls: Vec<Call>,
    next_id: usize,
}

impl RecordingGpu {
    /// A device with every extension the demo can use
    pub fn new() -> Self {
        Self {
            extensions: vec![STANDARD_DERIVATIVES, TEXTURE_FILTER_ANISOTROPIC],
            anisotropy_limit: 8.0,
            calls: Vec::new(),
            next_id: 0,
        }
    }

    pub fn without(extension: &str) -> Self {
        let mut gpu = Self::new();
        gpu.extensions.retain(|name| *name != extension);
        gpu
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    /// Uniform bundles uploaded to `program`, in call order
    pub fn uniforms_for(&self, program: &str) -> Vec<Vec<(&'static str, UniformValue)>> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Uniforms { program: p, values } if *p == program => Some(values.clone()),
                _ => None,
            })
            .collect()
    }

    fn next_id(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }
}

/// Find a uniform by name in a recorded bundle
pub fn uniform(values: &[(&'static str, UniformValue)], name: &str) -> Option<UniformValue> {
    values.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

impl Gpu for RecordingGpu {
    type Image = &'static str;
    type Texture = usize;
    type Program = &'static str;
    type Geometry = usize;

    fn enable_extension(&mut self, name: &str) -> bool {
        self.calls.push(Call::EnableExtension(name.to_string()));
        self.extensions.iter().any(|extension| *extension == name)
    }

    fn max_anisotropy(&mut self) -> Option<f32> {
        self.enable_extension(TEXTURE_FILTER_ANISOTROPIC)
            .then_some(self.anisotropy_limit)
    }

    fn create_program(&mut self, source: &ShaderSource) -> Result<Self::Program> {
        self.calls.push(Call::CreateProgram(source.name));
        Ok(source.name)
    }

    fn create_geometry(&mut self, mesh: &MeshData) -> Result<Self::Geometry> {
        mesh.index_data()?;
        self.calls.push(Call::CreateGeometry {
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
        });
        Ok(self.next_id())
    }

    fn create_texture(&mut self, image: &Self::Image, sampler: &SamplerSettings) -> Result<Self::Texture> {
        self.calls.push(Call::CreateTexture {
            image: *image,
            sampler: *sampler,
        });
        Ok(self.next_id())
    }

    fn begin_frame(&mut self, viewport: Viewport, clear_color: [f32; 4]) {
        self.calls.push(Call::BeginFrame {
            viewport,
            clear_color,
        });
    }

    fn bind_texture(&mut self, texture: &Self::Texture, unit: u32) {
        self.calls.push(Call::BindTexture {
            texture: *texture,
            unit,
        });
    }

    fn upload_uniforms(&mut self, program: &Self::Program, uniforms: &dyn UniformBlock) {
        self.calls.push(Call::Uniforms {
            program: *program,
            values: uniforms.to_vec(),
        });
    }

    fn draw_indexed(&mut self, program: &Self::Program, geometry: &Self::Geometry) {
        self.calls.push(Call::Draw {
            program: *program,
            geometry: *geometry,
        });
    }
}
