/// The rendering backend seam.
///
/// Everything above this trait (drawables, scene, frame loop) is platform
/// independent; the web crate implements it on top of WebGL.
use crate::error::Result;
use crate::geometry::MeshData;
use crate::shaders::ShaderSource;
use crate::texture::SamplerSettings;
use crate::uniforms::UniformBlock;

/// Extension that provides `dFdx` / `dFdy` in fragment shaders
pub const STANDARD_DERIVATIVES: &str = "OES_standard_derivatives";

/// Extension that provides anisotropic texture filtering
pub const TEXTURE_FILTER_ANISOTROPIC: &str = "EXT_texture_filter_anisotropic";

/// Drawing buffer size in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, 1.0 for a degenerate viewport
    pub fn aspect(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// GPU operations the demo needs.
///
/// Creation calls happen once at startup and may fail; per-frame calls do
/// not.
pub trait Gpu {
    /// Decoded image ready for upload
    type Image;
    type Texture;
    type Program;
    type Geometry;

    /// Enable an extension by name, reporting whether it is available
    fn enable_extension(&mut self, name: &str) -> bool;

    /// Device limit for anisotropic filtering, `None` when unsupported
    fn max_anisotropy(&mut self) -> Option<f32>;

    fn create_program(&mut self, source: &ShaderSource) -> Result<Self::Program>;

    /// Upload every attribute of `mesh` plus its index buffer
    fn create_geometry(&mut self, mesh: &MeshData) -> Result<Self::Geometry>;

    fn create_texture(
        &mut self,
        image: &Self::Image,
        sampler: &SamplerSettings,
    ) -> Result<Self::Texture>;

    /// Set the viewport, enable depth test and back-face culling, clear
    /// color and depth
    fn begin_frame(&mut self, viewport: Viewport, clear_color: [f32; 4]);

    fn bind_texture(&mut self, texture: &Self::Texture, unit: u32);

    /// Make `program` current and upload one bundle of uniforms to it
    fn upload_uniforms(&mut self, program: &Self::Program, uniforms: &dyn UniformBlock);

    /// Indexed triangle draw of `geometry` with `program`
    fn draw_indexed(&mut self, program: &Self::Program, geometry: &Self::Geometry);
}
