/// brick3d Core Library - platform-independent half of the brick torus demo
///
/// Mesh generation, the orbiting camera, the animated light, typed uniform
/// bundles and the two drawables live here, written against the [`Gpu`]
/// trait so they run unchanged on WebGL and under test.

pub mod app;
pub mod backend;
pub mod camera;
pub mod config;
pub mod drawable;
pub mod error;
pub mod geometry;
pub mod light;
pub mod scene;
pub mod shaders;
pub mod sphere;
pub mod texture;
pub mod torus;
pub mod transform;
pub mod uniforms;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use app::{App, FrameClock};
pub use backend::{Gpu, Viewport};
pub use camera::{CameraMatrices, OrbitCamera};
pub use config::DemoConfig;
pub use error::{RenderError, ShaderStage};
pub use geometry::{Attribute, MeshData, TorusOptions};
pub use light::{Light, LightPath};
pub use scene::Scene;
pub use texture::{SamplerSettings, TextureSet, TextureSlot};
pub use uniforms::{UniformBlock, UniformValue};
