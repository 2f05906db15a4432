/// GLSL ES 1.00 programs used by the drawables
use crate::geometry::Attribute;
use crate::uniforms::{BasicUniforms, PhongUniforms, UniformDecl};

/// Source pair plus the attribute and uniform names the program exposes
#[derive(Debug, Clone, Copy)]
pub struct ShaderSource {
    pub name: &'static str,
    pub vertex: &'static str,
    pub fragment: &'static str,
    pub attributes: &'static [Attribute],
    pub uniforms: &'static [UniformDecl],
}

/// Position-only, flat color
pub const BASIC: ShaderSource = ShaderSource {
    name: "basic",
    vertex: include_str!("shaders/basic.vert"),
    fragment: include_str!("shaders/basic.frag"),
    attributes: &[Attribute::Position],
    uniforms: BasicUniforms::DECLS,
};

/// Textured, normal-mapped Blinn-Phong with one point light.
/// Needs `OES_standard_derivatives` for the fragment stage.
pub const PHONG: ShaderSource = ShaderSource {
    name: "phong",
    vertex: include_str!("shaders/phong.vert"),
    fragment: include_str!("shaders/phong.frag"),
    attributes: &[Attribute::Position, Attribute::Normal, Attribute::Uv],
    uniforms: PhongUniforms::DECLS,
};
