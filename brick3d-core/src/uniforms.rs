/// Typed uniform bundles uploaded once per draw call
use nalgebra::{Matrix4, Vector3};

use crate::light::Light;
use crate::texture::TextureSlot;

/// A single shader input value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Mat4(Matrix4<f32>),
    Vec3(Vector3<f32>),
    Float(f32),
    Int(i32),
    /// Texture unit index for a `sampler2D`
    Sampler(u32),
}

/// A uniform as the GLSL source declares it. Struct members such as
/// `light.color` carry the member type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformDecl {
    pub name: &'static str,
    pub glsl_type: &'static str,
}

const fn decl(name: &'static str, glsl_type: &'static str) -> UniformDecl {
    UniformDecl { name, glsl_type }
}

/// A complete set of uniforms for one program.
///
/// Backends receive the whole bundle in one call and look the names up in
/// the program they are drawing with.
pub trait UniformBlock {
    fn visit(&self, f: &mut dyn FnMut(&'static str, UniformValue));

    /// Collect into `(name, value)` pairs in visit order
    fn to_vec(&self) -> Vec<(&'static str, UniformValue)> {
        let mut values = Vec::new();
        self.visit(&mut |name, value| values.push((name, value)));
        values
    }
}

/// Uniforms of the unlit `basic` program
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicUniforms {
    pub projection: Matrix4<f32>,
    pub view: Matrix4<f32>,
    pub model: Matrix4<f32>,
    pub color: Vector3<f32>,
}

impl BasicUniforms {
    pub const DECLS: &'static [UniformDecl] = &[
        decl("projection", "mat4"),
        decl("view", "mat4"),
        decl("model", "mat4"),
        decl("color", "vec3"),
    ];
}

impl UniformBlock for BasicUniforms {
    fn visit(&self, f: &mut dyn FnMut(&'static str, UniformValue)) {
        f("projection", UniformValue::Mat4(self.projection));
        f("view", UniformValue::Mat4(self.view));
        f("model", UniformValue::Mat4(self.model));
        f("color", UniformValue::Vec3(self.color));
    }
}

/// Uniforms of the textured `phong` program
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongUniforms {
    pub projection: Matrix4<f32>,
    pub view: Matrix4<f32>,
    pub model: Matrix4<f32>,
    pub flat_shading: bool,
    pub light: Light,
}

impl PhongUniforms {
    pub const DECLS: &'static [UniformDecl] = &[
        decl("projection", "mat4"),
        decl("view", "mat4"),
        decl("model", "mat4"),
        decl("flatShading", "int"),
        decl("light.position", "vec3"),
        decl("light.color", "vec3"),
        decl("light.ambient", "vec3"),
        decl("light.falloff", "float"),
        decl("light.radius", "float"),
        decl("texDiffuse", "sampler2D"),
        decl("texNormal", "sampler2D"),
        decl("texSpecular", "sampler2D"),
    ];
}

impl UniformBlock for PhongUniforms {
    fn visit(&self, f: &mut dyn FnMut(&'static str, UniformValue)) {
        f("projection", UniformValue::Mat4(self.projection));
        f("view", UniformValue::Mat4(self.view));
        f("model", UniformValue::Mat4(self.model));
        f("flatShading", UniformValue::Int(i32::from(self.flat_shading)));
        f("light.position", UniformValue::Vec3(self.light.position.coords));
        f("light.color", UniformValue::Vec3(self.light.color));
        f("light.ambient", UniformValue::Vec3(self.light.ambient));
        f("light.falloff", UniformValue::Float(self.light.falloff));
        f("light.radius", UniformValue::Float(self.light.radius));
        for slot in TextureSlot::ALL {
            f(slot.sampler_uniform(), UniformValue::Sampler(slot.unit()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phong() -> PhongUniforms {
        PhongUniforms {
            projection: Matrix4::identity(),
            view: Matrix4::identity(),
            model: Matrix4::identity(),
            flat_shading: true,
            light: Light::default(),
        }
    }

    fn glsl_type(value: UniformValue) -> &'static str {
        match value {
            UniformValue::Mat4(_) => "mat4",
            UniformValue::Vec3(_) => "vec3",
            UniformValue::Float(_) => "float",
            UniformValue::Int(_) => "int",
            UniformValue::Sampler(_) => "sampler2D",
        }
    }

    /// Visit order, names and value types all line up with the declarations
    fn assert_matches_decls(block: &dyn UniformBlock, decls: &[UniformDecl]) {
        let visited: Vec<UniformDecl> = block
            .to_vec()
            .into_iter()
            .map(|(name, value)| decl(name, glsl_type(value)))
            .collect();
        assert_eq!(visited, decls);
    }

    #[test]
    fn test_phong_visits_every_declared_name() {
        assert_matches_decls(&phong(), PhongUniforms::DECLS);
    }

    #[test]
    fn test_basic_visits_every_declared_name() {
        let basic = BasicUniforms {
            projection: Matrix4::identity(),
            view: Matrix4::identity(),
            model: Matrix4::identity(),
            color: Vector3::new(1.0, 0.0, 0.0),
        };
        assert_matches_decls(&basic, BasicUniforms::DECLS);
    }

    #[test]
    fn test_sampler_units() {
        let values = phong().to_vec();
        let lookup = |name: &str| values.iter().find(|(n, _)| *n == name).map(|(_, v)| *v);
        assert_eq!(lookup("texDiffuse"), Some(UniformValue::Sampler(0)));
        assert_eq!(lookup("texNormal"), Some(UniformValue::Sampler(1)));
        assert_eq!(lookup("texSpecular"), Some(UniformValue::Sampler(2)));
        assert_eq!(lookup("flatShading"), Some(UniformValue::Int(1)));
    }
}
