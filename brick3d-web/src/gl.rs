/// WebGL 1 implementation of the core `Gpu` trait
use std::collections::HashMap;

use brick3d_core::backend::{Gpu, Viewport, TEXTURE_FILTER_ANISOTROPIC};
use brick3d_core::error::{RenderError, Result, ShaderStage};
use brick3d_core::geometry::{Attribute, MeshData};
use brick3d_core::shaders::ShaderSource;
use brick3d_core::texture::{Filter, SamplerSettings, Wrap};
use brick3d_core::uniforms::{UniformBlock, UniformDecl, UniformValue};
use web_sys::{
    ExtTextureFilterAnisotropic, HtmlImageElement, WebGlBuffer, WebGlProgram,
    WebGlRenderingContext as GL, WebGlShader, WebGlTexture, WebGlUniformLocation,
};

/// Linked program with its active uniform and attribute locations
pub struct GlProgram {
    name: &'static str,
    program: WebGlProgram,
    uniforms: HashMap<&'static str, WebGlUniformLocation>,
    attributes: Vec<(Attribute, u32)>,
}

/// One buffer per attribute plus a 16-bit index buffer
pub struct GlGeometry {
    buffers: Vec<(Attribute, WebGlBuffer)>,
    indices: WebGlBuffer,
    index_count: i32,
}

pub struct WebGl {
    gl: GL,
}

impl WebGl {
    pub fn new(gl: GL) -> Self {
        Self { gl }
    }

    /// Current drawing buffer size in device pixels
    pub fn drawing_buffer(&self) -> Viewport {
        Viewport::new(
            self.gl.drawing_buffer_width().max(0) as u32,
            self.gl.drawing_buffer_height().max(0) as u32,
        )
    }

    fn compile_shader(
        &self,
        program: &'static str,
        stage: ShaderStage,
        source: &str,
    ) -> Result<WebGlShader> {
        let shader_type = match stage {
            ShaderStage::Vertex => GL::VERTEX_SHADER,
            ShaderStage::Fragment => GL::FRAGMENT_SHADER,
        };
        let shader = self
            .gl
            .create_shader(shader_type)
            .ok_or(RenderError::ResourceCreation("shader"))?;

        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);

        if !self
            .gl
            .get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            let log = self.gl.get_shader_info_log(&shader).unwrap_or_default();
            self.gl.delete_shader(Some(&shader));
            return Err(RenderError::ShaderCompile {
                program,
                stage,
                log,
            });
        }

        Ok(shader)
    }

    fn link_program(
        &self,
        name: &'static str,
        vertex: &WebGlShader,
        fragment: &WebGlShader,
    ) -> Result<WebGlProgram> {
        let program = self
            .gl
            .create_program()
            .ok_or(RenderError::ResourceCreation("program"))?;
        self.gl.attach_shader(&program, vertex);
        self.gl.attach_shader(&program, fragment);
        self.gl.link_program(&program);

        if !self
            .gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            let log = self.gl.get_program_info_log(&program).unwrap_or_default();
            self.gl.delete_program(Some(&program));
            return Err(RenderError::ProgramLink { program: name, log });
        }

        Ok(program)
    }

    fn upload_buffer(&self, target: u32, data: &js_sys::Object, what: &'static str) -> Result<WebGlBuffer> {
        let buffer = self
            .gl
            .create_buffer()
            .ok_or(RenderError::ResourceCreation(what))?;
        self.gl.bind_buffer(target, Some(&buffer));
        self.gl
            .buffer_data_with_array_buffer_view(target, data, GL::STATIC_DRAW);
        Ok(buffer)
    }
}

fn gl_filter(filter: Filter) -> i32 {
    (match filter {
        Filter::Linear => GL::LINEAR,
        Filter::LinearMipmapLinear => GL::LINEAR_MIPMAP_LINEAR,
    }) as i32
}

fn gl_wrap(wrap: Wrap) -> i32 {
    (match wrap {
        Wrap::Repeat => GL::REPEAT,
    }) as i32
}

impl Gpu for WebGl {
    type Image = HtmlImageElement;
    type Texture = WebGlTexture;
    type Program = GlProgram;
    type Geometry = GlGeometry;

    fn enable_extension(&mut self, name: &str) -> bool {
        matches!(self.gl.get_extension(name), Ok(Some(_)))
    }

    fn max_anisotropy(&mut self) -> Option<f32> {
        if !self.enable_extension(TEXTURE_FILTER_ANISOTROPIC) {
            return None;
        }
        self.gl
            .get_parameter(ExtTextureFilterAnisotropic::MAX_TEXTURE_MAX_ANISOTROPY_EXT)
            .ok()
            .and_then(|value| value.as_f64())
            .map(|value| value as f32)
    }

    fn create_program(&mut self, source: &ShaderSource) -> Result<Self::Program> {
        let vertex = self.compile_shader(source.name, ShaderStage::Vertex, source.vertex)?;
        let fragment = match self.compile_shader(source.name, ShaderStage::Fragment, source.fragment) {
            Ok(shader) => shader,
            Err(err) => {
                self.gl.delete_shader(Some(&vertex));
                return Err(err);
            }
        };

        let linked = self.link_program(source.name, &vertex, &fragment);
        // A linked program keeps its own copy of the shaders
        self.gl.delete_shader(Some(&vertex));
        self.gl.delete_shader(Some(&fragment));
        let program = linked?;

        // Inactive names are optimized away by the driver; skip them
        let mut uniforms = HashMap::new();
        for &UniformDecl { name, .. } in source.uniforms {
            match self.gl.get_uniform_location(&program, name) {
                Some(location) => {
                    uniforms.insert(name, location);
                }
                None => log::debug!("uniform {} inactive in program {}", name, source.name),
            }
        }

        let attributes = source
            .attributes
            .iter()
            .filter_map(|&attribute| {
                let location = self.gl.get_attrib_location(&program, attribute.name());
                (location >= 0).then_some((attribute, location as u32))
            })
            .collect();

        log::debug!("linked program {}", source.name);

        Ok(GlProgram {
            name: source.name,
            program,
            uniforms,
            attributes,
        })
    }

    fn create_geometry(&mut self, mesh: &MeshData) -> Result<Self::Geometry> {
        let mut buffers = Vec::new();
        for attribute in mesh.attributes() {
            let data = mesh.attribute_data(attribute);
            let array = js_sys::Float32Array::from(data.as_slice());
            let buffer = self.upload_buffer(GL::ARRAY_BUFFER, &array, "vertex buffer")?;
            buffers.push((attribute, buffer));
        }

        let indices = mesh.index_data()?;
        let array = js_sys::Uint16Array::from(indices.as_slice());
        let index_buffer = self.upload_buffer(GL::ELEMENT_ARRAY_BUFFER, &array, "index buffer")?;

        Ok(GlGeometry {
            buffers,
            indices: index_buffer,
            index_count: indices.len() as i32,
        })
    }

    fn create_texture(
        &mut self,
        image: &Self::Image,
        sampler: &SamplerSettings,
    ) -> Result<Self::Texture> {
        let gl = &self.gl;
        let texture = gl
            .create_texture()
            .ok_or(RenderError::ResourceCreation("texture"))?;

        gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
        gl.tex_image_2d_with_u32_and_u32_and_image(
            GL::TEXTURE_2D,
            0,
            GL::RGBA as i32,
            GL::RGBA,
            GL::UNSIGNED_BYTE,
            image,
        )
        .map_err(|err| RenderError::Texture(crate::error::describe(&err)))?;

        if sampler.generate_mipmaps {
            gl.generate_mipmap(GL::TEXTURE_2D);
        }
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, gl_filter(sampler.min_filter));
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, gl_filter(sampler.mag_filter));
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, gl_wrap(sampler.wrap));
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, gl_wrap(sampler.wrap));

        if let Some(anisotropy) = sampler.anisotropy {
            gl.tex_parameterf(
                GL::TEXTURE_2D,
                ExtTextureFilterAnisotropic::TEXTURE_MAX_ANISOTROPY_EXT,
                anisotropy,
            );
        }

        Ok(texture)
    }

    fn begin_frame(&mut self, viewport: Viewport, clear_color: [f32; 4]) {
        let gl = &self.gl;
        gl.viewport(0, 0, viewport.width as i32, viewport.height as i32);
        gl.enable(GL::DEPTH_TEST);
        gl.enable(GL::CULL_FACE);

        let [r, g, b, a] = clear_color;
        gl.clear_color(r, g, b, a);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn bind_texture(&mut self, texture: &Self::Texture, unit: u32) {
        self.gl.active_texture(GL::TEXTURE0 + unit);
        self.gl.bind_texture(GL::TEXTURE_2D, Some(texture));
    }

    fn upload_uniforms(&mut self, program: &Self::Program, uniforms: &dyn UniformBlock) {
        let gl = &self.gl;
        gl.use_program(Some(&program.program));

        uniforms.visit(&mut |name, value| {
            let Some(location) = program.uniforms.get(name) else {
                return;
            };
            let location = Some(location);
            match value {
                UniformValue::Mat4(matrix) => {
                    // nalgebra storage is column-major, as GL expects
                    gl.uniform_matrix4fv_with_f32_array(location, false, matrix.as_slice())
                }
                UniformValue::Vec3(vector) => gl.uniform3fv_with_f32_array(location, vector.as_slice()),
                UniformValue::Float(value) => gl.uniform1f(location, value),
                UniformValue::Int(value) => gl.uniform1i(location, value),
                UniformValue::Sampler(unit) => gl.uniform1i(location, unit as i32),
            }
        });
    }

    fn draw_indexed(&mut self, program: &Self::Program, geometry: &Self::Geometry) {
        let gl = &self.gl;
        gl.use_program(Some(&program.program));

        let mut enabled = Vec::with_capacity(geometry.buffers.len());
        for (attribute, buffer) in &geometry.buffers {
            let Some(&(_, location)) = program.attributes.iter().find(|(a, _)| a == attribute) else {
                continue;
            };
            gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
            gl.vertex_attrib_pointer_with_i32(location, attribute.size(), GL::FLOAT, false, 0, 0);
            gl.enable_vertex_attrib_array(location);
            enabled.push(location);
        }

        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&geometry.indices));
        gl.draw_elements_with_i32(GL::TRIANGLES, geometry.index_count, GL::UNSIGNED_SHORT, 0);

        for location in enabled {
            gl.disable_vertex_attrib_array(location);
        }
    }
}

impl std::fmt::Debug for GlProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlProgram")
            .field("name", &self.name)
            .field("uniforms", &self.uniforms.len())
            .field("attributes", &self.attributes)
            .finish()
    }
}
