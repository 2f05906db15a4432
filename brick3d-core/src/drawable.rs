/// Shared interface of the objects the scene draws
use nalgebra::Matrix4;

use crate::backend::Gpu;
use crate::light::Light;

/// Everything a drawable reads during one frame.
///
/// The light is passed by value so a drawable never observes it mid-update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Seconds since the loop started
    pub time: f32,
    pub projection: Matrix4<f32>,
    pub view: Matrix4<f32>,
    pub light: Light,
}

pub trait Drawable<G: Gpu> {
    /// Upload this object's uniforms and issue its draw call
    fn draw(&self, gpu: &mut G, frame: &Frame);
}
