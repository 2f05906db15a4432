/// Brings together the textures, meshes and light into one scene
use nalgebra::Matrix4;

use crate::backend::Gpu;
use crate::config::DemoConfig;
use crate::drawable::{Drawable, Frame};
use crate::error::Result;
use crate::light::{Light, LightPath};
use crate::sphere::Sphere;
use crate::texture::{SamplerSettings, TextureSet};
use crate::torus::Torus;

pub struct Scene<G: Gpu> {
    torus: Torus<G>,
    sphere: Sphere<G>,
    textures: TextureSet<G::Texture>,
    light: Light,
    light_path: LightPath,
}

impl<G: Gpu> Scene<G> {
    /// Build both drawables and upload the three maps.
    ///
    /// Anisotropic filtering is applied when the device has it and skipped
    /// otherwise; a missing derivatives extension is fatal.
    pub fn new(gpu: &mut G, images: &TextureSet<G::Image>, config: &DemoConfig) -> Result<Self> {
        let mut torus = Torus::new(gpu, &config.torus)?;
        torus.set_flat_shading(config.flat_shading);
        let sphere = Sphere::new(gpu, &config.sphere)?;

        let anisotropy = match gpu.max_anisotropy() {
            Some(max) => Some(max.min(config.max_anisotropy)),
            None => {
                log::debug!("anisotropic filtering unavailable, using trilinear only");
                None
            }
        };
        let sampler = SamplerSettings::mipmapped_repeat().with_anisotropy(anisotropy);

        let textures = images.try_map(|slot, image| {
            log::debug!("uploading {} map to unit {} ({:?})", slot.name(), slot.unit(), sampler);
            gpu.create_texture(image, &sampler)
        })?;

        log::info!("scene ready");

        Ok(Self {
            torus,
            sphere,
            textures,
            light: config.light,
            light_path: config.light_path,
        })
    }

    pub fn set_flat_shading(&mut self, enabled: bool) {
        self.torus.set_flat_shading(enabled);
    }

    /// Move the light, bind the maps, then draw the torus and the light
    /// marker in that order
    pub fn draw(&mut self, gpu: &mut G, time: f32, projection: &Matrix4<f32>, view: &Matrix4<f32>) {
        self.light.position = self.light_path.position_at(time);

        for (slot, texture) in self.textures.iter() {
            gpu.bind_texture(texture, slot.unit());
        }

        let frame = Frame {
            time,
            projection: *projection,
            view: *view,
            light: self.light,
        };

        self.torus.draw(gpu, &frame);

        self.sphere.follow(&self.light);
        self.sphere.draw(gpu, &frame);
    }
}
