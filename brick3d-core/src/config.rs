/// Demo configuration. Everything has a built-in default; there are no
/// config files.
use crate::camera::OrbitCamera;
use crate::geometry::TorusOptions;
use crate::light::{Light, LightPath};
use crate::sphere::SphereOptions;
use crate::texture::{asset_url, TextureSet};

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub camera: OrbitCamera,
    /// Light color, ambient term and attenuation; position is driven by
    /// `light_path`
    pub light: Light,
    pub light_path: LightPath,
    pub torus: TorusOptions,
    pub sphere: SphereOptions,
    /// Image URL pattern, `{}` is replaced by the texture slot name
    pub texture_pattern: String,
    /// Upper bound on anisotropic filtering when the device supports it
    pub max_anisotropy: f32,
    pub background: [f32; 4],
    pub flat_shading: bool,
}

impl DemoConfig {
    /// Image URLs in slot order
    pub fn texture_urls(&self) -> TextureSet<String> {
        TextureSet::from_fn(|slot| asset_url(&self.texture_pattern, slot))
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            camera: OrbitCamera::default(),
            light: Light::default(),
            light_path: LightPath::default(),
            torus: TorusOptions::default(),
            sphere: SphereOptions::default(),
            texture_pattern: "assets/brick-{}.jpg".to_string(),
            max_anisotropy: 16.0,
            background: [0.0, 0.0, 0.0, 1.0],
            flat_shading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let urls = DemoConfig::default().texture_urls();
        assert_eq!(urls.diffuse, "assets/brick-diffuse.jpg");
        assert_eq!(urls.normal, "assets/brick-normal.jpg");
        assert_eq!(urls.specular, "assets/brick-specular.jpg");
    }

    #[test]
    fn test_custom_pattern() {
        let config = DemoConfig {
            texture_pattern: "textures/{}.png".to_string(),
            ..DemoConfig::default()
        };
        assert_eq!(config.texture_urls().normal, "textures/normal.png");
    }
}
