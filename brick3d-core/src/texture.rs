/// Texture slots, sampler state and the three-map brick texture set

/// The maps the phong shader samples. Each slot owns a fixed texture unit
/// that matches the shader's sampler uniform of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Diffuse,
    Normal,
    Specular,
}

impl TextureSlot {
    /// Upload and binding order
    pub const ALL: [TextureSlot; 3] = [
        TextureSlot::Diffuse,
        TextureSlot::Normal,
        TextureSlot::Specular,
    ];

    pub fn unit(self) -> u32 {
        match self {
            TextureSlot::Diffuse => 0,
            TextureSlot::Normal => 1,
            TextureSlot::Specular => 2,
        }
    }

    /// Name used in asset file names
    pub fn name(self) -> &'static str {
        match self {
            TextureSlot::Diffuse => "diffuse",
            TextureSlot::Normal => "normal",
            TextureSlot::Specular => "specular",
        }
    }

    /// Sampler uniform in the phong shader
    pub fn sampler_uniform(self) -> &'static str {
        match self {
            TextureSlot::Diffuse => "texDiffuse",
            TextureSlot::Normal => "texNormal",
            TextureSlot::Specular => "texSpecular",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Linear,
    LinearMipmapLinear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Repeat,
}

/// Sampler state applied when a texture is created
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerSettings {
    pub min_filter: Filter,
    pub mag_filter: Filter,
    pub wrap: Wrap,
    pub generate_mipmaps: bool,
    /// `None` leaves anisotropic filtering off
    pub anisotropy: Option<f32>,
}

impl SamplerSettings {
    /// Mipmapped, trilinear, repeating
    pub fn mipmapped_repeat() -> Self {
        Self {
            min_filter: Filter::LinearMipmapLinear,
            mag_filter: Filter::Linear,
            wrap: Wrap::Repeat,
            generate_mipmaps: true,
            anisotropy: None,
        }
    }

    pub fn with_anisotropy(mut self, anisotropy: Option<f32>) -> Self {
        self.anisotropy = anisotropy;
        self
    }
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self::mipmapped_repeat()
    }
}

/// One value per texture slot
#[derive(Debug, Clone, PartialEq)]
pub struct TextureSet<T> {
    pub diffuse: T,
    pub normal: T,
    pub specular: T,
}

impl<T> TextureSet<T> {
    /// Build from values given in `TextureSlot::ALL` order
    pub fn from_array([diffuse, normal, specular]: [T; 3]) -> Self {
        Self {
            diffuse,
            normal,
            specular,
        }
    }

    /// Build by computing each slot's value
    pub fn from_fn(mut f: impl FnMut(TextureSlot) -> T) -> Self {
        Self {
            diffuse: f(TextureSlot::Diffuse),
            normal: f(TextureSlot::Normal),
            specular: f(TextureSlot::Specular),
        }
    }

    pub fn get(&self, slot: TextureSlot) -> &T {
        match slot {
            TextureSlot::Diffuse => &self.diffuse,
            TextureSlot::Normal => &self.normal,
            TextureSlot::Specular => &self.specular,
        }
    }

    /// Visit the entries in `TextureSlot::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (TextureSlot, &T)> {
        TextureSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    pub fn try_map<U, E>(&self, mut f: impl FnMut(TextureSlot, &T) -> Result<U, E>) -> Result<TextureSet<U>, E> {
        Ok(TextureSet {
            diffuse: f(TextureSlot::Diffuse, &self.diffuse)?,
            normal: f(TextureSlot::Normal, &self.normal)?,
            specular: f(TextureSlot::Specular, &self.specular)?,
        })
    }
}

/// Asset URL for a slot. `{}` in the pattern is replaced by the slot name.
pub fn asset_url(pattern: &str, slot: TextureSlot) -> String {
    pattern.replace("{}", slot.name())
}
