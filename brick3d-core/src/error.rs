/// Errors raised while setting up GPU resources
use thiserror::Error;

/// Shader stage reported in compile errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Fatal initialization failures. Nothing in the frame loop returns these.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A GPU extension the renderer cannot work without is absent
    #[error("required extension {0} is not supported")]
    MissingExtension(&'static str),

    #[error("failed to compile {stage} shader of program '{program}': {log}")]
    ShaderCompile {
        program: &'static str,
        stage: ShaderStage,
        log: String,
    },

    #[error("failed to link program '{program}': {log}")]
    ProgramLink { program: &'static str, log: String },

    /// The context refused to hand out a resource handle
    #[error("failed to create {0}")]
    ResourceCreation(&'static str),

    #[error("texture upload failed: {0}")]
    Texture(String),

    /// Index buffers are 16 bit
    #[error("mesh has {vertices} vertices, more than 16-bit indices can address")]
    MeshTooLarge { vertices: usize },
}

pub type Result<T> = std::result::Result<T, RenderError>;
