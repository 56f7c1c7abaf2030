//! Backend feature flags, resource classes, and named integer parameters.

/// Boolean capabilities reported by the backend device.
///
/// These are queried, never enabled or mutated, by the capability layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Reinterpreting an existing texture's memory under another view.
    TextureViews,
    /// Sampling the stencil aspect of a depth-stencil texture.
    StencilTextures,
    /// Disabling depth clipping in the rasterizer.
    DepthClipping,
    /// Blend equations reading two color outputs from the pixel stage.
    DualSourceBlending,
}

/// Per-stage countable resource classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceClass {
    StorageBuffer,
    UniformBuffer,
    SampledTexture,
    StorageTexture,
    Sampler,
}

/// Named integer parameters the backend can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntParam {
    /// Fast on-chip tile storage per pixel lane, in bytes. Only meaningful
    /// when the pixel-local-storage extension is present.
    TileMemoryFastSizeBytes,
    /// Maximum simultaneous color attachments.
    MaxColorAttachments,
}

/// Extension names consulted by the tile-memory queries.
pub mod ext {
    pub const PIXEL_LOCAL_STORAGE: &str = "GL_EXT_shader_pixel_local_storage";
    pub const FRAMEBUFFER_FETCH: &str = "GL_EXT_shader_framebuffer_fetch";
    pub const COLOR_BUFFER_HALF_FLOAT: &str = "GL_EXT_color_buffer_half_float";
}
