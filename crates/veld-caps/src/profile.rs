//! Platform profile: which stage classes and rendering paths exist on the
//! current target.
//!
//! The profile stands in for build-time configuration. It is selected once at
//! startup (typically from the backend the renderer initialized) and passed
//! to [`RenderCaps`]; queries combine it with runtime device state.
//!
//! [`RenderCaps`]: crate::caps::RenderCaps

use crate::stage::StageKind;

/// Which optional stage classes and rendering paths the target carries.
///
/// Vertex and pixel stages always exist and are not represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Tile-memory (mobile/tile-based GPU) rendering path active. Off this
    /// path the tile-memory query set collapses to fixed `false` stubs.
    pub tile_memory: bool,
    pub geometry_shaders: bool,
    pub compute_shaders: bool,
    /// Gates hull and domain stages together.
    pub tessellation_shaders: bool,
}

impl PlatformProfile {
    /// Desktop-class profile: every stage class, no tile-memory path.
    pub const fn desktop() -> Self {
        Self {
            tile_memory: false,
            geometry_shaders: true,
            compute_shaders: true,
            tessellation_shaders: true,
        }
    }

    /// Tile-memory (mobile-class) profile: compute but no geometry or
    /// tessellation stages.
    pub const fn tile() -> Self {
        Self {
            tile_memory: true,
            geometry_shaders: false,
            compute_shaders: true,
            tessellation_shaders: false,
        }
    }

    pub const fn with_tile_memory(mut self, enabled: bool) -> Self {
        self.tile_memory = enabled;
        self
    }

    pub const fn with_geometry_shaders(mut self, enabled: bool) -> Self {
        self.geometry_shaders = enabled;
        self
    }

    pub const fn with_compute_shaders(mut self, enabled: bool) -> Self {
        self.compute_shaders = enabled;
        self
    }

    pub const fn with_tessellation_shaders(mut self, enabled: bool) -> Self {
        self.tessellation_shaders = enabled;
        self
    }

    /// Whether this profile carries the given backend stage at all.
    pub const fn carries_stage(&self, stage: StageKind) -> bool {
        match stage {
            StageKind::Vertex | StageKind::Fragment => true,
            StageKind::Geometry => self.geometry_shaders,
            StageKind::Compute => self.compute_shaders,
            StageKind::TessControl | StageKind::TessEvaluation => self.tessellation_shaders,
        }
    }
}
