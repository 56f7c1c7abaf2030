//! [`DeviceCaps`] over a wgpu adapter.
//!
//! The adapter's features, downlevel flags, and limits are snapshotted at
//! construction; wgpu reports them once and they do not change for the
//! lifetime of the adapter. wgpu has no GL-style extension strings and no
//! geometry or tessellation stages, so those queries answer conservatively.

use crate::device::{DeviceCaps, DeviceVersion};
use crate::feature::{Feature, IntParam, ResourceClass};
use crate::profile::PlatformProfile;
use crate::stage::StageKind;

pub struct WgpuDeviceCaps {
    features: wgpu::Features,
    downlevel: wgpu::DownlevelCapabilities,
    limits: wgpu::Limits,
    backend: wgpu::Backend,
}

impl WgpuDeviceCaps {
    pub fn from_adapter(adapter: &wgpu::Adapter) -> Self {
        Self {
            features: adapter.features(),
            downlevel: adapter.get_downlevel_capabilities(),
            limits: adapter.limits(),
            backend: adapter.get_info().backend,
        }
    }

    /// The platform profile matching what wgpu can express: no tile-memory
    /// path, no geometry or tessellation stages.
    pub const fn profile() -> PlatformProfile {
        PlatformProfile::desktop()
            .with_geometry_shaders(false)
            .with_tessellation_shaders(false)
    }
}

/// Baseline API version wgpu requires for a backend. The adapter does not
/// report the exact driver API version, so this is the floor the renderer can
/// rely on.
fn baseline_version(backend: wgpu::Backend) -> DeviceVersion {
    match backend {
        wgpu::Backend::Vulkan => DeviceVersion::new(1, 0),
        wgpu::Backend::Metal => DeviceVersion::new(2, 0),
        wgpu::Backend::Dx12 => DeviceVersion::new(12, 0),
        wgpu::Backend::Gl => DeviceVersion::new(3, 3),
        wgpu::Backend::BrowserWebGpu => DeviceVersion::new(1, 0),
        _ => DeviceVersion::new(0, 0),
    }
}

impl DeviceCaps for WgpuDeviceCaps {
    fn has_feature(&self, feature: Feature) -> bool {
        match feature {
            Feature::TextureViews => self
                .downlevel
                .flags
                .contains(wgpu::DownlevelFlags::VIEW_FORMATS),
            // Sampling the stencil aspect is core wgpu on every backend.
            Feature::StencilTextures => true,
            Feature::DepthClipping => self.features.contains(wgpu::Features::DEPTH_CLIP_CONTROL),
            Feature::DualSourceBlending => {
                self.features.contains(wgpu::Features::DUAL_SOURCE_BLENDING)
            }
        }
    }

    fn stage_resource_limit(&self, stage: StageKind, class: ResourceClass) -> u32 {
        match stage {
            // Stages wgpu does not have.
            StageKind::Geometry | StageKind::TessControl | StageKind::TessEvaluation => return 0,
            StageKind::Vertex
                if class == ResourceClass::StorageBuffer
                    && !self
                        .downlevel
                        .flags
                        .contains(wgpu::DownlevelFlags::VERTEX_STORAGE) =>
            {
                return 0;
            }
            StageKind::Fragment
                if class == ResourceClass::StorageBuffer
                    && !self
                        .downlevel
                        .flags
                        .contains(wgpu::DownlevelFlags::FRAGMENT_WRITABLE_STORAGE) =>
            {
                return 0;
            }
            _ => {}
        }

        // wgpu limits are uniform across the stages it carries.
        match class {
            ResourceClass::StorageBuffer => self.limits.max_storage_buffers_per_shader_stage,
            ResourceClass::UniformBuffer => self.limits.max_uniform_buffers_per_shader_stage,
            ResourceClass::SampledTexture => self.limits.max_sampled_textures_per_shader_stage,
            ResourceClass::StorageTexture => self.limits.max_storage_textures_per_shader_stage,
            ResourceClass::Sampler => self.limits.max_samplers_per_shader_stage,
        }
    }

    fn has_extension(&self, _name: &str) -> bool {
        // wgpu exposes optional functionality as features, not extension
        // strings.
        false
    }

    fn integer_parameter(&self, param: IntParam) -> u32 {
        match param {
            IntParam::TileMemoryFastSizeBytes => 0,
            IntParam::MaxColorAttachments => self.limits.max_color_attachments,
        }
    }

    fn version(&self) -> DeviceVersion {
        baseline_version(self.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps_with(flags: wgpu::DownlevelFlags) -> WgpuDeviceCaps {
        WgpuDeviceCaps {
            features: wgpu::Features::empty(),
            downlevel: wgpu::DownlevelCapabilities {
                flags,
                ..Default::default()
            },
            limits: wgpu::Limits::default(),
            backend: wgpu::Backend::Vulkan,
        }
    }

    #[test]
    fn test_geometry_and_tessellation_limits_are_zero() {
        let caps = caps_with(wgpu::DownlevelFlags::all());
        for stage in [
            StageKind::Geometry,
            StageKind::TessControl,
            StageKind::TessEvaluation,
        ] {
            assert_eq!(caps.stage_resource_limit(stage, ResourceClass::StorageBuffer), 0);
            assert_eq!(caps.stage_resource_limit(stage, ResourceClass::UniformBuffer), 0);
        }
    }

    #[test]
    fn test_vertex_storage_gated_on_downlevel_flag() {
        let without = caps_with(wgpu::DownlevelFlags::empty());
        assert_eq!(
            without.stage_resource_limit(StageKind::Vertex, ResourceClass::StorageBuffer),
            0
        );

        let with = caps_with(wgpu::DownlevelFlags::all());
        assert_eq!(
            with.stage_resource_limit(StageKind::Vertex, ResourceClass::StorageBuffer),
            wgpu::Limits::default().max_storage_buffers_per_shader_stage
        );
    }

    #[test]
    fn test_uniform_buffers_unaffected_by_storage_flags() {
        let caps = caps_with(wgpu::DownlevelFlags::empty());
        assert_eq!(
            caps.stage_resource_limit(StageKind::Vertex, ResourceClass::UniformBuffer),
            wgpu::Limits::default().max_uniform_buffers_per_shader_stage
        );
    }

    #[test]
    fn test_extension_strings_never_present() {
        let caps = caps_with(wgpu::DownlevelFlags::all());
        assert!(!caps.has_extension("GL_EXT_shader_pixel_local_storage"));
        assert!(!caps.has_extension(""));
    }

    #[test]
    fn test_baseline_versions() {
        assert_eq!(baseline_version(wgpu::Backend::Gl), DeviceVersion::new(3, 3));
        assert_eq!(
            baseline_version(wgpu::Backend::Dx12),
            DeviceVersion::new(12, 0)
        );
    }

    #[test]
    fn test_profile_has_no_tile_or_geometry_path() {
        let profile = WgpuDeviceCaps::profile();
        assert!(!profile.tile_memory);
        assert!(!profile.geometry_shaders);
        assert!(!profile.tessellation_shaders);
        assert!(profile.compute_shaders);
    }
}
