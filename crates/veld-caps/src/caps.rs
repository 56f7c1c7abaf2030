//! The capability facade: one place for the renderer to ask what the active
//! device can do.
//!
//! Every query is pure and idempotent. Absence of a capability is an ordinary
//! `false` (or a documented fallback value), never an error: renderer code
//! branches on these answers to pick an alternate path, so they must be
//! silently representable. The single fatal condition is querying before a
//! device exists, which is an initialization ordering bug in the caller.

use tracing::debug;

use crate::device::{DeviceCaps, DeviceVersion};
use crate::feature::{ext, Feature, IntParam, ResourceClass};
use crate::profile::PlatformProfile;
use crate::stage::{resolve_stages, ShaderStages};

/// Tile memory guaranteed by the non-tiled fallback path, in bits per pixel.
pub const FALLBACK_TILE_MEMORY_BPP: u32 = 128;

/// Capability queries over a borrowed backend device.
///
/// Construction is cheap; the facade holds no state beyond the device borrow
/// and the platform profile, and callers may cache answers themselves for the
/// lifetime of the device.
pub struct RenderCaps<'a, D: DeviceCaps> {
    device: &'a D,
    profile: PlatformProfile,
}

impl<'a, D: DeviceCaps> RenderCaps<'a, D> {
    pub fn new(device: &'a D, profile: PlatformProfile) -> Self {
        Self { device, profile }
    }

    /// Like [`RenderCaps::new`], but for callers holding the renderer's
    /// optional active device.
    ///
    /// # Panics
    ///
    /// Panics when `device` is `None`. Querying capabilities before the
    /// renderer owns a device is an initialization ordering bug; no query
    /// can be answered meaningfully, so this aborts loudly instead of
    /// degrading.
    pub fn from_active(device: Option<&'a D>, profile: PlatformProfile) -> Self {
        let device =
            device.expect("capability query before renderer initialization: no active device");
        Self::new(device, profile)
    }

    pub fn profile(&self) -> PlatformProfile {
        self.profile
    }

    pub fn supports_texture_views(&self) -> bool {
        self.device.has_feature(Feature::TextureViews)
    }

    pub fn supports_stencil_textures(&self) -> bool {
        self.device.has_feature(Feature::StencilTextures)
    }

    pub fn supports_depth_clipping(&self) -> bool {
        self.device.has_feature(Feature::DepthClipping)
    }

    pub fn supports_dual_source_blending(&self) -> bool {
        self.device.has_feature(Feature::DualSourceBlending)
    }

    /// Whether every stage in `stages` can bind structured (storage) buffers.
    ///
    /// A requested stage class the profile does not carry disqualifies the
    /// whole mask, without consulting the limit table. Otherwise each
    /// resolved stage's storage-buffer limit must be nonzero. An empty mask
    /// is vacuously supported.
    pub fn supports_structured_buffers(&self, stages: ShaderStages) -> bool {
        let Some(resolved) = resolve_stages(stages, self.profile) else {
            return false;
        };
        resolved.into_iter().all(|stage| {
            self.device
                .stage_resource_limit(stage, ResourceClass::StorageBuffer)
                > 0
        })
    }

    pub fn device_version(&self) -> DeviceVersion {
        self.device.version()
    }

    /// Fast tile memory available per pixel, in bits.
    ///
    /// On the tile-memory path with pixel local storage present, this is the
    /// driver-reported fast size in bytes per pixel lane times 8. Everywhere
    /// else it is the guaranteed [`FALLBACK_TILE_MEMORY_BPP`] minimum.
    pub fn available_tile_memory_bpp(&self) -> u32 {
        if !self.profile.tile_memory {
            return FALLBACK_TILE_MEMORY_BPP;
        }
        if self.device.has_extension(ext::PIXEL_LOCAL_STORAGE) {
            self.device
                .integer_parameter(IntParam::TileMemoryFastSizeBytes)
                * 8
        } else {
            debug!(
                "Pixel local storage unavailable, assuming {} bits of tile memory per pixel",
                FALLBACK_TILE_MEMORY_BPP
            );
            FALLBACK_TILE_MEMORY_BPP
        }
    }

    /// Whether a 128-bit-per-pixel tile-memory pass is viable.
    pub fn supports_128bpp_tile_path(&self) -> bool {
        self.tile_path_supports(128)
    }

    /// Whether a 256-bit-per-pixel tile-memory pass is viable.
    pub fn supports_256bpp_tile_path(&self) -> bool {
        self.tile_path_supports(256)
    }

    fn tile_path_supports(&self, min_bpp: u32) -> bool {
        (self.supports_framebuffer_fetch() || self.supports_pixel_local_storage())
            && self.available_tile_memory_bpp() >= min_bpp
    }

    pub fn supports_half_float_rendering(&self) -> bool {
        self.profile.tile_memory && self.device.has_extension(ext::COLOR_BUFFER_HALF_FLOAT)
    }

    /// Always `false` off the tile-memory path; the concept does not exist
    /// there.
    pub fn supports_pixel_local_storage(&self) -> bool {
        self.profile.tile_memory && self.device.has_extension(ext::PIXEL_LOCAL_STORAGE)
    }

    /// Always `false` off the tile-memory path; the concept does not exist
    /// there.
    pub fn supports_framebuffer_fetch(&self) -> bool {
        self.profile.tile_memory && self.device.has_extension(ext::FRAMEBUFFER_FETCH)
    }

    /// Whether `count` simultaneous render targets are usable on the tile
    /// path.
    ///
    /// Conservatively hardwired to `false`: probing
    /// [`IntParam::MaxColorAttachments`] here has not been validated on
    /// tile-memory hardware, so callers must take the fewer-target fallback
    /// until it is.
    pub fn supports_render_targets(&self, count: u32) -> bool {
        // TODO: compare against IntParam::MaxColorAttachments once validated
        // on a tile-memory device.
        let _ = count;
        false
    }
}
