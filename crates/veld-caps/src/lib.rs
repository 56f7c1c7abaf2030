//! Capability queries for the Veld renderer.
//!
//! This crate sits between the renderer's feature-flag API and the active
//! graphics device. Each query translates an engine-level question ("can this
//! stage combination bind structured buffers?", "is a 256-bit tile-memory
//! pass viable here?") into backend state inspection: feature lookups,
//! extension-string checks, and per-stage resource-limit tables, combined
//! with the active [`PlatformProfile`].
//!
//! # Example
//!
//! ```ignore
//! use veld_caps::{RenderCaps, ShaderStages, WgpuDeviceCaps};
//!
//! let device = WgpuDeviceCaps::from_adapter(&adapter);
//! let caps = RenderCaps::new(&device, WgpuDeviceCaps::profile());
//!
//! if caps.supports_structured_buffers(ShaderStages::VERTEX | ShaderStages::PIXEL) {
//!     // take the GPU-driven path
//! }
//! ```
//!
//! Queries are pure and side-effect free; absence of a capability is an
//! ordinary `false` (or a documented fallback value), never an error.

pub mod caps;
pub mod device;
pub mod feature;
pub mod profile;
pub mod stage;
pub mod wgpu_device;

// Re-export main types at crate root
pub use caps::*;
pub use device::*;
pub use feature::*;
pub use profile::*;
pub use stage::*;
pub use wgpu_device::*;
