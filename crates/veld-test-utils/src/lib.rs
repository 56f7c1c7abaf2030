//! Test utilities for Veld crates.
//!
//! The main component is [`MockDeviceCaps`], a configurable in-memory
//! implementation of the `veld_caps::DeviceCaps` backend interface (requires
//! the `mock` feature). It records lookups behind a mutex so `&self` query
//! methods can be asserted on in tests.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use veld_caps::{Feature, ResourceClass, StageKind};
//! use veld_test_utils::MockDeviceCaps;
//!
//! let device = MockDeviceCaps::new()
//!     .with_feature(Feature::TextureViews)
//!     .with_stage_limit(StageKind::Vertex, ResourceClass::StorageBuffer, 4);
//!
//! assert_eq!(device.count_limit_queries(), 0);
//! # }
//! ```

#[cfg(feature = "mock")]
pub mod mock_device;

#[cfg(feature = "mock")]
pub use mock_device::*;
