//! The narrow interface the capability layer requires from a backend device.

use crate::feature::{Feature, IntParam, ResourceClass};
use crate::stage::StageKind;

/// Graphics API version of the active device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceVersion {
    pub major: u16,
    pub minor: u16,
}

impl DeviceVersion {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Single-integer encoding used by renderer version checks. Orders the
    /// same way as the `(major, minor)` pair.
    pub const fn to_u32(self) -> u32 {
        (self.major as u32) << 16 | self.minor as u32
    }
}

/// Backend device introspection, borrowed by [`RenderCaps`].
///
/// Implementations wrap a live device object and answer from its current
/// state; the capability layer never creates, destroys, or mutates the
/// device. All methods must be cheap, in-process lookups.
///
/// [`RenderCaps`]: crate::caps::RenderCaps
pub trait DeviceCaps {
    /// Whether the device reports `feature` as supported.
    fn has_feature(&self, feature: Feature) -> bool;

    /// Maximum number of bindable resources of `class` for `stage`.
    ///
    /// Zero means the stage has no support for that resource class at all.
    fn stage_resource_limit(&self, stage: StageKind, class: ResourceClass) -> u32;

    /// Whether the driver exposes the extension with this exact name.
    fn has_extension(&self, name: &str) -> bool;

    /// Value of a named integer parameter.
    fn integer_parameter(&self, param: IntParam) -> u32;

    /// API version of the device.
    fn version(&self) -> DeviceVersion;
}
