//! Mock device backend for capability tests.
//!
//! Configuration is builder-style and immutable once built; the mutex only
//! guards the lookup log, letting `&self` trait methods record calls.

use std::collections::HashMap;

use parking_lot::Mutex;
use veld_caps::{DeviceCaps, DeviceVersion, Feature, IntParam, ResourceClass, StageKind};

/// In-memory [`DeviceCaps`] implementation with scripted answers.
///
/// Unset features and extensions are absent, unset limits and parameters are
/// zero, matching a device that supports nothing.
pub struct MockDeviceCaps {
    features: Vec<Feature>,
    extensions: Vec<String>,
    limits: HashMap<(StageKind, ResourceClass), u32>,
    params: HashMap<IntParam, u32>,
    version: DeviceVersion,
    limit_queries: Mutex<Vec<(StageKind, ResourceClass)>>,
}

impl MockDeviceCaps {
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
            extensions: Vec::new(),
            limits: HashMap::new(),
            params: HashMap::new(),
            version: DeviceVersion::new(0, 0),
            limit_queries: Mutex::new(Vec::new()),
        }
    }

    /// Mark a feature as supported.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Expose an extension string.
    pub fn with_extension(mut self, name: &str) -> Self {
        self.extensions.push(name.to_owned());
        self
    }

    /// Set the resource limit for one stage.
    pub fn with_stage_limit(mut self, stage: StageKind, class: ResourceClass, max: u32) -> Self {
        self.limits.insert((stage, class), max);
        self
    }

    /// Set the same resource limit for every stage.
    pub fn with_uniform_stage_limit(mut self, class: ResourceClass, max: u32) -> Self {
        for stage in StageKind::ALL {
            self.limits.insert((stage, class), max);
        }
        self
    }

    pub fn with_integer_parameter(mut self, param: IntParam, value: u32) -> Self {
        self.params.insert(param, value);
        self
    }

    pub fn with_version(mut self, version: DeviceVersion) -> Self {
        self.version = version;
        self
    }

    /// Number of limit-table lookups performed so far.
    pub fn count_limit_queries(&self) -> usize {
        self.limit_queries.lock().len()
    }

    /// The limit-table lookups performed so far, in order.
    pub fn limit_queries(&self) -> Vec<(StageKind, ResourceClass)> {
        self.limit_queries.lock().clone()
    }
}

impl Default for MockDeviceCaps {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceCaps for MockDeviceCaps {
    fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    fn stage_resource_limit(&self, stage: StageKind, class: ResourceClass) -> u32 {
        self.limit_queries.lock().push((stage, class));
        self.limits.get(&(stage, class)).copied().unwrap_or(0)
    }

    fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| ext == name)
    }

    fn integer_parameter(&self, param: IntParam) -> u32 {
        self.params.get(&param).copied().unwrap_or(0)
    }

    fn version(&self) -> DeviceVersion {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_device_supports_nothing() {
        let device = MockDeviceCaps::new();
        assert!(!device.has_feature(Feature::TextureViews));
        assert!(!device.has_extension("GL_EXT_shader_framebuffer_fetch"));
        assert_eq!(
            device.stage_resource_limit(StageKind::Vertex, ResourceClass::StorageBuffer),
            0
        );
        assert_eq!(device.integer_parameter(IntParam::MaxColorAttachments), 0);
        assert_eq!(device.version(), DeviceVersion::new(0, 0));
    }

    #[test]
    fn test_limit_lookups_are_recorded_in_order() {
        let device = MockDeviceCaps::new()
            .with_stage_limit(StageKind::Vertex, ResourceClass::StorageBuffer, 4);

        device.stage_resource_limit(StageKind::Vertex, ResourceClass::StorageBuffer);
        device.stage_resource_limit(StageKind::Fragment, ResourceClass::Sampler);

        assert_eq!(device.count_limit_queries(), 2);
        assert_eq!(
            device.limit_queries(),
            vec![
                (StageKind::Vertex, ResourceClass::StorageBuffer),
                (StageKind::Fragment, ResourceClass::Sampler),
            ]
        );
    }

    #[test]
    fn test_uniform_stage_limit_covers_every_stage() {
        let device = MockDeviceCaps::new().with_uniform_stage_limit(ResourceClass::StorageBuffer, 8);
        for stage in StageKind::ALL {
            assert_eq!(device.stage_resource_limit(stage, ResourceClass::StorageBuffer), 8);
        }
    }

    #[test]
    fn test_extension_lookup_is_exact_match() {
        let device = MockDeviceCaps::new().with_extension("GL_EXT_shader_pixel_local_storage");
        assert!(device.has_extension("GL_EXT_shader_pixel_local_storage"));
        assert!(!device.has_extension("GL_EXT_shader_pixel_local_storage2"));
        assert!(!device.has_extension("GL_EXT_shader"));
    }
}
