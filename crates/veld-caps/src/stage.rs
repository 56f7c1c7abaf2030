//! Shader stage masks and their translation to backend stage identifiers.

use bitflags::bitflags;
use static_assertions::const_assert_eq;

use crate::profile::PlatformProfile;

bitflags! {
    /// Engine-level mask of logical shader stages.
    ///
    /// This is the mask renderer code passes around; it is backend-agnostic
    /// and uses the engine's stage naming (pixel, hull, domain). Use
    /// [`resolve_stages`] to translate it into backend [`StageKind`]s.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShaderStages: u32 {
        const VERTEX = 1 << 0;
        const PIXEL = 1 << 1;
        const GEOMETRY = 1 << 2;
        const COMPUTE = 1 << 3;
        const HULL = 1 << 4;
        const DOMAIN = 1 << 5;
    }
}

/// Backend-specific shader stage identifier.
///
/// Names follow the backend's convention (fragment, tessellation control /
/// evaluation) rather than the engine's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Vertex,
    Fragment,
    Geometry,
    Compute,
    TessControl,
    TessEvaluation,
}

impl StageKind {
    /// Every backend stage identifier.
    pub const ALL: [StageKind; 6] = [
        StageKind::Vertex,
        StageKind::Fragment,
        StageKind::Geometry,
        StageKind::Compute,
        StageKind::TessControl,
        StageKind::TessEvaluation,
    ];
}

/// Canonical order in which mask bits are resolved: vertex, pixel, geometry,
/// compute, domain, hull.
const RESOLVE_ORDER: [(ShaderStages, StageKind); 6] = [
    (ShaderStages::VERTEX, StageKind::Vertex),
    (ShaderStages::PIXEL, StageKind::Fragment),
    (ShaderStages::GEOMETRY, StageKind::Geometry),
    (ShaderStages::COMPUTE, StageKind::Compute),
    (ShaderStages::DOMAIN, StageKind::TessEvaluation),
    (ShaderStages::HULL, StageKind::TessControl),
];

// Every mask bit must have a resolution entry.
const_assert_eq!(ShaderStages::all().bits().count_ones() as usize, RESOLVE_ORDER.len());

/// Translate an engine stage mask into backend stage identifiers.
///
/// Stages are emitted in canonical order regardless of bit positions. Returns
/// `None` when the mask requests a stage class the active profile does not
/// carry: one absent stage disqualifies the whole mask, even if the remaining
/// stages would resolve. Callers treat that as "combination unsupported"
/// rather than skipping the stage, since a query over a stage that cannot
/// exist has no meaningful answer.
///
/// An empty mask resolves to an empty list.
pub fn resolve_stages(mask: ShaderStages, profile: PlatformProfile) -> Option<Vec<StageKind>> {
    let mut stages = Vec::with_capacity(mask.bits().count_ones() as usize);
    for (bit, kind) in RESOLVE_ORDER {
        if !mask.contains(bit) {
            continue;
        }
        if !profile.carries_stage(kind) {
            return None;
        }
        stages.push(kind);
    }
    Some(stages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_empty_mask() {
        let stages = resolve_stages(ShaderStages::empty(), PlatformProfile::desktop());
        assert_eq!(stages, Some(Vec::new()));
    }

    #[test]
    fn test_resolve_canonical_order() {
        // Bit positions put HULL before DOMAIN; resolution must not.
        let mask = ShaderStages::HULL | ShaderStages::DOMAIN | ShaderStages::VERTEX;
        let stages = resolve_stages(mask, PlatformProfile::desktop()).unwrap();
        assert_eq!(
            stages,
            vec![
                StageKind::Vertex,
                StageKind::TessEvaluation,
                StageKind::TessControl,
            ]
        );
    }

    #[test]
    fn test_resolve_full_mask() {
        let stages = resolve_stages(ShaderStages::all(), PlatformProfile::desktop()).unwrap();
        assert_eq!(
            stages,
            vec![
                StageKind::Vertex,
                StageKind::Fragment,
                StageKind::Geometry,
                StageKind::Compute,
                StageKind::TessEvaluation,
                StageKind::TessControl,
            ]
        );
    }

    #[test]
    fn test_absent_stage_disqualifies_whole_mask() {
        let profile = PlatformProfile::desktop().with_geometry_shaders(false);
        let mask = ShaderStages::VERTEX | ShaderStages::GEOMETRY;
        assert_eq!(resolve_stages(mask, profile), None);
    }

    #[test]
    fn test_tessellation_gates_hull_and_domain_together() {
        let profile = PlatformProfile::desktop().with_tessellation_shaders(false);
        assert_eq!(resolve_stages(ShaderStages::HULL, profile), None);
        assert_eq!(resolve_stages(ShaderStages::DOMAIN, profile), None);
    }

    #[test]
    fn test_vertex_and_pixel_always_carried() {
        let profile = PlatformProfile::tile();
        let stages =
            resolve_stages(ShaderStages::VERTEX | ShaderStages::PIXEL, profile).unwrap();
        assert_eq!(stages, vec![StageKind::Vertex, StageKind::Fragment]);
    }
}
