/// Culling box — the world-space bounding volume the culler classifies.
///
/// A CullingBox pairs a center/half-extents AABB with the visibility
/// flag the culler writes and an opaque key the owner uses to map the
/// result back onto its own object. The culler never reads the key.

use glam::{Mat4, Vec3};
use slotmap::new_key_type;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Default opaque key for a CullingBox.
    ///
    /// Owners that keep their renderables in a slotmap can use this key
    /// type directly; any other Copy token (an index, an id) works as
    /// the key parameter just as well.
    pub struct BoxKey;
}

// ===== CULLING BOX =====

/// World-space axis-aligned box submitted for visibility classification.
///
/// `center` and `extents` are assumed stable for the duration of one
/// culling pass but may change freely between ticks — the culler re-reads
/// them fresh each call. `visible` is the only field the culler writes.
/// `extents` are non-negative half-widths per axis (caller invariant,
/// not checked at runtime).
///
/// Storage and lifetime are caller-owned; the culler borrows a mutable
/// slice of boxes for the duration of one pass and holds nothing after.
#[derive(Debug, Clone, Copy)]
pub struct CullingBox<K = BoxKey> {
    /// World-space center
    pub center: Vec3,
    /// Non-negative half-widths per axis
    pub extents: Vec3,
    /// Result of the most recent culling pass
    pub visible: bool,
    /// Opaque owner token — never dereferenced by the culler
    pub key: K,
}

impl<K> CullingBox<K> {
    /// New box, visible until the first culling pass says otherwise.
    pub fn new(center: Vec3, extents: Vec3, key: K) -> Self {
        Self {
            center,
            extents,
            visible: true,
            key,
        }
    }

    /// Build from min/max corners.
    pub fn from_min_max(min: Vec3, max: Vec3, key: K) -> Self {
        Self::new((min + max) * 0.5, (max - min) * 0.5, key)
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        self.center - self.extents
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        self.center + self.extents
    }

    /// The eight corner points.
    pub fn corners(&self) -> [Vec3; 8] {
        let (min, max) = (self.min(), self.max());
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
        ]
    }
}

impl<K: Copy> CullingBox<K> {
    /// Transform this box by a matrix, returning the tight enclosing box.
    ///
    /// Uses the Arvo method: each matrix axis is projected onto the
    /// extents for an exact result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> CullingBox<K> {
        let center = matrix.transform_point3(self.center);
        let mut extents = Vec3::ZERO;
        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            extents += axis.abs() * self.extents[i];
        }
        CullingBox {
            center,
            extents,
            visible: self.visible,
            key: self.key,
        }
    }
}

#[cfg(test)]
#[path = "culling_box_tests.rs"]
mod tests;
