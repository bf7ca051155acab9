/// Frustum — eight corner points and six clipping planes for visibility
/// culling.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0
///   for all planes
///
/// The frustum is rebuilt from fresh camera state once per tick. The
/// derived FrustumSnapshot carries the per-plane caches shared by every
/// box tested that tick.

use glam::{Mat4, Quat, Vec3, Vec4};
use super::camera::Camera;

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Frustum corner indices
pub const CORNER_FAR_BOTTOM_LEFT: usize = 0;
pub const CORNER_FAR_TOP_LEFT: usize = 1;
pub const CORNER_FAR_TOP_RIGHT: usize = 2;
pub const CORNER_FAR_BOTTOM_RIGHT: usize = 3;
pub const CORNER_NEAR_BOTTOM_LEFT: usize = 4;
pub const CORNER_NEAR_TOP_LEFT: usize = 5;
pub const CORNER_NEAR_TOP_RIGHT: usize = 6;
pub const CORNER_NEAR_BOTTOM_RIGHT: usize = 7;

// ===== PLANE CONSTRUCTION HELPERS =====

/// Plane through three points, normal = normalize((b - a) × (c - a)).
///
/// The winding of the points decides which side the normal faces.
fn plane_from_points(a: Vec3, b: Vec3, c: Vec3) -> Vec4 {
    let normal = (b - a).cross(c - a).normalize();
    normal.extend(-normal.dot(a))
}

/// Plane with the given unit normal passing through `point`.
fn plane_from_normal_point(normal: Vec3, point: Vec3) -> Vec4 {
    normal.extend(-normal.dot(point))
}

// ===== FRUSTUM =====

/// View frustum: eight world-space corners plus six inward-facing planes.
///
/// Plane order: left, right, bottom, top, near, far.
/// Corner order: the far face first, then the near face, each as
/// bottom-left, top-left, top-right, bottom-right.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// World-space corner points (see CORNER_* indices)
    pub corners: [Vec3; 8],
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Compute the eight world-space corners of a view frustum.
    ///
    /// `to_right`/`to_top` are the view-cone half-extents at unit depth
    /// along the local forward axis. Each corner ray is scaled by its own
    /// unnormalized magnitude times the clip distance, which lands the
    /// corners exactly on the near/far planes rather than on a sphere of
    /// that radius. The scaled rays are then rotated by `orientation` and
    /// translated by `position`.
    ///
    /// Degenerate intrinsics (fov near 0 or 180, near == far) produce
    /// degenerate geometry; see Camera::validate().
    pub fn compute_corners(
        position: Vec3,
        orientation: Quat,
        fov_y_deg: f32,
        near: f32,
        far: f32,
        aspect: f32,
    ) -> [Vec3; 8] {
        let half_tan = (fov_y_deg.to_radians() * 0.5).tan();
        let to_right = Vec3::X * half_tan * aspect;
        let to_top = Vec3::Y * half_tan;

        // Local corner rays at unit depth, far-face corner order
        let rays = [
            Vec3::Z - to_right - to_top, // bottom-left
            Vec3::Z - to_right + to_top, // top-left
            Vec3::Z + to_right + to_top, // top-right
            Vec3::Z + to_right - to_top, // bottom-right
        ];

        let mut corners = [Vec3::ZERO; 8];
        for (i, ray) in rays.iter().enumerate() {
            let direction = ray.normalize();
            let magnitude = ray.length();
            corners[i] = position + orientation * (direction * (magnitude * far));
            corners[i + 4] = position + orientation * (direction * (magnitude * near));
        }
        corners
    }

    /// Build the six planes from the corners plus the camera forward axis.
    ///
    /// Side planes come from corner triples whose winding makes every
    /// normal face the frustum interior; near and far planes are built
    /// directly from the forward axis and the clip distances.
    pub fn from_corners(
        corners: [Vec3; 8],
        forward: Vec3,
        position: Vec3,
        near: f32,
        far: f32,
    ) -> Self {
        let planes = [
            plane_from_points(corners[4], corners[1], corners[0]), // left
            plane_from_points(corners[6], corners[3], corners[2]), // right
            plane_from_points(corners[7], corners[0], corners[3]), // bottom
            plane_from_points(corners[5], corners[2], corners[1]), // top
            plane_from_normal_point(forward, position + forward * near), // near
            plane_from_normal_point(-forward, position + forward * far), // far
        ];
        Self { corners, planes }
    }

    /// Build the frustum for one tick from current camera state.
    pub fn from_camera(camera: &Camera) -> Self {
        debug_assert!(
            camera.validate().is_ok(),
            "degenerate camera intrinsics: {:?}",
            camera
        );
        let corners = Self::compute_corners(
            camera.position(),
            camera.orientation(),
            camera.fov_y_deg(),
            camera.near(),
            camera.far(),
            camera.aspect(),
        );
        Self::from_corners(
            corners,
            camera.forward(),
            camera.position(),
            camera.near(),
            camera.far(),
        )
    }

    /// Test if a point lies inside the frustum (on-plane counts as inside).
    pub fn contains(&self, point: Vec3) -> bool {
        let p = point.extend(1.0);
        self.planes.iter().all(|plane| plane.dot(p) >= 0.0)
    }

    /// Derive the per-tick plane cache consumed by the batched box test.
    pub fn snapshot(&self) -> FrustumSnapshot {
        FrustumSnapshot::new(&self.planes)
    }
}

// ===== FRUSTUM SNAPSHOT =====

/// Per-tick plane cache for batched AABB tests.
///
/// Carries each plane (inward normal + distance) alongside its
/// component-wise absolute normal, so the per-box projected radius is a
/// single dot product instead of three abs() calls per plane per box.
/// Built once per tick, then shared read-only by every box tested that
/// tick. An immutable value, safe to hand to parallel consumers.
///
/// Plain-old-data (`bytemuck::Pod`): the layout can be uploaded to a GPU
/// buffer unchanged.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrustumSnapshot {
    /// planes[i] = (normal, distance), same order as Frustum::planes
    pub planes: [Vec4; 6],
    /// abs_normals[i] = component-wise |normal|, w = 0
    pub abs_normals: [Vec4; 6],
}

impl FrustumSnapshot {
    /// Cache the planes plus their absolute normals.
    pub fn new(planes: &[Vec4; 6]) -> Self {
        let mut abs_normals = [Vec4::ZERO; 6];
        for (abs, plane) in abs_normals.iter_mut().zip(planes) {
            *abs = Vec4::new(plane.x.abs(), plane.y.abs(), plane.z.abs(), 0.0);
        }
        Self {
            planes: *planes,
            abs_normals,
        }
    }

    /// Extract a plane cache from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method, for callers that drive the
    /// camera with matrices instead of pose + intrinsics. Works for both
    /// perspective and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        // Gribb & Hartmann: combine rows of the VP matrix
        let mut planes = [
            vp.row(3) + vp.row(0), // left
            vp.row(3) - vp.row(0), // right
            vp.row(3) + vp.row(1), // bottom
            vp.row(3) - vp.row(1), // top
            vp.row(3) + vp.row(2), // near
            vp.row(3) - vp.row(2), // far
        ];

        // Normalize each plane
        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self::new(&planes)
    }

    /// Conservative box/frustum overlap test.
    ///
    /// Per plane: project the half-extents onto the absolute normal (the
    /// box's support radius) and add the center's signed distance. The
    /// box is rejected only when some plane provably separates it from
    /// the frustum; a box just outside a corner region formed by two
    /// planes may still test visible. Never reports an intersecting box
    /// invisible. A box touching a plane exactly counts as visible.
    ///
    /// All six planes are evaluated unconditionally: the inner loop
    /// stays branch-free and vectorizable. Early exit on the first
    /// separating plane yields the same boolean.
    pub fn test_box(&self, center: Vec3, extents: Vec3) -> bool {
        let center = center.extend(1.0);
        let extents = extents.extend(0.0);
        let mut outside = false;
        for i in 0..6 {
            let distance = self.planes[i].dot(center);
            let radius = self.abs_normals[i].dot(extents);
            outside |= radius + distance < 0.0;
        }
        !outside
    }

    /// Test if a point lies inside the frustum (on-plane counts as inside).
    pub fn contains(&self, point: Vec3) -> bool {
        let p = point.extend(1.0);
        self.planes.iter().all(|plane| plane.dot(p) >= 0.0)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
