/// Camera — passive pose + intrinsics container.
///
/// The Camera computes nothing per tick. The caller (game loop, editor)
/// drives position and orientation; the culling side reads the fields
/// fresh each time it rebuilds the frustum.
///
/// The library does NOT store or manage cameras. They are tools provided
/// by the library, owned and driven by the caller.

use glam::{Quat, Vec3};
use crate::error::{Error, Result};

/// Perspective camera pose + intrinsics. A passive data container.
///
/// Camera basis: `right = orientation * X`, `up = orientation * Y`,
/// `forward = orientation * Z`. An identity orientation looks down `+Z`.
///
/// Invariants (caller responsibility, not checked at runtime):
/// `0 < near < far`, `0 < fov_y_deg < 180`, `aspect > 0`. Violations
/// produce degenerate frustum geometry, not a runtime error; `validate()`
/// is available as an opt-in cold-path check.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec3,
    orientation: Quat,
    fov_y_deg: f32,
    near: f32,
    far: f32,
    aspect: f32,
}

impl Camera {
    /// Create a new camera with the given pose and intrinsics.
    ///
    /// `fov_y_deg` is the vertical field of view in degrees, `aspect`
    /// is width / height.
    pub fn new(
        position: Vec3,
        orientation: Quat,
        fov_y_deg: f32,
        near: f32,
        far: f32,
        aspect: f32,
    ) -> Self {
        Self {
            position,
            orientation,
            fov_y_deg,
            near,
            far,
            aspect,
        }
    }

    // ===== GETTERS =====

    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World-space orientation.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Vertical field of view in degrees.
    pub fn fov_y_deg(&self) -> f32 {
        self.fov_y_deg
    }

    /// Near clip distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip distance.
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Camera-space right axis in world space.
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Camera-space up axis in world space.
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// View direction in world space.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    // ===== SETTERS — store, compute nothing =====

    /// Set the world-space position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the world-space orientation.
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    /// Set the vertical field of view in degrees.
    pub fn set_fov_y_deg(&mut self, fov_y_deg: f32) {
        self.fov_y_deg = fov_y_deg;
    }

    /// Set the near clip distance.
    pub fn set_near(&mut self, near: f32) {
        self.near = near;
    }

    /// Set the far clip distance.
    pub fn set_far(&mut self, far: f32) {
        self.far = far;
    }

    /// Set the aspect ratio (width / height).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    // ===== VALIDATION =====

    /// Opt-in precondition check for the intrinsics.
    ///
    /// The frustum builder itself never validates (the per-tick path
    /// stays branch-free); call this at setup time or behind a debug
    /// flag. NaN values fail every check.
    pub fn validate(&self) -> Result<()> {
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(Error::DegenerateCamera(format!(
                "near/far out of order: near={}, far={}",
                self.near, self.far
            )));
        }
        if !(self.fov_y_deg > 0.0 && self.fov_y_deg < 180.0) {
            return Err(Error::DegenerateCamera(format!(
                "vertical fov out of (0, 180): fov={}",
                self.fov_y_deg
            )));
        }
        if !(self.aspect > 0.0) {
            return Err(Error::DegenerateCamera(format!(
                "aspect must be positive: aspect={}",
                self.aspect
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
