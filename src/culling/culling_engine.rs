/// CullingEngine — per-tick frustum rebuild plus batched box
/// classification.
///
/// The frame loop calls update_frustum() once per tick with fresh camera
/// state, then cull_boxes() with the boxes to classify; the renderer
/// reads each box's visibility flag after the call returns. The engine
/// holds the most recently built frustum and its snapshot, nothing else.

use glam::Vec3;
use crate::camera::{Camera, Frustum, FrustumSnapshot};
use crate::error::{Error, Result};
use super::culler::{BoxCuller, CullStats, FrustumCuller};
use super::culling_box::CullingBox;

/// Log an error before returning it.
///
/// All facade errors go through here, so misuse shows up in the log
/// with file:line even when the caller discards the Result.
fn log_and_return_error(error: Error) -> Error {
    crate::engine_error!("quasar::CullingEngine", "{}", error);
    error
}

/// Stateful culling facade for a frame loop.
///
/// The per-tick snapshot is fully overwritten by each update_frustum()
/// call and never mutated between calls; queries between two updates all
/// answer from the same immutable snapshot.
///
/// # Example
///
/// ```no_run
/// use quasar_culling::glam::{Quat, Vec3};
/// use quasar_culling::quasar::camera::Camera;
/// use quasar_culling::quasar::culling::{CullingBox, CullingEngine};
///
/// let camera = Camera::new(Vec3::ZERO, Quat::IDENTITY, 60.0, 1.0, 100.0, 16.0 / 9.0);
/// let mut engine = CullingEngine::new();
/// engine.update_frustum(&camera);
///
/// let mut boxes = vec![CullingBox::new(Vec3::new(0.0, 0.0, 50.0), Vec3::ONE, 0u32)];
/// let stats = engine.cull_boxes(&mut boxes)?;
/// assert_eq!(stats.visible, 1);
/// # Ok::<(), quasar_culling::quasar::Error>(())
/// ```
pub struct CullingEngine {
    frustum: Option<Frustum>,
    snapshot: Option<FrustumSnapshot>,
    culler: FrustumCuller,
}

impl CullingEngine {
    /// New engine with no frustum yet.
    ///
    /// Call update_frustum() before the first query.
    pub fn new() -> Self {
        Self {
            frustum: None,
            snapshot: None,
            culler: FrustumCuller::new(),
        }
    }

    /// Rebuild the frustum and its plane cache from current camera state.
    ///
    /// Call once per tick, before any cull_boxes()/contains() query for
    /// that tick. The previous tick's frustum and snapshot are fully
    /// replaced.
    pub fn update_frustum(&mut self, camera: &Camera) -> &Frustum {
        let frustum = Frustum::from_camera(camera);
        self.snapshot = Some(frustum.snapshot());
        self.frustum.insert(frustum)
    }

    /// Most recently built frustum, if any.
    pub fn frustum(&self) -> Option<&Frustum> {
        self.frustum.as_ref()
    }

    /// Most recently built plane cache, if any.
    pub fn snapshot(&self) -> Option<&FrustumSnapshot> {
        self.snapshot.as_ref()
    }

    /// Classify every box against the current frustum, overwriting each
    /// box's `visible` flag.
    ///
    /// # Errors
    ///
    /// `Error::FrustumNotBuilt` if update_frustum() has not been called.
    pub fn cull_boxes<K>(&mut self, boxes: &mut [CullingBox<K>]) -> Result<CullStats> {
        let snapshot = self
            .snapshot
            .ok_or_else(|| log_and_return_error(Error::FrustumNotBuilt))?;
        Ok(self.culler.cull(&snapshot, boxes))
    }

    /// Test a single point against the current frustum.
    ///
    /// # Errors
    ///
    /// `Error::FrustumNotBuilt` if update_frustum() has not been called.
    pub fn contains(&self, point: Vec3) -> Result<bool> {
        let snapshot = self
            .snapshot
            .as_ref()
            .ok_or_else(|| log_and_return_error(Error::FrustumNotBuilt))?;
        Ok(snapshot.contains(point))
    }
}

#[cfg(test)]
#[path = "culling_engine_tests.rs"]
mod tests;
