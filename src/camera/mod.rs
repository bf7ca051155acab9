//! Camera module — camera state, frustum, and the per-tick plane cache.
//!
//! Passive data containers for the culling pipeline. The library does
//! NOT store or manage cameras — they are tools provided by the library,
//! owned and driven by the caller.

mod camera;
mod frustum;

pub use camera::Camera;
pub use frustum::{
    Frustum, FrustumSnapshot,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
    CORNER_FAR_BOTTOM_LEFT, CORNER_FAR_TOP_LEFT, CORNER_FAR_TOP_RIGHT,
    CORNER_FAR_BOTTOM_RIGHT, CORNER_NEAR_BOTTOM_LEFT, CORNER_NEAR_TOP_LEFT,
    CORNER_NEAR_TOP_RIGHT, CORNER_NEAR_BOTTOM_RIGHT,
};
