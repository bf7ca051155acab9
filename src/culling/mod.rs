//! Culling module
//!
//! Provides the culling box primitive, batched culling strategies, and
//! the per-tick CullingEngine facade.

mod culling_box;
mod culler;
mod culling_engine;

pub use culling_box::{BoxKey, CullingBox};
pub use culler::{BoxCuller, BruteForceCuller, CullStats, FrustumCuller};
pub use culling_engine::CullingEngine;
