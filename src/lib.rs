/*!
# Quasar Culling

CPU view-frustum culling core.

Once per update tick, the camera's view frustum is rebuilt from pose and
perspective intrinsics, and a batch of axis-aligned bounding boxes is
classified against it, writing a per-box visibility flag for the renderer
to act on.

## Architecture

- **Camera**: passive pose + intrinsics container, owned and driven by the caller
- **Frustum**: eight corner points and six inward-facing planes, rebuilt per tick
- **FrustumSnapshot**: immutable per-tick plane cache shared by a whole batch of box tests
- **CullingBox**: world-space center + half-extents + visibility flag + opaque owner key
- **BoxCuller**: batched classification strategies (brute-force, six-plane test)
- **CullingEngine**: stateful facade tying the per-tick dataflow together

Classification is conservative: a box intersecting the frustum is never
marked invisible; a box just outside a corner region may stay visible.
Over-rendering is acceptable, over-culling is not.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod culling;

// Main quasar namespace module
pub mod quasar {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine logging host
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Culling sub-module
    pub mod culling {
        pub use crate::culling::*;
    }
}

// Re-export math library at crate root
pub use glam;
