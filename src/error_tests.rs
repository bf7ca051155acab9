//! Unit tests for error.rs
//!
//! Tests Display formatting and std::error::Error integration.

use crate::error::Error;

// ============================================================================
// DISPLAY
// ============================================================================

#[test]
fn test_frustum_not_built_display() {
    let err = Error::FrustumNotBuilt;
    assert_eq!(
        err.to_string(),
        "Frustum not built. Call update_frustum() first."
    );
}

#[test]
fn test_degenerate_camera_display() {
    let err = Error::DegenerateCamera("near/far out of order: near=5, far=1".to_string());
    let msg = err.to_string();
    assert!(msg.starts_with("Degenerate camera intrinsics:"));
    assert!(msg.contains("near=5"));
}

// ============================================================================
// TRAITS
// ============================================================================

#[test]
fn test_error_clone_eq() {
    let err = Error::DegenerateCamera("aspect must be positive: aspect=0".to_string());
    let cloned = err.clone();
    assert_eq!(err, cloned);
    assert_ne!(err, Error::FrustumNotBuilt);
}

#[test]
fn test_error_trait_object() {
    let err: Box<dyn std::error::Error> = Box::new(Error::FrustumNotBuilt);
    assert!(err.source().is_none());
    assert!(!err.to_string().is_empty());
}
