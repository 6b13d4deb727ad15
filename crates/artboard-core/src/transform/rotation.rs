//! Rotation helpers.

/// Normalize an angle in degrees into `[0, 360)`.
///
/// # Example
///
/// ```
/// use artboard_core::transform::normalize_rotation;
///
/// assert_eq!(normalize_rotation(450.0), 90.0);
/// assert_eq!(normalize_rotation(-30.0), 330.0);
/// ```
pub fn normalize_rotation(angle_degrees: f64) -> f64 {
    let normalized = angle_degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
