//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs whose wrapped value would round up to 360.0 map
/// to 0.0. NaN passes through.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
