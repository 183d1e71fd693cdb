//! Angle wrapping helpers used when capturing rotation samples (degrees).

/// Wrap an angle into the half-open turn around zero.
///
/// Angles with magnitude up to 180 are returned unchanged, so both `180` and
/// `-180` pass through as-is. Anything larger is shifted by whole turns.
#[inline]
pub fn wrap_pi(a: f32) -> f32 {
    if a.abs() > 180.0 {
        return a - 360.0 * ((a + 180.0) / 360.0).floor();
    }
    a
}

/// Unwrap `current` relative to the previously captured angle `prev`.
///
/// The difference uses truncated remainder (sign follows the dividend). A
/// difference above 180 folds to `360 - diff`, one below -180 to `360 + diff`.
/// The `diff > 180` branch does not negate the step, which means a backwards
/// step across the seam is recorded as a forwards one. Recorded tracks depend
/// on this exact output.
#[inline]
pub fn wrap_min_diff(prev: f32, current: f32) -> f32 {
    let mut diff = (current - prev) % 360.0;
    if diff > 180.0 {
        diff = 360.0 - diff;
    } else if diff < -180.0 {
        diff += 360.0;
    }
    prev + diff
}
