// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure normalization of raw control input into valid domain values.
//!
//! These functions are total: every string maps to exactly one in-range
//! value. Malformed input never produces an error — it is absorbed here by
//! fallback substitution, before it can become state. Keeping normalization
//! separate from state mutation means every edge case (non-numeric text,
//! NaN, out-of-range values injected past a bounded slider) is resolved in
//! one place and testable without any UI in the loop.

/// Opacity substituted when input does not parse as a real number.
pub const FALLBACK_OPACITY: f64 = 0.5;

/// Swipe position substituted when input does not parse: the viewport
/// midpoint.
pub const FALLBACK_SWIPE: f64 = 50.0;

/// Normalizes a raw opacity string into `[0.0, 1.0]`.
///
/// Non-numeric input (including input parsing to NaN) yields
/// [`FALLBACK_OPACITY`]; numeric input is clamped. Infinities clamp to the
/// nearest bound.
///
/// ```
/// use lamina_controls::normalize::normalize_opacity;
///
/// assert_eq!(normalize_opacity("0.3"), 0.3);
/// assert_eq!(normalize_opacity("5"), 1.0);
/// assert_eq!(normalize_opacity("-5"), 0.0);
/// assert_eq!(normalize_opacity("opaque"), 0.5);
/// ```
#[must_use]
pub fn normalize_opacity(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => value.clamp(0.0, 1.0),
        _ => FALLBACK_OPACITY,
    }
}

/// Normalizes a raw swipe-percent string into `[0.0, 100.0]`.
///
/// Values arrive from a bounded slider and are expected in range already,
/// but anything injected past the slider is still clamped. Non-numeric
/// input yields [`FALLBACK_SWIPE`].
///
/// ```
/// use lamina_controls::normalize::normalize_swipe;
///
/// assert_eq!(normalize_swipe("75"), 75.0);
/// assert_eq!(normalize_swipe("150"), 100.0);
/// assert_eq!(normalize_swipe("-10"), 0.0);
/// assert_eq!(normalize_swipe("halfway"), 50.0);
/// ```
#[must_use]
pub fn normalize_swipe(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => value.clamp(0.0, 100.0),
        _ => FALLBACK_SWIPE,
    }
}
