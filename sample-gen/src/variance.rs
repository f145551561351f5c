//! Randomized perturbation of preset base counts.

use rand::Rng;

/// Ceiling applied to preset variance percentages before sampling.
pub const DEFAULT_VARIANCE_CEILING: u32 = 20;

/// Largest perturbation `sample_variance` may apply: `floor(base * pct / 100)`.
/// Negative products collapse to zero.
pub fn variance_magnitude(base: i64, variance_pct: f64) -> i64 {
    let magnitude = (base as f64 * variance_pct / 100.0).floor();
    if magnitude > 0.0 {
        magnitude as i64
    } else {
        0
    }
}

/// Returns `base + delta * direction` with `delta` uniform in `[0, magnitude]`
/// and `direction` uniform in `{-1, 0, 1}`. The result is not clamped.
pub fn sample_variance<R: Rng + ?Sized>(rng: &mut R, base: i64, variance_pct: f64) -> i64 {
    let magnitude = variance_magnitude(base, variance_pct);
    let delta = rng.gen_range(0..=magnitude);
    let direction: i64 = rng.gen_range(-1..=1);
    base + delta * direction
}

/// Caps a variance percentage (the input, not a sampled count) at `max_variance`.
pub fn clamp_variance(value: u32, max_variance: u32) -> f64 {
    if value > max_variance {
        return max_variance as f64;
    }
    value as f64
}
