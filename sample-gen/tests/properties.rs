//! Property-based tests for count sampling and section generation.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sample_gen::ast::section::Section;
use sample_gen::context::Context;
use sample_gen::variance::{clamp_variance, sample_variance, variance_magnitude};

proptest! {
    /// Samples stay within `base ± floor(base * pct / 100)`.
    #[test]
    fn variance_stays_in_range(base in 0i64..10_000, pct in 0u32..=100, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pct = pct as f64;
        let magnitude = variance_magnitude(base, pct);
        prop_assert_eq!(magnitude, (base * pct as i64) / 100);
        let sample = sample_variance(&mut rng, base, pct);
        prop_assert!(sample >= base - magnitude);
        prop_assert!(sample <= base + magnitude);
    }

    /// Zero variance never perturbs.
    #[test]
    fn zero_variance_is_identity(base in 0i64..10_000, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(sample_variance(&mut rng, base, 0.0), base);
    }

    /// Clamping never exceeds the ceiling and leaves smaller values alone.
    #[test]
    fn clamp_never_exceeds_ceiling(value in 0u32..1000, max in 0u32..1000) {
        let clamped = clamp_variance(value, max);
        prop_assert!(clamped <= max as f64);
        if value <= max {
            prop_assert_eq!(clamped, value as f64);
        }
    }

    /// Nesting never exceeds the budget, and non-positive budgets yield leaves.
    #[test]
    fn nesting_is_bounded(depth in -3i32..=4, seed in any::<u64>()) {
        let mut ctx = Context::new(Some(seed));
        let section = Section::generate_section(&mut ctx, depth);
        prop_assert_eq!(section.nesting_depth(), depth.max(0) as usize);
    }
}
