use rand::distributions;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Integer distribution used by the policy for counts and literal values.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Distribution {
    /// Inclusive uniform range.
    Uniform(usize, usize),
    Const(usize),
}

impl Distribution {
    pub fn new_uniform_inclusive(low: usize, high: usize) -> Distribution {
        assert!(low <= high);
        Distribution::Uniform(low, high)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match self {
            Distribution::Uniform(low, high) => {
                rng.sample(distributions::Uniform::new_inclusive(*low, *high))
            }
            Distribution::Const(value) => *value,
        }
    }

    pub fn low(&self) -> usize {
        match self {
            Distribution::Uniform(low, _) => *low,
            Distribution::Const(value) => *value,
        }
    }

    pub fn high(&self) -> usize {
        match self {
            Distribution::Uniform(_, high) => *high,
            Distribution::Const(value) => *value,
        }
    }

    /// Whether every value this distribution can produce lies in `[low, high]`.
    pub fn within(&self, low: usize, high: usize) -> bool {
        self.low() <= self.high() && self.low() >= low && self.high() <= high
    }
}
