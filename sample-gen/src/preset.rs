//! Complexity tiers and their preset base counts.

use crate::error::{GeneratorError, GeneratorResult};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Complexity {
    Simple,
    Complex,
    GordianKnot,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [
        Complexity::Simple,
        Complexity::Complex,
        Complexity::GordianKnot,
    ];

    pub fn preset(&self) -> GeneratorResult<GenerationPreset> {
        GenerationPreset::for_complexity(*self)
    }
}

impl Display for Complexity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Complexity::Simple => "SIMPLE",
            Complexity::Complex => "COMPLEX",
            Complexity::GordianKnot => "GORDIAN_KNOT",
        })
    }
}

impl FromStr for Complexity {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Complexity::ALL
            .iter()
            .find(|complexity| complexity.to_string() == normalized)
            .copied()
            .ok_or_else(|| GeneratorError::Configuration(format!("unknown complexity preset {}", s)))
    }
}

/// Base counts and variance percentages of one complexity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPreset {
    pub base_methods: usize,
    pub base_properties: usize,
    pub method_variance_pct: u32,
    pub property_variance_pct: u32,
}

impl GenerationPreset {
    pub const fn new(
        base_methods: usize,
        base_properties: usize,
        method_variance_pct: u32,
        property_variance_pct: u32,
    ) -> GenerationPreset {
        GenerationPreset {
            base_methods,
            base_properties,
            method_variance_pct,
            property_variance_pct,
        }
    }

    pub fn for_complexity(complexity: Complexity) -> GeneratorResult<GenerationPreset> {
        COMPLEXITY_PRESETS
            .get(&complexity)
            .copied()
            .ok_or_else(|| GeneratorError::Configuration(format!("no preset for {}", complexity)))
    }
}

lazy_static! {
    static ref COMPLEXITY_PRESETS: BTreeMap<Complexity, GenerationPreset> = BTreeMap::from([
        (Complexity::Simple, GenerationPreset::new(5, 3, 10, 10)),
        (Complexity::Complex, GenerationPreset::new(15, 10, 20, 20)),
        (Complexity::GordianKnot, GenerationPreset::new(25, 20, 25, 25)),
    ]);
}

/// Rejects non-positive class counts before any generation starts.
pub fn validate_class_count(count: i64) -> GeneratorResult<usize> {
    if count <= 0 {
        return Err(GeneratorError::InvalidCount(count));
    }
    usize::try_from(count).map_err(|_| GeneratorError::InvalidCount(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_is_mapped() {
        for complexity in Complexity::ALL {
            assert!(complexity.preset().is_ok());
        }
        assert_eq!(
            Complexity::Simple.preset().unwrap(),
            GenerationPreset::new(5, 3, 10, 10)
        );
        assert_eq!(
            Complexity::GordianKnot.preset().unwrap(),
            GenerationPreset::new(25, 20, 25, 25)
        );
    }

    #[test]
    fn parses_tier_names() {
        assert_eq!("SIMPLE".parse::<Complexity>().unwrap(), Complexity::Simple);
        assert_eq!("complex".parse::<Complexity>().unwrap(), Complexity::Complex);
        assert_eq!(
            "gordian-knot".parse::<Complexity>().unwrap(),
            Complexity::GordianKnot
        );
        assert_eq!(
            "trivial".parse::<Complexity>(),
            Err(GeneratorError::Configuration(
                "unknown complexity preset trivial".to_string()
            ))
        );
    }

    #[test]
    fn display_round_trips() {
        for complexity in Complexity::ALL {
            assert_eq!(complexity.to_string().parse::<Complexity>().unwrap(), complexity);
        }
    }

    #[test]
    fn class_count_must_be_positive() {
        assert_eq!(validate_class_count(3), Ok(3));
        assert_eq!(validate_class_count(0), Err(GeneratorError::InvalidCount(0)));
        assert_eq!(validate_class_count(-2), Err(GeneratorError::InvalidCount(-2)));
    }
}
