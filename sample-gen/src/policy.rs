use crate::distribution::Distribution;
use crate::error::{GeneratorError, GeneratorResult};
use crate::names::NameKind;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Largest accepted `max_depth`. Each level multiplies the section count by up to 3.
pub const MAX_DEPTH_CEILING: i32 = 8;
/// Largest accepted integer literal, for loop start or for loop span.
pub const MAX_LITERAL: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(build_fn(private, name = "fallible_build"))]
pub struct Policy {
    /// Unique identifier for policy.
    pub name: String,

    // Sections
    /// Nesting depth budget of every top-level method section. Values at or
    /// below zero produce leaf statements only.
    pub max_depth: i32,
    /// Distribution of the number of top-level sections in a method body.
    pub num_sections_dist: Distribution,
    /// Distribution of the total branch count of an if chain, `else` included.
    pub if_branch_dist: Distribution,
    /// Distribution of the number of clauses in an if condition.
    pub num_clauses_dist: Distribution,
    /// Probability of a clause being prefixed with `not`.
    pub negation_prob: f64,
    /// Distribution of the first value of a for loop range.
    pub for_start_dist: Distribution,
    /// Distribution of the distance between the first and last value of a for loop range.
    pub for_span_dist: Distribution,

    // Literals
    /// Distribution of integer literals in clauses, initializers and returns.
    pub int_literal_dist: Distribution,
    /// Half-open range of floating point initializers.
    pub float_literal_range: (f64, f64),
    /// Probability of the boolean literal `true`.
    pub bool_true_prob: f64,

    // Declarations
    /// Distribution of the number of local variables declared by a method.
    pub num_locals_dist: Distribution,
    /// Probability of a property being declared `readonly`.
    pub readonly_prob: f64,

    // Identifiers
    pub type_name_len: usize,
    pub variable_name_len: usize,
    pub short_variable_name_len: usize,
    pub method_name_len: usize,
}

impl Policy {
    pub fn get_policies() -> Vec<Policy> {
        vec![Policy::default(), Policy::flat(), Policy::deep()]
    }

    pub fn get_policy_names() -> Vec<String> {
        Policy::get_policies()
            .iter()
            .map(|p| p.name.clone())
            .collect::<Vec<String>>()
    }

    pub fn get_policy(name: &str) -> Option<Policy> {
        Policy::get_policies()
            .iter()
            .find(|p| p.name == name)
            .cloned()
    }

    /// Resolves an optional policy name, falling back to the default policy.
    pub fn parse_policy_args(policy: &Option<String>) -> GeneratorResult<Policy> {
        match policy {
            None => Ok(Policy::default()),
            Some(name) => Policy::get_policy(name).ok_or_else(|| {
                GeneratorError::Policy(format!(
                    "unknown policy {:?}, choose from {:?}",
                    name,
                    Policy::get_policy_names()
                ))
            }),
        }
    }

    /// Parses a RON policy and runs it through the builder validation.
    pub fn from_ron(input: &str) -> GeneratorResult<Policy> {
        let policy: Policy = crate::utils::from_ron_str(input)
            .map_err(|err| GeneratorError::Policy(err.to_string()))?;
        PolicyBuilder::from_policy(policy)
            .build()
            .map_err(|err| GeneratorError::Policy(err.to_string()))
    }

    pub fn name_length(&self, kind: NameKind) -> usize {
        match kind {
            NameKind::Type => self.type_name_len,
            NameKind::Variable => self.variable_name_len,
            NameKind::ShortVariable => self.short_variable_name_len,
            NameKind::Method => self.method_name_len,
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy::default_with_name("default")
    }
}

impl Policy {
    /// Method bodies made of leaf statements only.
    pub fn flat() -> Policy {
        PolicyBuilder::from_policy(Policy::default())
            .name("flat".to_owned())
            .max_depth(0)
            .build()
            .unwrap_or_default()
    }

    /// Deeper nesting with wider if chains and longer conditions.
    pub fn deep() -> Policy {
        PolicyBuilder::from_policy(Policy::default())
            .name("deep".to_owned())
            .max_depth(5)
            .if_branch_dist(Distribution::new_uniform_inclusive(2, 3))
            .num_sections_dist(Distribution::new_uniform_inclusive(2, 4))
            .num_clauses_dist(Distribution::new_uniform_inclusive(2, 3))
            .build()
            .unwrap_or_default()
    }

    fn default_with_name(name: &str) -> Self {
        Policy {
            name: name.to_string(),
            max_depth: 3,
            num_sections_dist: Distribution::new_uniform_inclusive(1, 4),
            if_branch_dist: Distribution::new_uniform_inclusive(1, 3),
            num_clauses_dist: Distribution::new_uniform_inclusive(1, 3),
            negation_prob: 0.5,
            for_start_dist: Distribution::new_uniform_inclusive(1, 9),
            for_span_dist: Distribution::new_uniform_inclusive(1, 9),

            int_literal_dist: Distribution::new_uniform_inclusive(1, 99),
            float_literal_range: (1.0, 100.0),
            bool_true_prob: 0.5,

            num_locals_dist: Distribution::new_uniform_inclusive(1, 4),
            readonly_prob: 0.5,

            type_name_len: NameKind::Type.default_length(),
            variable_name_len: NameKind::Variable.default_length(),
            short_variable_name_len: NameKind::ShortVariable.default_length(),
            method_name_len: NameKind::Method.default_length(),
        }
    }
}

impl PolicyBuilder {
    pub fn build(&self) -> Result<Policy, PolicyBuilderError> {
        let policy = self.fallible_build()?;
        if policy.max_depth > MAX_DEPTH_CEILING {
            return Err(PolicyBuilderError::ValidationError(format!(
                "Max depth must not exceed {}.",
                MAX_DEPTH_CEILING
            )));
        }
        if !policy.if_branch_dist.within(1, 3) {
            return Err(PolicyBuilderError::ValidationError(
                "If branch count must lie within 1 and 3.".to_string(),
            ));
        }
        if !policy.num_clauses_dist.within(1, usize::MAX) {
            return Err(PolicyBuilderError::ValidationError(
                "If conditions need at least one clause.".to_string(),
            ));
        }
        if !policy.for_start_dist.within(1, MAX_LITERAL) {
            return Err(PolicyBuilderError::ValidationError(format!(
                "For loop start must lie within 1 and {}.",
                MAX_LITERAL
            )));
        }
        if !policy.for_span_dist.within(1, MAX_LITERAL) {
            return Err(PolicyBuilderError::ValidationError(format!(
                "For loop span must lie within 1 and {}.",
                MAX_LITERAL
            )));
        }
        if !policy.int_literal_dist.within(1, MAX_LITERAL) {
            return Err(PolicyBuilderError::ValidationError(format!(
                "Integer literals must lie within 1 and {}.",
                MAX_LITERAL
            )));
        }
        if !policy.num_locals_dist.within(1, 4) || !policy.num_sections_dist.within(1, 4) {
            return Err(PolicyBuilderError::ValidationError(
                "Methods declare 1 to 4 locals and 1 to 4 sections.".to_string(),
            ));
        }
        if policy.type_name_len == 0
            || policy.variable_name_len == 0
            || policy.short_variable_name_len == 0
            || policy.method_name_len == 0
        {
            return Err(PolicyBuilderError::ValidationError(
                "Identifier lengths must be greater than 0.".to_string(),
            ));
        }
        let (low, high) = policy.float_literal_range;
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(PolicyBuilderError::ValidationError(
                "Float literal range must be finite and non-empty.".to_string(),
            ));
        }
        for prob in [policy.negation_prob, policy.bool_true_prob, policy.readonly_prob] {
            if !(0.0..=1.0).contains(&prob) {
                return Err(PolicyBuilderError::ValidationError(
                    "Probabilities must lie within 0 and 1.".to_string(),
                ));
            }
        }
        Ok(policy)
    }

    pub fn from_policy(policy: Policy) -> PolicyBuilder {
        PolicyBuilder {
            name: Some(policy.name),
            max_depth: Some(policy.max_depth),
            num_sections_dist: Some(policy.num_sections_dist),
            if_branch_dist: Some(policy.if_branch_dist),
            num_clauses_dist: Some(policy.num_clauses_dist),
            negation_prob: Some(policy.negation_prob),
            for_start_dist: Some(policy.for_start_dist),
            for_span_dist: Some(policy.for_span_dist),
            int_literal_dist: Some(policy.int_literal_dist),
            float_literal_range: Some(policy.float_literal_range),
            bool_true_prob: Some(policy.bool_true_prob),
            num_locals_dist: Some(policy.num_locals_dist),
            readonly_prob: Some(policy.readonly_prob),
            type_name_len: Some(policy.type_name_len),
            variable_name_len: Some(policy.variable_name_len),
            short_variable_name_len: Some(policy.short_variable_name_len),
            method_name_len: Some(policy.method_name_len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::to_ron_string;

    #[test]
    fn named_policies_are_valid() {
        for policy in Policy::get_policies() {
            let rebuilt = PolicyBuilder::from_policy(policy.clone()).build().unwrap();
            assert_eq!(rebuilt, policy);
        }
        assert_eq!(Policy::flat().max_depth, 0);
        assert_eq!(Policy::deep().max_depth, 5);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Policy::get_policy("deep").unwrap().name, "deep");
        assert!(Policy::get_policy("nope").is_none());
        assert_eq!(Policy::parse_policy_args(&None).unwrap(), Policy::default());
        assert!(matches!(
            Policy::parse_policy_args(&Some("nope".to_string())),
            Err(GeneratorError::Policy(_))
        ));
    }

    #[test]
    fn rejects_empty_for_span() {
        let res = PolicyBuilder::from_policy(Policy::default())
            .for_span_dist(Distribution::new_uniform_inclusive(0, 3))
            .build();
        assert!(matches!(res, Err(PolicyBuilderError::ValidationError(_))));
    }

    #[test]
    fn rejects_too_many_branches() {
        let res = PolicyBuilder::from_policy(Policy::default())
            .if_branch_dist(Distribution::new_uniform_inclusive(1, 4))
            .build();
        assert!(matches!(res, Err(PolicyBuilderError::ValidationError(_))));
    }

    #[test]
    fn rejects_inverted_int_literals() {
        let res = PolicyBuilder::from_policy(Policy::default())
            .int_literal_dist(Distribution::Uniform(99, 1))
            .build();
        assert!(matches!(res, Err(PolicyBuilderError::ValidationError(_))));
    }

    #[test]
    fn rejects_zero_int_literal() {
        let res = PolicyBuilder::from_policy(Policy::default())
            .int_literal_dist(Distribution::Const(0))
            .build();
        assert!(matches!(res, Err(PolicyBuilderError::ValidationError(_))));
    }

    #[test]
    fn rejects_non_positive_for_start() {
        let res = PolicyBuilder::from_policy(Policy::default())
            .for_start_dist(Distribution::Const(0))
            .build();
        assert!(matches!(res, Err(PolicyBuilderError::ValidationError(_))));
    }

    #[test]
    fn rejects_inverted_for_start() {
        let res = PolicyBuilder::from_policy(Policy::default())
            .for_start_dist(Distribution::Uniform(9, 1))
            .build();
        assert!(matches!(res, Err(PolicyBuilderError::ValidationError(_))));
    }

    #[test]
    fn rejects_excessive_depth() {
        let res = PolicyBuilder::from_policy(Policy::default())
            .max_depth(1000)
            .build();
        assert!(matches!(res, Err(PolicyBuilderError::ValidationError(_))));

        let res = PolicyBuilder::from_policy(Policy::default())
            .max_depth(MAX_DEPTH_CEILING)
            .build();
        assert!(res.is_ok());
    }

    #[test]
    fn rejects_bad_probability() {
        let res = PolicyBuilder::from_policy(Policy::default())
            .readonly_prob(1.5)
            .build();
        assert!(res.is_err());
    }

    #[test]
    fn missing_field_is_an_error() {
        let res = PolicyBuilder::default().name("partial".to_owned()).build();
        assert!(matches!(res, Err(PolicyBuilderError::UninitializedField(_))));
    }

    #[test]
    fn ron_round_trip_revalidates() {
        let text = to_ron_string(Policy::deep()).unwrap();
        assert_eq!(Policy::from_ron(&text).unwrap(), Policy::deep());

        let broken = text.replace("max_depth: 5", "max_depth: \"five\"");
        assert!(matches!(Policy::from_ron(&broken), Err(GeneratorError::Policy(_))));

        let inverted = Policy {
            int_literal_dist: Distribution::Uniform(99, 1),
            ..Policy::default()
        };
        let text = to_ron_string(inverted).unwrap();
        assert!(matches!(Policy::from_ron(&text), Err(GeneratorError::Policy(_))));
    }
}
