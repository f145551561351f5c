use crate::ast::method::VarInitKind;
use crate::ast::property::PropertyTy;
use crate::ast::section::{AtomKind, BlockKind, Combiner, EqOp, LeafSection, RelOp};
use crate::dialect::Dialect;
use crate::names::{generate_identifier, NameKind};
use crate::policy::Policy;

use rand::prelude::{SliceRandom, StdRng};
use rand::{thread_rng, Rng, SeedableRng};

/// Generation state threaded through every generate call. The RNG is the only
/// mutable state, so a context must not be shared between threads.
pub struct Context {
    pub policy: Policy,
    pub dialect: Dialect,
    /// Seed the RNG was created from, so any run can be replayed.
    pub seed: u64,
    pub rng: StdRng,
}

impl Context {
    pub fn new(seed: Option<u64>) -> Context {
        Context::with_policy(seed, &Policy::default(), Dialect::default())
    }

    pub fn with_policy(seed: Option<u64>, policy: &Policy, dialect: Dialect) -> Context {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        Context {
            policy: policy.clone(),
            dialect,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

/// Uniform choice over a fixed set of variants.
pub fn choose_uniform<T: Copy>(variants: &[T], rng: &mut StdRng) -> Option<T> {
    variants.choose(rng).copied()
}

impl Context {
    pub fn choose_leaf(&mut self) -> LeafSection {
        choose_uniform(&LeafSection::ALL, &mut self.rng).unwrap_or(LeafSection::Print)
    }

    pub fn choose_block_kind(&mut self) -> BlockKind {
        choose_uniform(&BlockKind::ALL, &mut self.rng).unwrap_or(BlockKind::If)
    }

    pub fn choose_if_branch_count(&mut self) -> usize {
        self.policy.if_branch_dist.sample(&mut self.rng)
    }

    pub fn choose_num_clauses(&mut self) -> usize {
        self.policy.num_clauses_dist.sample(&mut self.rng)
    }

    pub fn choose_negation(&mut self) -> bool {
        self.rng.gen_bool(self.policy.negation_prob)
    }

    pub fn choose_atom_kind(&mut self) -> AtomKind {
        choose_uniform(&AtomKind::ALL, &mut self.rng).unwrap_or(AtomKind::Bool)
    }

    pub fn choose_combiner(&mut self) -> Combiner {
        choose_uniform(&Combiner::ALL, &mut self.rng).unwrap_or(Combiner::And)
    }

    pub fn choose_eq_op(&mut self) -> EqOp {
        choose_uniform(&EqOp::ALL, &mut self.rng).unwrap_or(EqOp::Eq)
    }

    pub fn choose_rel_op(&mut self) -> RelOp {
        choose_uniform(&RelOp::ALL, &mut self.rng).unwrap_or(RelOp::Eq)
    }

    pub fn choose_boolean_true(&mut self) -> bool {
        self.rng.gen_bool(self.policy.bool_true_prob)
    }

    pub fn choose_int_literal(&mut self) -> usize {
        self.policy.int_literal_dist.sample(&mut self.rng)
    }

    pub fn choose_float_literal(&mut self) -> f64 {
        let (low, high) = self.policy.float_literal_range;
        self.rng.gen_range(low..high)
    }

    pub fn choose_for_start(&mut self) -> usize {
        self.policy.for_start_dist.sample(&mut self.rng)
    }

    pub fn choose_for_span(&mut self) -> usize {
        // Validated policies never yield 0; the floor keeps `start < stop` regardless.
        self.policy.for_span_dist.sample(&mut self.rng).max(1)
    }

    pub fn choose_num_locals(&mut self) -> usize {
        self.policy.num_locals_dist.sample(&mut self.rng)
    }

    pub fn choose_num_sections(&mut self) -> usize {
        self.policy.num_sections_dist.sample(&mut self.rng)
    }

    pub fn choose_var_init_kind(&mut self) -> VarInitKind {
        choose_uniform(&VarInitKind::ALL, &mut self.rng).unwrap_or(VarInitKind::Int)
    }

    pub fn choose_property_ty(&mut self) -> PropertyTy {
        let types = self.dialect.renderer().property_types();
        choose_uniform(types, &mut self.rng).unwrap_or(PropertyTy::Int)
    }

    pub fn choose_readonly(&mut self) -> bool {
        self.rng.gen_bool(self.policy.readonly_prob)
    }

    pub fn create_name(&mut self, kind: NameKind) -> String {
        let length = self.policy.name_length(kind);
        generate_identifier(&mut self.rng, kind, length)
    }
}
