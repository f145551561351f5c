use crate::ast::section::{
    Atom, AtomKind, BlockKind, Clause, Condition, ForSection, IfBranch, IfSection, LeafSection,
    Section,
};
use crate::context::Context;
use crate::names::NameKind;
use std::cmp::max;

impl Section {
    /// Generates one section with `remaining_depth` levels of nesting left.
    ///
    /// At a depth budget of zero or below only a leaf statement is produced,
    /// otherwise an if chain or a for loop whose bodies receive `remaining_depth - 1`.
    /// The budget strictly decreases on every level, so generation always terminates.
    pub fn generate_section(ctx: &mut Context, remaining_depth: i32) -> Section {
        if remaining_depth <= 0 {
            return LeafSection::generate_section(ctx).into();
        }
        match ctx.choose_block_kind() {
            BlockKind::If => IfSection::generate_section(ctx, remaining_depth).into(),
            BlockKind::For => ForSection::generate_section(ctx, remaining_depth).into(),
        }
    }
}

impl LeafSection {
    pub fn generate_section(ctx: &mut Context) -> LeafSection {
        ctx.choose_leaf()
    }
}

impl IfSection {
    /// A chain of `B` branches renders as one `if`, `B - 2` `else if`s and a
    /// trailing `else` when `B > 1`.
    pub fn generate_section(ctx: &mut Context, remaining_depth: i32) -> IfSection {
        let branch_count = ctx.choose_if_branch_count();
        let num_conditional = max(1, branch_count.saturating_sub(1));
        let branches = (0..num_conditional)
            .map(|_| IfBranch {
                condition: Condition::generate_condition(ctx),
                body: Box::new(Section::generate_section(ctx, remaining_depth - 1)),
            })
            .collect();
        let otherwise = (branch_count > 1)
            .then(|| Box::new(Section::generate_section(ctx, remaining_depth - 1)));
        IfSection {
            branches,
            otherwise,
        }
    }
}

impl ForSection {
    pub fn generate_section(ctx: &mut Context, remaining_depth: i32) -> ForSection {
        let var = ctx.create_name(NameKind::ShortVariable);
        let start = ctx.choose_for_start();
        let stop = start + ctx.choose_for_span();
        ForSection {
            var,
            start,
            stop,
            body: Box::new(Section::generate_section(ctx, remaining_depth - 1)),
        }
    }
}

impl Condition {
    pub fn generate_condition(ctx: &mut Context) -> Condition {
        let num_clauses = max(1, ctx.choose_num_clauses());
        let first = Clause::generate_clause(ctx);
        let rest = (1..num_clauses)
            .map(|_| (ctx.choose_combiner(), Clause::generate_clause(ctx)))
            .collect();
        Condition { first, rest }
    }
}

impl Clause {
    pub fn generate_clause(ctx: &mut Context) -> Clause {
        let negated = ctx.choose_negation();
        let atom = match ctx.choose_atom_kind() {
            AtomKind::Bool => Atom::Bool(ctx.choose_boolean_true()),
            AtomKind::BoolCmp => Atom::BoolCmp(
                ctx.choose_boolean_true(),
                ctx.choose_eq_op(),
                ctx.choose_boolean_true(),
            ),
            AtomKind::IntCmp => Atom::IntCmp(
                ctx.choose_int_literal(),
                ctx.choose_rel_op(),
                ctx.choose_int_literal(),
            ),
        };
        Clause { negated, atom }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::section::SectionKind;
    use std::collections::BTreeSet;

    fn walk<'a>(section: &'a Section, out: &mut Vec<&'a Section>) {
        out.push(section);
        match section {
            Section::Leaf(_) => {}
            Section::If(if_section) => if_section.bodies().for_each(|body| walk(body, out)),
            Section::For(for_section) => walk(&for_section.body, out),
        }
    }

    #[test]
    fn zero_depth_is_always_leaf() {
        let mut ctx = Context::new(Some(0));
        for _ in 0..10_000 {
            assert!(Section::generate_section(&mut ctx, 0).is_leaf());
        }
    }

    #[test]
    fn negative_depth_behaves_like_zero() {
        let mut ctx = Context::new(Some(1));
        for depth in [-1, -5, i32::MIN] {
            for _ in 0..1000 {
                assert!(Section::generate_section(&mut ctx, depth).is_leaf());
            }
        }
    }

    #[test]
    fn nesting_depth_equals_budget() {
        let mut ctx = Context::new(Some(2));
        for depth in 1..=5 {
            for _ in 0..200 {
                let section = Section::generate_section(&mut ctx, depth);
                assert_eq!(section.nesting_depth(), depth as usize);
            }
        }
    }

    #[test]
    fn if_chain_shape_matches_branch_count() {
        let mut ctx = Context::new(Some(3));
        let mut counts = BTreeSet::new();
        for _ in 0..2000 {
            let if_section = IfSection::generate_section(&mut ctx, 2);
            let branch_count = if_section.branch_count();
            assert!((1..=3).contains(&branch_count));
            assert_eq!(if_section.else_if_count(), branch_count.saturating_sub(2));
            assert_eq!(if_section.otherwise.is_some(), branch_count > 1);
            counts.insert(branch_count);
        }
        assert_eq!(counts, BTreeSet::from([1, 2, 3]));
    }

    #[test]
    fn for_loops_always_ascend() {
        let mut ctx = Context::new(Some(4));
        for _ in 0..500 {
            let section = Section::generate_section(&mut ctx, 3);
            let mut all = vec![];
            walk(&section, &mut all);
            for section in all {
                if let Section::For(for_section) = section {
                    assert!(for_section.start < for_section.stop);
                }
            }
        }
    }

    #[test]
    fn conditions_have_one_to_three_clauses() {
        let mut ctx = Context::new(Some(5));
        for _ in 0..1000 {
            let condition = Condition::generate_condition(&mut ctx);
            assert!((1..=3).contains(&condition.num_clauses()));
        }
    }

    #[test]
    fn every_block_kind_occurs() {
        let mut ctx = Context::new(Some(6));
        let kinds: BTreeSet<SectionKind> = (0..200)
            .map(|_| Section::generate_section(&mut ctx, 1).kind())
            .collect();
        assert_eq!(kinds, BTreeSet::from([SectionKind::If, SectionKind::For]));

        let leaves: BTreeSet<SectionKind> = (0..200)
            .map(|_| Section::generate_section(&mut ctx, 0).kind())
            .collect();
        assert_eq!(leaves, BTreeSet::from([SectionKind::Print, SectionKind::Throw]));
    }
}
