//! Method body sections: leaf statements and nested control-flow blocks.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    /// Single statement such as `print("Hello World")`.
    Leaf(LeafSection),
    /// `if` chain with optional `else if` and `else` branches.
    If(IfSection),
    /// Range loop such as `for( idx in 3..7 ) { ... }`.
    For(ForSection),
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Leaf(LeafSection::Print) => SectionKind::Print,
            Section::Leaf(LeafSection::Throw) => SectionKind::Throw,
            Section::If(_) => SectionKind::If,
            Section::For(_) => SectionKind::For,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Section::Leaf(_))
    }

    /// Number of nested blocks below and including this section. Leaves are depth 0.
    pub fn nesting_depth(&self) -> usize {
        match self {
            Section::Leaf(_) => 0,
            Section::If(if_section) => {
                1 + if_section
                    .bodies()
                    .map(Section::nesting_depth)
                    .max()
                    .unwrap_or(0)
            }
            Section::For(for_section) => 1 + for_section.body.nesting_depth(),
        }
    }
}

impl From<LeafSection> for Section {
    fn from(section: LeafSection) -> Section {
        Section::Leaf(section)
    }
}

impl From<IfSection> for Section {
    fn from(section: IfSection) -> Section {
        Section::If(section)
    }
}

impl From<ForSection> for Section {
    fn from(section: ForSection) -> Section {
        Section::For(section)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeafSection {
    Print,
    Throw,
}

impl LeafSection {
    pub const ALL: [LeafSection; 2] = [LeafSection::Print, LeafSection::Throw];
}

/// Compound blocks available while depth budget remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    If,
    For,
}

impl BlockKind {
    pub const ALL: [BlockKind; 2] = [BlockKind::If, BlockKind::For];
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfSection {
    /// The initial `if` followed by every `else if`, in order.
    pub branches: Vec<IfBranch>,
    pub otherwise: Option<Box<Section>>,
}

impl IfSection {
    /// Total branch count including the trailing `else`.
    pub fn branch_count(&self) -> usize {
        self.branches.len() + usize::from(self.otherwise.is_some())
    }

    pub fn else_if_count(&self) -> usize {
        self.branches.len().saturating_sub(1)
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Section> {
        self.branches
            .iter()
            .map(|branch| &*branch.body)
            .chain(self.otherwise.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfBranch {
    pub condition: Condition,
    pub body: Box<Section>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForSection {
    pub var: String,
    pub start: usize,
    /// Upper bound of the rendered `start..stop` range. Always greater than `start`.
    pub stop: usize,
    pub body: Box<Section>,
}

/// Boolean expression of one or more clauses joined by `and` / `or`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub first: Clause,
    pub rest: Vec<(Combiner, Clause)>,
}

impl Condition {
    pub fn num_clauses(&self) -> usize {
        1 + self.rest.len()
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first)?;
        for (combiner, clause) in &self.rest {
            write!(f, " {} {}", combiner, clause)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub negated: bool,
    pub atom: Atom,
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "not {}", self.atom)
        } else {
            write!(f, "{}", self.atom)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Bool(bool),
    BoolCmp(bool, EqOp, bool),
    IntCmp(usize, RelOp, usize),
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Atom::Bool(value) => write!(f, "{}", value),
            Atom::BoolCmp(lhs, op, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
            Atom::IntCmp(lhs, op, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomKind {
    Bool,
    BoolCmp,
    IntCmp,
}

impl AtomKind {
    pub const ALL: [AtomKind; 3] = [AtomKind::Bool, AtomKind::BoolCmp, AtomKind::IntCmp];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combiner {
    And,
    Or,
}

impl Combiner {
    pub const ALL: [Combiner; 2] = [Combiner::And, Combiner::Or];
}

impl Display for Combiner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Combiner::And => "and",
            Combiner::Or => "or",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EqOp {
    Eq,
    Ne,
}

impl EqOp {
    pub const ALL: [EqOp; 2] = [EqOp::Eq, EqOp::Ne];
}

impl Display for EqOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EqOp::Eq => "==",
            EqOp::Ne => "!=",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl RelOp {
    pub const ALL: [RelOp; 6] = [RelOp::Eq, RelOp::Ne, RelOp::Lt, RelOp::Gt, RelOp::Le, RelOp::Ge];
}

impl Display for RelOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RelOp::Eq => "==",
            RelOp::Ne => "!=",
            RelOp::Lt => "<",
            RelOp::Gt => ">",
            RelOp::Le => "<=",
            RelOp::Ge => ">=",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionKind {
    Print,
    Throw,
    If,
    For,
}
