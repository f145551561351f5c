use crate::ast::section::Section;

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub name: String,
    pub locals: Vec<LocalVar>,
    pub sections: Vec<Section>,
    /// Integer literal returned by the trailing `return`.
    pub return_value: usize,
}

/// Local declaration with initializer such as `var abcdEfgh = 42`.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalVar {
    pub name: String,
    pub init: VarInit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VarInit {
    /// `"true"` or `"false"`, quoted.
    QuotedBool(bool),
    Int(usize),
    Float(f64),
    /// A random identifier wrapped in quotes.
    QuotedIdent(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VarInitKind {
    QuotedBool,
    Int,
    Float,
    QuotedIdent,
}

impl VarInitKind {
    pub const ALL: [VarInitKind; 4] = [
        VarInitKind::QuotedBool,
        VarInitKind::Int,
        VarInitKind::Float,
        VarInitKind::QuotedIdent,
    ];
}
