//! Trees for generated classes. Built fresh for every class by `generate`,
//! rendered by `visitor::emit_visitor` and never mutated afterwards.

pub mod class;
pub mod method;
pub mod property;
pub mod section;
