pub mod base_visitor;
pub mod emit_visitor;
pub mod statistics_visitor;
