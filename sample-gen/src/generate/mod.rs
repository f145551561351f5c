//! Random construction of the class tree, one `impl` block per node type.

pub mod class;
pub mod method;
pub mod property;
pub mod section;
