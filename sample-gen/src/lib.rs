pub mod ast;
pub mod context;
pub mod dialect;
pub mod distribution;
pub mod error;
pub mod generate;
pub mod generator;
pub mod names;
pub mod policy;
pub mod preset;
pub mod statistics;
pub mod utils;
pub mod variance;
pub mod visitor;
