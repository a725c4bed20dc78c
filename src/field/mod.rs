//! Variable field module
//!
//! The record model (tag, indicators, code-indexed repeatable values) and
//! the criteria-driven lookup API built on top of it.

mod lookup;
mod var_field;


pub use lookup::*;
pub use var_field::*;
