//! Criteria parsing and matching module
//!
//! This module handles parsing subfield criteria strings like "ab-c d"
//! and evaluating them against the codes present in a variable field.

mod ast;
mod matcher;
pub mod parser;


pub use ast::*;
pub use matcher::*;
pub use parser::*;
