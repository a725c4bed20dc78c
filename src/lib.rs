//! Variable Field Core - MARC variable field model and subfield criteria
//!
//! This crate models a MARC-style variable field (tag, two indicators,
//! repeatable code-indexed subfield values) together with a small criteria
//! language for testing which subfield codes are present or absent and for
//! selecting values accordingly.
//!
//! A criteria string is a space-separated sequence of alternative groups;
//! a group is a run of codes with an optional `-` followed by codes that
//! must be absent. Groups are OR'd, codes within a group are AND'd:
//!
//! ```
//! use varfield_core::VarField;
//!
//! let mut field = VarField::new("100", None, None);
//! field.add_subfield('a', "Name")?;
//! field.add_subfield('b', "LastName")?;
//!
//! // 'a' and 'b' present, 'c' absent
//! assert_eq!(field.match_criteria("ab-c")?, Some(vec!["ab-c".to_string()]));
//! assert_eq!(field.subfields("a b")?, vec!["Name", "LastName"]);
//! # Ok::<(), varfield_core::VarFieldError>(())
//! ```
//!
//! Python bindings are available behind the `python` feature.

pub mod criteria;
pub mod error;
pub mod field;

#[cfg(feature = "python")]
mod python;

pub use crate::error::{Result, VarFieldError};
pub use crate::field::{LookupOp, VarField};
