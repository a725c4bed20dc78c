//! Criteria string parser

use crate::criteria::ast::{CodeSet, Criteria, CriteriaGroup};
use crate::error::{Result, VarFieldError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Character class a normalized criteria string must stay within.
static CRITERIA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-z \-]*$").expect("criteria character class"));

/// Parse a criteria string into its alternative groups.
///
/// The grammar is `group (" " group)*` with `group := codes ("-" codes)?`
/// and `code := [0-9a-z]`. Code characters are case-insensitive; input is
/// lower-cased before validation. Blank input parses to a single vacuous
/// group (matches everything, selects nothing).
pub fn parse(criteria: &str) -> Result<Criteria> {
    let normalized = criteria.trim().to_ascii_lowercase();

    if !CRITERIA_RE.is_match(&normalized) {
        return Err(VarFieldError::InvalidCriteria(criteria.to_string()));
    }

    if normalized.is_empty() {
        return Ok(Criteria {
            groups: vec![CriteriaGroup::default()],
        });
    }

    let groups = normalized
        .split_whitespace()
        .map(|text| parse_group(text).ok_or_else(|| VarFieldError::InvalidCriteria(criteria.to_string())))
        .collect::<Result<Vec<_>>>()?;

    Ok(Criteria { groups })
}

/// Parse one group. `None` on malformed hyphen usage.
fn parse_group(text: &str) -> Option<CriteriaGroup> {
    let mut parts = text.split('-');

    let present = collect_codes(parts.next().unwrap_or(""));
    let absent = parts.next().map(collect_codes);

    // A second hyphen inside one group is malformed.
    if parts.next().is_some() {
        return None;
    }

    Some(CriteriaGroup { present, absent })
}

/// Collect codes preserving first-occurrence order, dropping duplicates.
fn collect_codes(text: &str) -> CodeSet {
    let mut codes = CodeSet::new();
    for c in text.chars() {
        if !codes.contains(&c) {
            codes.push(c);
        }
    }
    codes
}
