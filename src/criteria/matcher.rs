//! Criteria evaluation against a field's code set

use crate::criteria::ast::{Criteria, CriteriaGroup};

/// Test one group against the codes present in a field: every `present`
/// code must be a key and no `absent` code may be one.
pub fn group_matches(group: &CriteriaGroup, keys: &[char]) -> bool {
    group.present.iter().all(|c| keys.contains(c))
        && group
            .absent
            .as_ref()
            .is_none_or(|absent| absent.iter().all(|c| !keys.contains(c)))
}

/// Evaluate a criteria against a field's code set.
///
/// Every group is always evaluated, in order; there is no first-match-wins.
/// Returns the canonical renderings of all satisfied groups, `None` when no
/// group is satisfied, or `Some(vec![])` for vacuous criteria (matched,
/// nothing selected).
pub fn evaluate(criteria: &Criteria, keys: &[char]) -> Option<Vec<String>> {
    if criteria.is_vacuous() {
        return Some(Vec::new());
    }

    let selected: Vec<String> = criteria
        .groups
        .iter()
        .filter(|group| group_matches(group, keys))
        .map(|group| group.to_string())
        .collect();

    if selected.is_empty() {
        None
    } else {
        Some(selected)
    }
}

/// Union of the present codes of all satisfied groups, de-duplicated while
/// preserving first-seen order. Feeds the value lookups: the `-absent` part
/// of a group only constrains matching and never selects codes.
pub fn selected_codes(criteria: &Criteria, keys: &[char]) -> Vec<char> {
    let mut codes = Vec::new();
    for group in &criteria.groups {
        if !group_matches(group, keys) {
            continue;
        }
        for c in &group.present {
            if !codes.contains(c) {
                codes.push(*c);
            }
        }
    }
    codes
}
