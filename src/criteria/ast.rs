//! Abstract syntax tree for subfield criteria

use smallvec::SmallVec;
use std::fmt;

/// Ordered, de-duplicated set of subfield codes. Groups rarely hold more
/// than a few codes, so the storage is inline.
pub type CodeSet = SmallVec<[char; 4]>;

/// One alternative within a criteria: a set of codes that must all be
/// present and an optional set of codes that must all be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CriteriaGroup {
    /// Codes that must all be present in the field.
    pub present: CodeSet,
    /// Codes that must all be absent. `None` when the group was written
    /// without a hyphen; `Some` (possibly empty) when it had one.
    pub absent: Option<CodeSet>,
}

impl CriteriaGroup {
    /// A group with no constraints at all: empty present set, no hyphen.
    /// Only blank criteria input produces one of these.
    pub fn is_vacuous(&self) -> bool {
        self.present.is_empty() && self.absent.is_none()
    }
}

impl fmt::Display for CriteriaGroup {
    /// Canonical rendering: present codes joined, then `-` and the absent
    /// codes when a hyphen was present. This is the form returned to
    /// identify which alternative matched.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.present {
            write!(f, "{}", c)?;
        }
        if let Some(absent) = &self.absent {
            write!(f, "-")?;
            for c in absent {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// A parsed criteria: ordered sequence of alternative groups (logical OR).
/// Never empty after a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub groups: Vec<CriteriaGroup>,
}

impl Criteria {
    /// True for the result of parsing blank input: a single group with no
    /// constraints. Matches vacuously and selects nothing.
    pub fn is_vacuous(&self) -> bool {
        self.groups.len() == 1 && self.groups[0].is_vacuous()
    }
}
