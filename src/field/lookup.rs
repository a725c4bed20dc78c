//! Criteria-driven value lookups on a variable field

use crate::criteria::{evaluate, parser, selected_codes};
use crate::error::{Result, VarFieldError};
use crate::field::var_field::VarField;

/// How many values a lookup takes per selected code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOp {
    /// Only the first (or only) value of each code.
    First,
    /// Every value of each code.
    All,
}

impl VarField {
    /// Check the field against a subfield criteria.
    ///
    /// The criteria is a space-separated sequence of alternative groups; at
    /// least one group must match. Within a group, codes before an optional
    /// hyphen must all be present and codes after it must all be absent.
    ///
    /// Returns the canonical renderings of all matching groups in criteria
    /// order, `None` when nothing matches, or `Some(vec![])` for blank
    /// criteria (vacuous match, nothing selected).
    ///
    /// # Examples
    ///
    /// ```
    /// use varfield_core::VarField;
    ///
    /// let mut field = VarField::new("100", None, None);
    /// field.add_subfield('a', "Name")?;
    /// field.add_subfield('b', "LastName")?;
    ///
    /// assert_eq!(field.match_criteria("ab")?, Some(vec!["ab".to_string()]));
    /// assert_eq!(field.match_criteria("a c")?, Some(vec!["a".to_string()]));
    /// assert_eq!(field.match_criteria("a-b")?, None);
    /// # Ok::<(), varfield_core::VarFieldError>(())
    /// ```
    pub fn match_criteria(&self, criteria: &str) -> Result<Option<Vec<String>>> {
        let parsed = parser::parse(criteria)?;
        Ok(evaluate(&parsed, self.keys()))
    }

    /// First value of each code selected by `criteria`, in first-seen code
    /// order, absent codes skipped. Empty when the criteria does not match.
    pub fn subfields(&self, criteria: &str) -> Result<Vec<String>> {
        let parsed = parser::parse(criteria)?;
        if evaluate(&parsed, self.keys()).is_none() {
            return Ok(Vec::new());
        }
        let mut values = Vec::new();
        for code in selected_codes(&parsed, self.keys()) {
            if let Some(value) = self.subfield(code)? {
                values.push(value.to_string());
            }
        }
        Ok(values)
    }

    /// Every value of each code selected by `criteria`, flattened in
    /// first-seen code order. Empty when the criteria does not match.
    pub fn subfields_array(&self, criteria: &str) -> Result<Vec<String>> {
        let parsed = parser::parse(criteria)?;
        if evaluate(&parsed, self.keys()).is_none() {
            return Ok(Vec::new());
        }
        let mut values = Vec::new();
        for code in selected_codes(&parsed, self.keys()) {
            values.extend(self.subfield_array(code)?);
        }
        Ok(values)
    }

    /// Look up values for a plain sequence of codes, each treated as its
    /// own alternative (so absent codes are skipped rather than failing the
    /// whole lookup). The code order is respected in the result.
    pub fn lookup(&self, op: LookupOp, codes: &str) -> Result<Vec<String>> {
        if codes.is_empty() {
            return Err(VarFieldError::EmptyCodeList);
        }
        let criteria = codes
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");
        match op {
            LookupOp::First => self.subfields(&criteria),
            LookupOp::All => self.subfields_array(&criteria),
        }
    }

    /// String-form convenience over [`lookup`](VarField::lookup): `name` has
    /// the shape `<op>_<codes>` where `op` is `f` (first value per code,
    /// the default when empty) or `a` (all values per code).
    ///
    /// # Examples
    ///
    /// ```
    /// use varfield_core::VarField;
    ///
    /// let mut field = VarField::new("100", None, None);
    /// field.add_subfield('1', "Age")?;
    /// field.add_subfield('a', "Name")?;
    /// field.add_subfield('a', "NickName")?;
    ///
    /// assert_eq!(field.invoke("f_1a")?, vec!["Age", "Name"]);
    /// assert_eq!(field.invoke("_1a")?, vec!["Age", "Name"]);
    /// assert_eq!(field.invoke("a_a")?, vec!["Name", "NickName"]);
    /// # Ok::<(), varfield_core::VarFieldError>(())
    /// ```
    pub fn invoke(&self, name: &str) -> Result<Vec<String>> {
        let (operation, codes) = name.split_once('_').ok_or(VarFieldError::EmptyCodeList)?;
        let op = match operation {
            "" | "f" => LookupOp::First,
            "a" => LookupOp::All,
            other => return Err(VarFieldError::UnknownOperation(other.to_string())),
        };
        self.lookup(op, codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The fixture from the original documentation:
    /// `100##$aName$aNickName$bLastName$bMaidenName$ceMail$1Age$9Score`
    fn sample_field() -> VarField {
        let mut field = VarField::new("100", None, None);
        for (code, value) in [
            ('a', "Name"),
            ('a', "NickName"),
            ('b', "LastName"),
            ('b', "MaidenName"),
            ('c', "eMail"),
            ('1', "Age"),
            ('9', "Score"),
        ] {
            field.add_subfield(code, value).unwrap();
        }
        field
    }

    #[test]
    fn test_match_criteria() {
        let field = sample_field();
        assert_eq!(
            field.match_criteria("ab").unwrap(),
            Some(vec!["ab".to_string()])
        );
        assert_eq!(
            field.match_criteria("a x").unwrap(),
            Some(vec!["a".to_string()])
        );
        assert_eq!(field.match_criteria("x y").unwrap(), None);
        assert_eq!(field.match_criteria("ab-c").unwrap(), None);
        assert_eq!(
            field.match_criteria("ab-x").unwrap(),
            Some(vec!["ab-x".to_string()])
        );
    }

    #[test]
    fn test_match_criteria_propagates_parse_errors() {
        let field = sample_field();
        for op in [
            field.match_criteria("a,b").map(|_| ()),
            field.subfields("a,b").map(|_| ()),
            field.subfields_array("a,b").map(|_| ()),
        ] {
            assert_eq!(op, Err(VarFieldError::InvalidCriteria("a,b".to_string())));
        }
    }

    #[test]
    fn test_match_criteria_vacuous() {
        let field = sample_field();
        assert_eq!(field.match_criteria("").unwrap(), Some(vec![]));
        // A vacuous match selects no codes, so the lookups yield nothing.
        assert_eq!(field.subfields("").unwrap(), Vec::<String>::new());
        assert_eq!(field.subfields_array("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_match_criteria_idempotent() {
        let field = sample_field();
        let first = field.match_criteria("a-x b").unwrap();
        let second = field.match_criteria("a-x b").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_subfields_first_values() {
        let field = sample_field();
        assert_eq!(field.subfields("a b").unwrap(), vec!["Name", "LastName"]);
        // 'x' is absent: its group fails, the others still select.
        assert_eq!(field.subfields("x a b").unwrap(), vec!["Name", "LastName"]);
        assert_eq!(field.subfields("x y").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_subfields_array_all_values() {
        let field = sample_field();
        assert_eq!(
            field.subfields_array("9 a b").unwrap(),
            vec!["Score", "Name", "NickName", "LastName", "MaidenName"]
        );
    }

    #[test]
    fn test_subfields_union_dedup_across_groups() {
        let field = sample_field();
        // 'a' appears in both satisfied groups but is looked up once.
        assert_eq!(
            field.subfields("ab ac").unwrap(),
            vec!["Name", "LastName", "eMail"]
        );
    }

    #[test]
    fn test_absent_part_does_not_select() {
        let field = sample_field();
        assert_eq!(field.subfields("a-x").unwrap(), vec!["Name"]);
        assert_eq!(field.subfields_array("1-x").unwrap(), vec!["Age"]);
    }

    #[test]
    fn test_lookup_first() {
        let field = sample_field();
        assert_eq!(
            field.lookup(LookupOp::First, "1ab").unwrap(),
            vec!["Age", "Name", "LastName"]
        );
    }

    #[test]
    fn test_lookup_all() {
        let field = sample_field();
        assert_eq!(
            field.lookup(LookupOp::All, "9ab").unwrap(),
            vec!["Score", "Name", "NickName", "LastName", "MaidenName"]
        );
    }

    #[test]
    fn test_lookup_skips_missing_codes() {
        let field = sample_field();
        assert_eq!(
            field.lookup(LookupOp::First, "x1a").unwrap(),
            vec!["Age", "Name"]
        );
    }

    #[test]
    fn test_lookup_empty_codes() {
        let field = sample_field();
        assert_eq!(
            field.lookup(LookupOp::First, "").unwrap_err(),
            VarFieldError::EmptyCodeList
        );
    }

    #[test]
    fn test_invoke() {
        let field = sample_field();
        assert_eq!(field.invoke("f_1ab").unwrap(), vec!["Age", "Name", "LastName"]);
        assert_eq!(field.invoke("_1ab").unwrap(), vec!["Age", "Name", "LastName"]);
        assert_eq!(
            field.invoke("a_9ab").unwrap(),
            vec!["Score", "Name", "NickName", "LastName", "MaidenName"]
        );
    }

    #[test]
    fn test_invoke_errors() {
        let field = sample_field();
        assert_eq!(
            field.invoke("z_ab").unwrap_err(),
            VarFieldError::UnknownOperation("z".to_string())
        );
        assert_eq!(field.invoke("f_").unwrap_err(), VarFieldError::EmptyCodeList);
        assert_eq!(field.invoke("fab").unwrap_err(), VarFieldError::EmptyCodeList);
    }
}
