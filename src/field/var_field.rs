//! Variable field record model

use crate::error::{Result, VarFieldError};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A MARC-style variable field: a tag, two indicators and a set of
/// repeatable, code-indexed subfield values.
///
/// Values are stored in insertion order and never reordered or
/// de-duplicated. A code only shows up in [`keys`](VarField::keys) once it
/// has received at least one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VarFieldData", into = "VarFieldData")]
pub struct VarField {
    tag: String,
    ind1: Option<char>,
    ind2: Option<char>,
    subfield_data: AHashMap<char, Vec<String>>,
    /// Codes in first-insertion order; drives `keys` and the dumps.
    code_order: Vec<char>,
}

/// True when `code` is a valid subfield code: one of `[0-9a-z]`.
pub fn is_valid_code(code: char) -> bool {
    code.is_ascii_digit() || code.is_ascii_lowercase()
}

impl VarField {
    /// Create a new variable field with the given tag and indicators.
    /// `None` indicators read back as empty.
    pub fn new(tag: impl Into<String>, ind1: Option<char>, ind2: Option<char>) -> Self {
        Self {
            tag: tag.into(),
            ind1,
            ind2,
            subfield_data: AHashMap::new(),
            code_order: Vec::new(),
        }
    }

    /// The field's tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// First indicator, `None` when empty.
    pub fn ind1(&self) -> Option<char> {
        self.ind1
    }

    /// Second indicator, `None` when empty.
    pub fn ind2(&self) -> Option<char> {
        self.ind2
    }

    /// Append a value to the subfield `code`.
    ///
    /// Fails with [`VarFieldError::InvalidCode`] when `code` is not a single
    /// lower-case alphanumerical character; the field is left untouched.
    pub fn add_subfield(&mut self, code: char, value: impl Into<String>) -> Result<()> {
        if !is_valid_code(code) {
            return Err(VarFieldError::InvalidCode(code));
        }
        // Insert-if-absent, then append: a code enters `keys` exactly when
        // its first value arrives.
        if !self.subfield_data.contains_key(&code) {
            self.code_order.push(code);
        }
        self.subfield_data.entry(code).or_default().push(value.into());
        Ok(())
    }

    /// Codes currently holding at least one value, in insertion order.
    pub fn keys(&self) -> &[char] {
        &self.code_order
    }

    /// All values for `code`, in insertion order. Empty when the code holds
    /// no values; that is not an error.
    pub fn subfield_array(&self, code: char) -> Result<Vec<String>> {
        if !is_valid_code(code) {
            return Err(VarFieldError::InvalidCode(code));
        }
        Ok(self.subfield_data.get(&code).cloned().unwrap_or_default())
    }

    /// The first (or only) value for `code`, or `None` when absent.
    pub fn subfield(&self, code: char) -> Result<Option<&str>> {
        if !is_valid_code(code) {
            return Err(VarFieldError::InvalidCode(code));
        }
        Ok(self
            .subfield_data
            .get(&code)
            .and_then(|values| values.first())
            .map(String::as_str))
    }

    /// Multi-line debug rendering: a `tag:ind1:ind2:` header followed by
    /// one tab-indented line per populated code.
    pub fn dump(&self) -> String {
        let mut output = format!("{}\n", self.header());
        for code in &self.code_order {
            let _ = writeln!(output, "\t{}:{:?}", code, self.subfield_data[code]);
        }
        output
    }

    /// Single-line debug rendering: the header followed by `$<code><values>`
    /// for each populated code.
    pub fn dump_line(&self) -> String {
        let mut output = self.header();
        for code in &self.code_order {
            let _ = write!(output, "${}{:?}", code, self.subfield_data[code]);
        }
        output
    }

    fn header(&self) -> String {
        format!(
            "{}:{}:{}:",
            self.tag,
            self.ind1.map(String::from).unwrap_or_default(),
            self.ind2.map(String::from).unwrap_or_default()
        )
    }
}

/// Plain serde representation; construction goes through `add_subfield` so
/// codes are validated on deserialize.
#[derive(Serialize, Deserialize)]
struct VarFieldData {
    tag: String,
    #[serde(default)]
    ind1: Option<char>,
    #[serde(default)]
    ind2: Option<char>,
    subfields: Vec<(char, Vec<String>)>,
}

impl TryFrom<VarFieldData> for VarField {
    type Error = VarFieldError;

    fn try_from(data: VarFieldData) -> Result<Self> {
        let mut field = VarField::new(data.tag, data.ind1, data.ind2);
        for (code, values) in data.subfields {
            for value in values {
                field.add_subfield(code, value)?;
            }
        }
        Ok(field)
    }
}

impl From<VarField> for VarFieldData {
    fn from(field: VarField) -> Self {
        let subfields = field
            .code_order
            .iter()
            .map(|code| (*code, field.subfield_data[code].clone()))
            .collect();
        VarFieldData {
            tag: field.tag,
            ind1: field.ind1,
            ind2: field.ind2,
            subfields,
        }
    }
}
