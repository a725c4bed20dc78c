//! Python bindings for the variable field core
//!
//! Exposes [`VarField`](crate::field::VarField) as a Python class. The Ruby
//! original resolved lookups through synthesized method names
//! (`method_missing`); here the same convenience is the explicit
//! `invoke("<op>_<codes>")` method.

use pyo3::prelude::*;

use crate::field;

/// A MARC variable field: tag, two indicators and repeatable,
/// code-indexed subfield values.
#[pyclass(name = "VarField")]
#[derive(Debug, Clone)]
pub struct PyVarField {
    inner: field::VarField,
}

#[pymethods]
impl PyVarField {
    /// Create a new variable field.
    ///
    /// # Arguments
    /// * `tag` - field tag, e.g. "245"
    /// * `ind1` - first indicator (single character), empty when omitted
    /// * `ind2` - second indicator (single character), empty when omitted
    #[new]
    #[pyo3(signature = (tag, ind1=None, ind2=None))]
    fn new(tag: String, ind1: Option<char>, ind2: Option<char>) -> Self {
        Self {
            inner: field::VarField::new(tag, ind1, ind2),
        }
    }

    /// The field tag
    #[getter]
    fn tag(&self) -> &str {
        self.inner.tag()
    }

    /// First indicator, or None when empty
    #[getter]
    fn ind1(&self) -> Option<char> {
        self.inner.ind1()
    }

    /// Second indicator, or None when empty
    #[getter]
    fn ind2(&self) -> Option<char> {
        self.inner.ind2()
    }

    /// Append a value to a subfield.
    ///
    /// # Raises
    /// ValueError when `code` is not a single lower-case alphanumerical char
    fn add_subfield(&mut self, code: char, value: String) -> PyResult<()> {
        self.inner.add_subfield(code, value)?;
        Ok(())
    }

    /// List of subfield codes holding at least one value
    fn keys(&self) -> Vec<char> {
        self.inner.keys().to_vec()
    }

    /// First (or only) value of a subfield, or None when absent
    fn subfield(&self, code: char) -> PyResult<Option<String>> {
        Ok(self.inner.subfield(code)?.map(str::to_string))
    }

    /// All values of a repeatable subfield
    fn subfield_array(&self, code: char) -> PyResult<Vec<String>> {
        Ok(self.inner.subfield_array(code)?)
    }

    /// First value of each code selected by the criteria
    fn subfields(&self, criteria: &str) -> PyResult<Vec<String>> {
        Ok(self.inner.subfields(criteria)?)
    }

    /// All values of each code selected by the criteria
    fn subfields_array(&self, criteria: &str) -> PyResult<Vec<String>> {
        Ok(self.inner.subfields_array(criteria)?)
    }

    /// Check the field against a subfield criteria.
    ///
    /// # Returns
    /// The matching group renderings, or None when nothing matches
    fn match_criteria(&self, criteria: &str) -> PyResult<Option<Vec<String>>> {
        Ok(self.inner.match_criteria(criteria)?)
    }

    /// Named lookup: `<op>_<codes>` with op 'f' (first, default) or 'a' (all)
    fn invoke(&self, name: &str) -> PyResult<Vec<String>> {
        Ok(self.inner.invoke(name)?)
    }

    /// Multi-line debug rendering
    fn dump(&self) -> String {
        self.inner.dump()
    }

    /// Single-line debug rendering
    fn dump_line(&self) -> String {
        self.inner.dump_line()
    }

    fn __repr__(&self) -> String {
        self.inner.dump_line()
    }
}

/// Python module definition
#[pymodule]
pub fn varfield_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyVarField>()?;
    Ok(())
}
