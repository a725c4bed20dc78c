//! Error types for the variable field core

use thiserror::Error;

/// Main error type for the variable field core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VarFieldError {
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    #[error("Invalid subfield code: {0:?} (expected a single lower-case alphanumerical char)")]
    InvalidCode(char),

    #[error("Unknown lookup operation: {0:?} (expected 'f', 'a' or empty)")]
    UnknownOperation(String),

    #[error("Need to specify at least one subfield code")]
    EmptyCodeList,
}

#[cfg(feature = "python")]
impl From<VarFieldError> for pyo3::PyErr {
    fn from(err: VarFieldError) -> pyo3::PyErr {
        use pyo3::exceptions::PyValueError;

        match err {
            VarFieldError::InvalidCriteria(msg) => {
                PyValueError::new_err(format!("Invalid criteria: {}", msg))
            }
            VarFieldError::InvalidCode(code) => {
                PyValueError::new_err(format!("Invalid subfield code: {:?}", code))
            }
            VarFieldError::UnknownOperation(op) => {
                PyValueError::new_err(format!("Unknown lookup operation: {:?}", op))
            }
            VarFieldError::EmptyCodeList => {
                PyValueError::new_err("Need to specify at least one subfield code")
            }
        }
    }
}

/// Result type alias for the variable field core
pub type Result<T> = std::result::Result<T, VarFieldError>;
