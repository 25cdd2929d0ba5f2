//! Errors raised by schema lookups and store access.
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A parameter, signal or model name is not part of the queried schema.
    NameNotFound { kind: &'static str, name: String },
    /// Indexed access at or past the end of a store.
    OutOfRange { index: usize, len: usize },
    /// A store of the wrong length was wrapped in a fixed-layout view.
    LengthMismatch {
        model: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A model-tagged store was handed to code expecting another model.
    ModelMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    /// A population was built with no neurons.
    EmptyPopulation,
}

impl ModelError {
    pub(crate) fn name_not_found(kind: &'static str, name: impl Into<String>) -> Self {
        ModelError::NameNotFound {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::NameNotFound { kind, name } => write!(f, "unknown {}: {}", kind, name),
            ModelError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for store of length {}", index, len)
            }
            ModelError::LengthMismatch {
                model,
                expected,
                actual,
            } => write!(
                f,
                "{} expects {} values, got {}",
                model, expected, actual
            ),
            ModelError::ModelMismatch { expected, actual } => {
                write!(f, "expected model {}, got {}", expected, actual)
            }
            ModelError::EmptyPopulation => write!(f, "population size must be strictly positive"),
        }
    }
}

impl Error for ModelError {}

pub type ModelResult<T> = Result<T, ModelError>;
