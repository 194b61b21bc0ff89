//! Error kinds surfaced by the processing dispatcher.
//!
//! Two categories exist: configuration errors (malformed or out-of-range
//! parameters, caught before any voxel is touched) and precondition errors
//! (required input state missing, e.g. no seed point). Degenerate data is
//! never an error; kernels fall back to explicit values instead.

use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// A parameter failed validation before dispatch.
    Config {
        name: &'static str,
        reason: String,
    },
    /// Required input state is missing.
    Precondition { what: &'static str },
}

impl ProcessError {
    pub(crate) fn config(name: &'static str, reason: impl Into<String>) -> Self {
        Self::Config {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn precondition(what: &'static str) -> Self {
        Self::Precondition { what }
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { name, reason } => {
                write!(f, "invalid configuration for {name}: {reason}")
            }
            Self::Precondition { what } => write!(f, "missing precondition: {what}"),
        }
    }
}

impl std::error::Error for ProcessError {}
