//! Errors that abort a translation run

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Dialect selector outside the supported set
    UnknownDialect(u8),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::UnknownDialect(selector) => write!(
                f,
                "output type {} not defined (expected 0 for micro-fab or 1 for motion stage)",
                selector
            ),
        }
    }
}

impl std::error::Error for TranslateError {}
