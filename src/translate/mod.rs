//! Translation Engine
//!
//! Per-line dispatch to the active dialect and whole-document runs.

pub mod engine;

pub use engine::{
    invert_output, translate_document, translate_line, Diagnostic, LineTranslation, Severity,
    TranslateOptions, TranslationResult,
};
