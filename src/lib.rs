//! GCode Translator
//!
//! Converts slicer G-code into programs for a two-photon micro-fabrication
//! printer or a motion-stage controller.
//!
//! This library provides:
//! - Tokenizing and classifying slicer G-code lines
//! - Position tracking, so omitted axes inherit their last value
//! - One formatter per output dialect
//! - Whole-document translation and a file driver
//! - Configuration management

pub mod config;
pub mod dialect;
pub mod driver;
pub mod error;
pub mod parser;
pub mod state;
pub mod translate;

// Re-exports for clean public API
pub use config::Config;
pub use dialect::{Dialect, DialectFormatter, StageSettings};
pub use error::TranslateError;
pub use parser::{parse_line, tokenize_line, TokenizedLine};
pub use state::{Axis, PositionState};
pub use translate::{translate_document, translate_line, Diagnostic, TranslateOptions};
