//! Output dialects
//!
//! Each target dialect provides its preamble and formats classified
//! commands, reading and updating the carried position.

pub mod microfab;
pub mod stage;

use std::fmt;

use crate::error::TranslateError;
use crate::parser::Command;
use crate::state::PositionState;

pub use microfab::MicroFab;
pub use stage::{MotionStage, StageSettings};

/// Supported output dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Two-photon micro-fabrication printer
    #[default]
    MicroFab,
    /// Motion-stage controller program
    MotionStage,
}

impl Dialect {
    /// Numeric selector used on the command line and in config files
    pub fn selector(self) -> u8 {
        match self {
            Dialect::MicroFab => 0,
            Dialect::MotionStage => 1,
        }
    }

    /// Suffix appended to the source name for the generated file
    pub fn output_suffix(self) -> &'static str {
        match self {
            Dialect::MicroFab => "_2PP.gcode",
            Dialect::MotionStage => "_AE.txt",
        }
    }

    /// Build the formatter for this dialect
    pub fn formatter(self, stage: &StageSettings) -> Box<dyn DialectFormatter> {
        match self {
            Dialect::MicroFab => Box::new(MicroFab),
            Dialect::MotionStage => Box::new(MotionStage::new(stage.clone())),
        }
    }
}

impl TryFrom<u8> for Dialect {
    type Error = TranslateError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(Dialect::MicroFab),
            1 => Ok(Dialect::MotionStage),
            other => Err(TranslateError::UnknownDialect(other)),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::MicroFab => write!(f, "micro-fab"),
            Dialect::MotionStage => write!(f, "motion-stage"),
        }
    }
}

/// What a formatter made of one command
#[derive(Debug, Clone, PartialEq)]
pub enum Formatted {
    /// Output text, possibly spanning several lines
    Output(String),
    /// Intentionally produces nothing
    Dropped,
    /// The dialect has no translation for this command
    Unrecognized,
    /// Recognized, but cannot be translated as written
    Invalid(String),
}

/// A target dialect
pub trait DialectFormatter {
    fn dialect(&self) -> Dialect;

    /// Boilerplate emitted once before any translated line
    fn preamble(&self) -> String;

    /// Translate one classified command
    fn format(&self, command: &Command, state: &mut PositionState) -> Formatted;
}
