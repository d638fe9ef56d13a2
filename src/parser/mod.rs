//! GCode Parser
//!
//! Tokenization of slicer GCode and classification of command names.

pub mod ast;
pub mod lexer;

pub use ast::{Command, CommandKind};
pub use lexer::{tokenize_line, TokenizedLine};

/// Parse a single line of GCode into a classified command
///
/// Comment-only lines are not special here; the translator drops them
/// before parsing.
pub fn parse_line(line: &str) -> Command {
    Command::new(lexer::tokenize_line(line))
}
