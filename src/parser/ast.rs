//! Command classification
//!
//! The command name is classified once, so the translator can match
//! every kind exhaustively instead of testing string prefixes.

use crate::parser::lexer::TokenizedLine;

/// What a command name means to the translator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// No command name at all
    Empty,
    /// `G28`
    Home,
    /// `G90` (absolute positioning) or `G21` (millimetres)
    ModeDeclaration,
    /// Any other `G` command
    Motion,
    /// `M` commands (laser / tool control)
    Machine,
    /// `T` commands (tool head selection)
    ToolSelect,
    /// Anything else
    Unknown,
}

impl CommandKind {
    /// Classify a command name. Matching is case-sensitive.
    pub fn classify(name: &str) -> Self {
        match name {
            "" => CommandKind::Empty,
            "G28" => CommandKind::Home,
            "G90" | "G21" => CommandKind::ModeDeclaration,
            _ if name.starts_with('G') => CommandKind::Motion,
            _ if name.starts_with('M') => CommandKind::Machine,
            _ if name.starts_with('T') => CommandKind::ToolSelect,
            _ => CommandKind::Unknown,
        }
    }
}

/// A tokenized line together with its classification
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub kind: CommandKind,
    pub tokens: TokenizedLine,
}

impl Command {
    pub fn new(tokens: TokenizedLine) -> Self {
        Self {
            kind: CommandKind::classify(&tokens.name),
            tokens,
        }
    }

    pub fn name(&self) -> &str {
        &self.tokens.name
    }

    /// Everything after the command letter, e.g. "1" for "G1"
    pub fn code(&self) -> &str {
        let mut chars = self.tokens.name.chars();
        chars.next();
        chars.as_str()
    }
}
