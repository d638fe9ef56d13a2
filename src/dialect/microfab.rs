//! Micro-fabrication printer dialect
//!
//! Movement lines always carry all three axes: `G1 X10 Y10 Z0.3`.

use super::{Dialect, DialectFormatter, Formatted};
use crate::parser::{Command, CommandKind};
use crate::state::{Axis, PositionState};

#[derive(Debug, Clone, Copy, Default)]
pub struct MicroFab;

impl MicroFab {
    /// `<name> X<x> Y<y> Z<z>`, filling omitted axes from `state`
    fn format_move(command: &Command, state: &mut PositionState) -> String {
        let mut line = command.name().to_string();
        for axis in Axis::ALL {
            let letter = axis.letter();
            let value = state.resolve(axis, command.tokens.attribute(letter));
            line.push(' ');
            line.push(letter);
            line.push_str(value);
        }
        line
    }
}

impl DialectFormatter for MicroFab {
    fn dialect(&self) -> Dialect {
        Dialect::MicroFab
    }

    fn preamble(&self) -> String {
        "Automatically generated 2PP code\n".to_string()
    }

    fn format(&self, command: &Command, state: &mut PositionState) -> Formatted {
        match command.kind {
            CommandKind::Home => {
                state.home();
                Formatted::Output(format!("{} X0 Y0 Z0", command.name()))
            }
            CommandKind::ModeDeclaration | CommandKind::Motion => {
                Formatted::Output(Self::format_move(command, state))
            }
            CommandKind::Machine
            | CommandKind::ToolSelect
            | CommandKind::Unknown
            | CommandKind::Empty => Formatted::Unrecognized,
        }
    }
}
