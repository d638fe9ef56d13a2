//! Motion-stage dialect
//!
//! Every movement becomes a scaled `LINEAR` block followed by a digital
//! output write that switches the laser. Z is not emitted.

use serde::Deserialize;

use super::{Dialect, DialectFormatter, Formatted};
use crate::parser::{Command, CommandKind};
use crate::state::{Axis, PositionState};

/// Tunables of the generated stage program
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StageSettings {
    /// Initial value of `$VEL`
    pub velocity: f64,
    /// Initial value of `$SCALE`
    pub scale: f64,
    /// Feed clause of every `LINEAR`, multiplied by `$VEL`
    pub feed: String,
    /// Dwell after each move, in seconds
    pub settle_dwell: String,
    /// Dwell after each digital output write, in seconds
    pub signal_dwell: String,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            velocity: 1.0,
            scale: 0.01,
            feed: "0.200".to_string(),
            settle_dwell: "0.01".to_string(),
            signal_dwell: "0.200".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MotionStage {
    settings: StageSettings,
}

impl MotionStage {
    pub fn new(settings: StageSettings) -> Self {
        Self { settings }
    }

    /// Digital output write followed by its dwell
    fn signal(&self, value: &str) -> String {
        format!(
            "$DO[0].X={}\nDWELL {}",
            value, self.settings.signal_dwell
        )
    }

    fn format_move(&self, command: &Command, state: &mut PositionState) -> Formatted {
        // The digit after the command letter doubles as the laser signal:
        // G0 travels dark, G1 writes.
        let Some(signal) = command.code().chars().next() else {
            return Formatted::Invalid(format!(
                "command '{}' has no code to use as the output signal",
                command.name()
            ));
        };

        let mut linear = String::from("LINEAR");
        for axis in [Axis::X, Axis::Y] {
            let letter = axis.letter();
            let value = state.resolve(axis, command.tokens.attribute(letter));
            linear.push_str(&format!(" {}{}*$SCALE", letter, value));
        }
        linear.push_str(&format!(" F{}*$VEL", self.settings.feed));

        Formatted::Output(format!(
            "{}\nDWELL {}\n{}",
            linear,
            self.settings.settle_dwell,
            self.signal(&signal.to_string())
        ))
    }

    fn format_machine(&self, command: &Command, state: &mut PositionState) -> Formatted {
        match command.name() {
            "M3" => {
                state.run = 1;
                Formatted::Output(self.signal("1"))
            }
            "M5" => {
                state.run = 0;
                Formatted::Output(self.signal("0"))
            }
            _ => Formatted::Unrecognized,
        }
    }
}

impl DialectFormatter for MotionStage {
    fn dialect(&self) -> Dialect {
        Dialect::MotionStage
    }

    fn preamble(&self) -> String {
        format!(
            "'Automatically generated aerotech stage code\n\
             DVAR $VEL\n\
             DVAR $SCALE\n\
             \n\
             ABSOLUTE\n\
             POSOFFSET SET X0 Y0\n\
             \n\
             \n\
             $VEL = {}\n\
             $SCALE = {}\n\
             \n",
            self.settings.velocity, self.settings.scale
        )
    }

    fn format(&self, command: &Command, state: &mut PositionState) -> Formatted {
        match command.kind {
            CommandKind::ModeDeclaration => Formatted::Dropped,
            CommandKind::Machine => self.format_machine(command, state),
            CommandKind::Home | CommandKind::Motion => self.format_move(command, state),
            CommandKind::ToolSelect | CommandKind::Unknown | CommandKind::Empty => {
                Formatted::Unrecognized
            }
        }
    }
}
