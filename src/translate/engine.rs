//! Translation Engine
//!
//! Line dispatch and whole-document runs. Position state is owned by the
//! caller (or by a single document run) and threaded through every line.

use crate::dialect::{Dialect, DialectFormatter, Formatted, StageSettings};
use crate::parser::{parse_line, CommandKind};
use crate::state::PositionState;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A diagnostic raised while translating a line
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 1-based source line
    pub line: usize,
    pub message: String,
    pub severity: Severity,
}

/// Result of translating a single line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineTranslation {
    /// Translated text; `None` when the line is dropped
    pub output: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LineTranslation {
    fn warn(&mut self, line: usize, message: String) {
        log::warn!("line {}: {}", line, message);
        self.diagnostics.push(Diagnostic {
            line,
            message,
            severity: Severity::Warning,
        });
    }
}

/// Knobs for a document run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslateOptions {
    pub dialect: Dialect,
    /// Reverse the output, dropping near-empty lines
    pub invert: bool,
    pub stage: StageSettings,
}

/// Result of translating a whole document
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    /// Preamble followed by every translated line
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
    pub lines_read: usize,
    pub lines_emitted: usize,
    /// Position after the last line
    pub state: PositionState,
}

/// Translate one source line
///
/// Comment-only lines are dropped. Everything else is parsed and handed to
/// the dialect formatter; commands the dialect cannot express produce no
/// output and, for non-trivial lines, a warning.
pub fn translate_line(
    line_num: usize,
    line: &str,
    formatter: &dyn DialectFormatter,
    state: &mut PositionState,
) -> LineTranslation {
    let mut result = LineTranslation::default();

    if line.starts_with(';') {
        return result;
    }

    let command = parse_line(line);

    for piece in &command.tokens.malformed {
        result.warn(line_num, format!("Invalid attribute value: {}", piece));
    }

    if command.kind == CommandKind::ToolSelect {
        match command.code().parse::<i32>() {
            Ok(tool) => {
                log::debug!("line {}: tool {} selected", line_num, tool);
                state.tool = tool;
            }
            Err(_) => log::debug!("line {}: unreadable tool '{}'", line_num, command.name()),
        }
    }

    match formatter.format(&command, state) {
        Formatted::Output(text) => result.output = Some(text),
        Formatted::Dropped => {}
        Formatted::Unrecognized => {
            if line.chars().count() > 1 {
                result.warn(line_num, format!("Command not recognized: {}", line));
            }
        }
        Formatted::Invalid(reason) => {
            result.warn(line_num, format!("Cannot translate '{}': {}", line, reason));
        }
    }

    result
}

/// Translate a whole document with a fresh position state
pub fn translate_document(content: &str, options: &TranslateOptions) -> TranslationResult {
    let formatter = options.dialect.formatter(&options.stage);
    let mut state = PositionState::new();

    let mut text = formatter.preamble();
    let mut diagnostics = Vec::new();
    let mut lines_read = 0;
    let mut lines_emitted = 0;

    log::info!("Translating to {} dialect", options.dialect);

    for (idx, line) in content.lines().enumerate() {
        lines_read += 1;
        let line_result = translate_line(idx + 1, line, formatter.as_ref(), &mut state);

        if let Some(output) = line_result.output {
            text.push_str(&output);
            text.push('\n');
            lines_emitted += 1;
        }
        diagnostics.extend(line_result.diagnostics);
    }

    if options.invert {
        text = invert_output(&text);
    }

    TranslationResult {
        text,
        diagnostics,
        lines_read,
        lines_emitted,
        state,
    }
}

/// Reverse the line order, keeping only lines longer than two characters
pub fn invert_output(text: &str) -> String {
    text.split('\n')
        .rev()
        .filter(|line| line.chars().count() > 2)
        .fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
}
