//! GCode Lexer
//!
//! Splits one slicer line into a command name, its letter-coded
//! attributes and the trailing comment. Values stay as text.

use std::collections::HashMap;

/// One tokenized source line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenizedLine {
    /// First whitespace-delimited piece (e.g. "G1", "M3"), empty for a blank body
    pub name: String,
    /// Attribute letter to value text; the last duplicate wins
    pub attributes: HashMap<char, String>,
    /// Everything after the first `;`, if there was one
    pub comment: Option<String>,
    /// Pieces that could not be read as letter + value
    pub malformed: Vec<String>,
}

impl TokenizedLine {
    /// Value of an attribute, if the line supplied it
    pub fn attribute(&self, key: char) -> Option<&str> {
        self.attributes.get(&key).map(|s| s.as_str())
    }
}

/// Tokenize a line of GCode
///
/// `G1 F1800 X10 Y10 Z10 E5 ; infill` gives name `G1`, five attributes and
/// the comment ` infill`. Pieces of a single character are skipped.
pub fn tokenize_line(line: &str) -> TokenizedLine {
    let (body, comment) = match line.split_once(';') {
        Some((body, comment)) => (body, Some(comment.to_string())),
        None => (line, None),
    };

    let mut pieces = body.split_whitespace();
    let name = pieces.next().unwrap_or_default().to_string();

    let mut attributes = HashMap::new();
    let mut malformed = Vec::new();

    for piece in pieces {
        let mut chars = piece.chars();
        let Some(key) = chars.next() else {
            continue;
        };
        let value = chars.as_str();

        if value.is_empty() {
            continue;
        }

        if !key.is_ascii_alphabetic() {
            malformed.push(piece.to_string());
            continue;
        }

        attributes.insert(key, value.to_string());
    }

    TokenizedLine {
        name,
        attributes,
        comment,
        malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_slicer_move() {
        let tokens = tokenize_line("G1 F1800 X10 Y10 Z10 E5");

        assert_eq!(tokens.name, "G1");
        assert_eq!(tokens.attributes.len(), 5);
        assert_eq!(tokens.attribute('F'), Some("1800"));
        assert_eq!(tokens.attribute('X'), Some("10"));
        assert_eq!(tokens.attribute('Y'), Some("10"));
        assert_eq!(tokens.attribute('Z'), Some("10"));
        assert_eq!(tokens.attribute('E'), Some("5"));
        assert_eq!(tokens.comment, None);
    }

    #[test]
    fn test_tokenize_with_comment() {
        let tokens = tokenize_line("G0 X1.5 ;TYPE:WALL-OUTER; second");

        assert_eq!(tokens.name, "G0");
        assert_eq!(tokens.attribute('X'), Some("1.5"));
        assert_eq!(tokens.comment.as_deref(), Some("TYPE:WALL-OUTER; second"));
    }

    #[test]
    fn test_tokenize_comment_does_not_leak_into_attributes() {
        let tokens = tokenize_line("G1 X1 ; Y9 Z9");

        assert_eq!(tokens.attributes.len(), 1);
        assert_eq!(tokens.attribute('Y'), None);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let tokens = tokenize_line("G1 X1 X2");
        assert_eq!(tokens.attribute('X'), Some("2"));
    }

    #[test]
    fn test_single_character_pieces_skipped() {
        let tokens = tokenize_line("G28 X Y Z5");

        assert_eq!(tokens.name, "G28");
        assert_eq!(tokens.attributes.len(), 1);
        assert_eq!(tokens.attribute('Z'), Some("5"));
        assert!(tokens.malformed.is_empty());
    }

    #[test]
    fn test_empty_body_gives_empty_name() {
        let tokens = tokenize_line("");
        assert_eq!(tokens.name, "");
        assert!(tokens.attributes.is_empty());

        let tokens = tokenize_line("   ; only a comment");
        assert_eq!(tokens.name, "");
        assert_eq!(tokens.comment.as_deref(), Some(" only a comment"));
    }

    #[test]
    fn test_malformed_piece_reported_and_skipped() {
        let tokens = tokenize_line("G1 X10 -5 Y2");

        assert_eq!(tokens.attribute('X'), Some("10"));
        assert_eq!(tokens.attribute('Y'), Some("2"));
        assert_eq!(tokens.malformed, vec!["-5".to_string()]);
    }

    #[test]
    fn test_tabs_and_carriage_returns() {
        let tokens = tokenize_line("G1\tX3\tY4\r");

        assert_eq!(tokens.name, "G1");
        assert_eq!(tokens.attribute('X'), Some("3"));
        assert_eq!(tokens.attribute('Y'), Some("4"));
    }
}
