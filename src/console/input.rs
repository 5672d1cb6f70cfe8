//! Syntactic parsing of player input.
//!
//! The parsers own trimming, case-folding, and the quit keyword; the
//! engines only ever see moves that are already well-formed. Anything
//! unrecognized is a recoverable parse error the turn loop re-prompts on.

use crate::games::fourinarow::WIDTH;
use crate::games::hanoi::{DiskMove, Peg};

/// One line of player input, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<M> {
    /// The player asked to stop playing.
    Quit,
    /// The player submitted a move.
    Move(M),
}

/// Rejection reasons for unrecognized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// Not a column label on this board.
    #[display("expected a column from 1 to {WIDTH}")]
    InvalidColumn,
    /// Not a from/to pair of distinct peg letters.
    #[display("expected a peg pair such as AB or CA")]
    InvalidPegPair,
}

impl std::error::Error for ParseError {}

/// Parses a column choice: a label `1..=7`, or the quit keyword.
///
/// Returns the 0-based column index. The label must match exactly, so
/// `"07"` or `"10"` are rejected even though they parse as numbers.
pub fn parse_column(line: &str) -> Result<Command<usize>, ParseError> {
    let line = line.trim().to_uppercase();
    if line == "QUIT" {
        return Ok(Command::Quit);
    }
    (1..=WIDTH)
        .find(|column| column.to_string() == line)
        .map(|column| Command::Move(column - 1))
        .ok_or(ParseError::InvalidColumn)
}

/// Parses a peg pair such as `AB`, or the quit keyword.
///
/// The pair must be two distinct peg letters; `AA` is not a move.
pub fn parse_peg_pair(line: &str) -> Result<Command<DiskMove>, ParseError> {
    let line = line.trim().to_uppercase();
    if line == "QUIT" {
        return Ok(Command::Quit);
    }

    let mut letters = line.chars();
    let (Some(from), Some(to), None) = (letters.next(), letters.next(), letters.next()) else {
        return Err(ParseError::InvalidPegPair);
    };
    match (Peg::from_char(from), Peg::from_char(to)) {
        (Some(from), Some(to)) if from != to => Ok(Command::Move(DiskMove::new(from, to))),
        _ => Err(ParseError::InvalidPegPair),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_labels() {
        assert_eq!(parse_column("1"), Ok(Command::Move(0)));
        assert_eq!(parse_column("7"), Ok(Command::Move(6)));
    }

    #[test]
    fn test_parse_column_trims_whitespace() {
        assert_eq!(parse_column("  4 \n"), Ok(Command::Move(3)));
    }

    #[test]
    fn test_parse_column_quit_any_case() {
        assert_eq!(parse_column("QUIT"), Ok(Command::Quit));
        assert_eq!(parse_column("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_column_rejects_out_of_range() {
        assert_eq!(parse_column("0"), Err(ParseError::InvalidColumn));
        assert_eq!(parse_column("8"), Err(ParseError::InvalidColumn));
    }

    #[test]
    fn test_parse_column_requires_exact_label() {
        assert_eq!(parse_column("07"), Err(ParseError::InvalidColumn));
        assert_eq!(parse_column("seven"), Err(ParseError::InvalidColumn));
        assert_eq!(parse_column(""), Err(ParseError::InvalidColumn));
    }

    #[test]
    fn test_parse_peg_pair() {
        let mv = DiskMove::new(Peg::A, Peg::B);
        assert_eq!(parse_peg_pair("AB"), Ok(Command::Move(mv)));
    }

    #[test]
    fn test_parse_peg_pair_case_folds() {
        let mv = DiskMove::new(Peg::C, Peg::A);
        assert_eq!(parse_peg_pair(" ca \n"), Ok(Command::Move(mv)));
    }

    #[test]
    fn test_parse_peg_pair_quit() {
        assert_eq!(parse_peg_pair("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_peg_pair_rejects_same_peg() {
        assert_eq!(parse_peg_pair("AA"), Err(ParseError::InvalidPegPair));
    }

    #[test]
    fn test_parse_peg_pair_rejects_malformed_input() {
        assert_eq!(parse_peg_pair("A"), Err(ParseError::InvalidPegPair));
        assert_eq!(parse_peg_pair("ABC"), Err(ParseError::InvalidPegPair));
        assert_eq!(parse_peg_pair("AD"), Err(ParseError::InvalidPegPair));
        assert_eq!(parse_peg_pair(""), Err(ParseError::InvalidPegPair));
    }
}
