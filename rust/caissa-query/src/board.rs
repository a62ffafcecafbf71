//! Board-search query construction.

use caissa_common::{Result, error::Error};
use caissa_filter::FilterOp;

/// Number of selection arguments a board search carries:
/// `[filterOp, fen, matchKind]`.
pub const BOARD_SELECTION_ARITY: usize = 3;

/// Strictness of a board-position match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchKind {
    /// The full position must match.
    #[default]
    Exact = 0,
    /// Same pawn structure.
    Pawns = 1,
    /// Same pawn files.
    Files = 2,
    /// Any material arrangement.
    Any = 3,
}

impl MatchKind {
    /// Parses a match-kind code from free text: `0` = exact, `1` = pawns,
    /// `2` = files, `3` = any. Unparsable text falls back to exact.
    pub fn parse(arg: &str) -> MatchKind {
        match arg.trim().parse::<u32>() {
            Ok(1) => MatchKind::Pawns,
            Ok(2) => MatchKind::Files,
            Ok(3) => MatchKind::Any,
            _ => MatchKind::Exact,
        }
    }
}

/// A board-position search: the FEN to look for and how strictly to match
/// it. The store scan reports the ply at which the position occurred in
/// each matching game.
#[derive(Debug, Clone)]
pub struct BoardQuery {
    pub fen: String,
    pub match_kind: MatchKind,
}

impl BoardQuery {
    /// Decodes the 3-element selection-argument list of a board search.
    pub fn from_selection_args(args: &[String]) -> Result<(FilterOp, BoardQuery)> {
        if args.len() < BOARD_SELECTION_ARITY {
            return Err(Error::malformed_query(format!(
                "board search needs {BOARD_SELECTION_ARITY} selection arguments, got {}",
                args.len()
            )));
        }
        let op = FilterOp::parse(Some(args[0].as_str()));
        let query = BoardQuery {
            fen: args[1].clone(),
            match_kind: MatchKind::parse(&args[2]),
        };
        Ok((op, query))
    }
}
