//! Header-search request construction.

use std::ops::RangeInclusive;

use bitflags::bitflags;
use caissa_common::{Result, error::Error};
use caissa_filter::FilterOp;

use crate::date::DateKey;

/// Upper Elo bound of the store's index format.
pub const MAX_ELO: u32 = 4000;
/// Upper game-id bound accepted by a header scan.
pub const MAX_GAME_ID: u32 = 10_000_000;
/// Upper half-move-count bound accepted by a header scan.
pub const MAX_HALF_MOVES: u32 = 9999;

/// Number of selection arguments a header search carries:
/// `[filterOp, white, black, ignoreColors, resultWhiteWins, resultDraw,
/// resultBlackWins, resultNone, event, site, round, dateFrom, dateTo]`.
pub const HEADER_SELECTION_ARITY: usize = 13;

bitflags! {
    /// Which game results a header search includes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ResultFlags: u8 {
        /// Unfinished or unknown result (`*`).
        const NONE = 1;
        const WHITE_WINS = 1 << 1;
        const BLACK_WINS = 1 << 2;
        const DRAW = 1 << 3;
    }
}

impl Default for ResultFlags {
    fn default() -> ResultFlags {
        ResultFlags::all()
    }
}

/// A header-search query: text fields with exactness flags, inclusion
/// flags, and closed numeric ranges.
///
/// Every range is inclusive on both ends and defaults to the full domain,
/// so an untouched request matches every game.
#[derive(Debug, Clone)]
pub struct SearchHeaderRequest {
    pub white: String,
    pub black: String,
    pub event: String,
    pub site: String,
    pub round: String,
    pub white_exact: bool,
    pub black_exact: bool,
    pub event_exact: bool,
    pub site_exact: bool,
    pub round_exact: bool,
    pub eco_from: String,
    pub eco_to: String,
    /// Match white/black text against either color.
    pub ignore_colors: bool,
    pub results: ResultFlags,
    pub half_moves_even: bool,
    pub half_moves_odd: bool,
    pub allow_eco_none: bool,
    pub allow_unknown_elo: bool,
    pub annotated_only: bool,
    pub date: RangeInclusive<DateKey>,
    pub id: RangeInclusive<u32>,
    pub half_moves: RangeInclusive<u32>,
    pub white_elo: RangeInclusive<u32>,
    pub black_elo: RangeInclusive<u32>,
    pub diff_elo: RangeInclusive<u32>,
    pub min_elo: RangeInclusive<u32>,
    pub max_elo: RangeInclusive<u32>,
}

impl Default for SearchHeaderRequest {
    fn default() -> SearchHeaderRequest {
        SearchHeaderRequest {
            white: String::new(),
            black: String::new(),
            event: String::new(),
            site: String::new(),
            round: String::new(),
            white_exact: false,
            black_exact: false,
            event_exact: false,
            site_exact: false,
            round_exact: false,
            eco_from: String::new(),
            eco_to: String::new(),
            ignore_colors: false,
            results: ResultFlags::all(),
            half_moves_even: true,
            half_moves_odd: true,
            allow_eco_none: true,
            allow_unknown_elo: true,
            annotated_only: false,
            date: DateKey::pack(0, 0, 0)..=DateKey::max(),
            id: 0..=MAX_GAME_ID,
            half_moves: 0..=MAX_HALF_MOVES,
            white_elo: 0..=MAX_ELO,
            black_elo: 0..=MAX_ELO,
            diff_elo: 0..=MAX_ELO,
            min_elo: 0..=MAX_ELO,
            max_elo: 0..=MAX_ELO,
        }
    }
}

impl SearchHeaderRequest {
    /// Decodes the fixed-arity selection-argument list of a header search.
    ///
    /// Returns the filter operation alongside the populated request. Fails
    /// only when the argument list is shorter than
    /// [`HEADER_SELECTION_ARITY`]; individual fields that do not parse fall
    /// back to their defaults silently (booleans to false, dates to the
    /// widest legal bound).
    pub fn from_selection_args(args: &[String]) -> Result<(FilterOp, SearchHeaderRequest)> {
        if args.len() < HEADER_SELECTION_ARITY {
            return Err(Error::malformed_query(format!(
                "header search needs {HEADER_SELECTION_ARITY} selection arguments, got {}",
                args.len()
            )));
        }
        let op = FilterOp::parse(Some(args[0].as_str()));

        let mut results = ResultFlags::empty();
        results.set(ResultFlags::WHITE_WINS, parse_flag(&args[4]));
        results.set(ResultFlags::DRAW, parse_flag(&args[5]));
        results.set(ResultFlags::BLACK_WINS, parse_flag(&args[6]));
        results.set(ResultFlags::NONE, parse_flag(&args[7]));

        let request = SearchHeaderRequest {
            white: args[1].clone(),
            black: args[2].clone(),
            ignore_colors: parse_flag(&args[3]),
            results,
            event: args[8].clone(),
            site: args[9].clone(),
            round: args[10].clone(),
            date: DateKey::lower_bound(&args[11])..=DateKey::upper_bound(&args[12]),
            ..SearchHeaderRequest::default()
        };
        Ok((op, request))
    }
}

/// Boolean selection arguments parse as case-insensitive `"true"`; any
/// other text is false.
fn parse_flag(arg: &str) -> bool {
    arg.eq_ignore_ascii_case("true")
}
