use caissa_common::error::ErrorKind;
use caissa_filter::FilterOp;

use crate::{BoardQuery, MatchKind};

const FEN: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_from_selection_args() {
    let (op, query) = BoardQuery::from_selection_args(&args(&["1", FEN, "3"])).unwrap();
    assert_eq!(op, FilterOp::Or);
    assert_eq!(query.fen, FEN);
    assert_eq!(query.match_kind, MatchKind::Any);
}

#[test]
fn test_match_kind_codes() {
    assert_eq!(MatchKind::parse("0"), MatchKind::Exact);
    assert_eq!(MatchKind::parse("1"), MatchKind::Pawns);
    assert_eq!(MatchKind::parse("2"), MatchKind::Files);
    assert_eq!(MatchKind::parse("3"), MatchKind::Any);
    assert_eq!(MatchKind::parse("positional"), MatchKind::Exact);
    assert_eq!(MatchKind::parse(""), MatchKind::Exact);
}

#[test]
fn test_short_argument_list_is_malformed_query() {
    let err = BoardQuery::from_selection_args(&args(&["0", FEN])).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MalformedQuery { .. }));
}
