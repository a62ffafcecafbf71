use caissa_store::GameResult;

use crate::Column;
use crate::record::{ColumnValue, GameRecord};

fn record() -> GameRecord {
    GameRecord {
        id: 17,
        event: "Candidates".to_string(),
        site: "Zurich".to_string(),
        date: "1953.09.15".to_string(),
        round: "3".to_string(),
        white: "Keres, Paul".to_string(),
        black: "Smyslov, Vassily".to_string(),
        result: GameResult::BlackWins,
        pgn: None,
        current_ply: 24,
        favorite: true,
        deleted: false,
    }
}

#[test]
fn test_summary_lists_known_fields() {
    assert_eq!(
        record().summary(),
        "Keres, Paul - Smyslov, Vassily 1953.09.15 3 Candidates Zurich 0-1"
    );
}

#[test]
fn test_summary_skips_empty_fields() {
    let mut record = record();
    record.date = String::new();
    record.round = String::new();
    record.event = String::new();
    record.site = String::new();
    assert_eq!(record.summary(), "Keres, Paul - Smyslov, Vassily 0-1");
}

#[test]
fn test_details_leads_with_bold_result() {
    let details = record().details();
    assert!(details.starts_with("<b>0-1</b>"));
    assert!(details.contains("Candidates"));
    assert!(details.contains("1953.09.15"));
}

#[test]
fn test_value_per_column() {
    let record = record();
    assert_eq!(record.value(Column::Id), ColumnValue::Int(17));
    assert_eq!(
        record.value(Column::White),
        ColumnValue::Text("Keres, Paul".to_string())
    );
    assert_eq!(
        record.value(Column::Result),
        ColumnValue::Text("0-1".to_string())
    );
    assert_eq!(record.value(Column::CurrentPly), ColumnValue::Int(24));
    assert_eq!(record.value(Column::IsFavorite), ColumnValue::Bool(true));
    assert_eq!(record.value(Column::IsDeleted), ColumnValue::Bool(false));
    assert_eq!(record.value(Column::Pgn), ColumnValue::Null);
}

#[test]
fn test_pgn_value_when_loaded() {
    let mut record = record();
    record.pgn = Some("1. e4 e5 *".to_string());
    assert_eq!(
        record.value(Column::Pgn),
        ColumnValue::Text("1. e4 e5 *".to_string())
    );
}

#[test]
fn test_null_semantics() {
    assert!(ColumnValue::Null.is_null());
    assert!(ColumnValue::Text(String::new()).is_null());
    assert!(!ColumnValue::Text("x".to_string()).is_null());
    assert!(!ColumnValue::Int(0).is_null());
    assert!(!ColumnValue::Bool(false).is_null());
}
