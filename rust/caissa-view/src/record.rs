//! The materialized row model.

use caissa_store::GameResult;

use crate::column::Column;

/// A single materialized game row.
///
/// Header strings are already decoded and display-normalized (placeholder
/// `"?"` values collapsed, date truncated to its known precision). At most
/// one record exists per view at a time.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub id: u32,
    pub event: String,
    pub site: String,
    pub date: String,
    pub round: String,
    pub white: String,
    pub black: String,
    pub result: GameResult,
    pub pgn: Option<String>,
    /// Ply recorded by the active filter for this game; 0 outside a
    /// position search.
    pub current_ply: u16,
    pub favorite: bool,
    pub deleted: bool,
}

impl GameRecord {
    /// One-line human summary: players, then whichever of date, round,
    /// event and site are known, then the result.
    pub fn summary(&self) -> String {
        let mut info = String::new();
        info.push_str(&self.white);
        info.push_str(" - ");
        info.push_str(&self.black);
        for part in [&self.date, &self.round, &self.event, &self.site] {
            if !part.is_empty() {
                info.push(' ');
                info.push_str(part);
            }
        }
        info.push(' ');
        info.push_str(self.result.as_str());
        info
    }

    /// HTML-light details line: the result in bold, then whichever of
    /// event, site, round and date are known.
    pub fn details(&self) -> String {
        let mut info = String::new();
        info.push_str("<b>");
        info.push_str(self.result.as_str());
        info.push_str("</b> ");
        for part in [&self.event, &self.site, &self.round, &self.date] {
            if !part.is_empty() {
                info.push(' ');
                info.push_str(part);
            }
        }
        info
    }

    /// Produces the value of one column of this record.
    pub fn value(&self, column: Column) -> ColumnValue {
        match column {
            Column::Id => ColumnValue::Int(self.id as i64),
            Column::Event => ColumnValue::Text(self.event.clone()),
            Column::Site => ColumnValue::Text(self.site.clone()),
            Column::Date => ColumnValue::Text(self.date.clone()),
            Column::Round => ColumnValue::Text(self.round.clone()),
            Column::White => ColumnValue::Text(self.white.clone()),
            Column::Black => ColumnValue::Text(self.black.clone()),
            Column::Result => ColumnValue::Text(self.result.as_str().to_string()),
            Column::Pgn => match &self.pgn {
                Some(pgn) => ColumnValue::Text(pgn.clone()),
                None => ColumnValue::Null,
            },
            Column::Summary => ColumnValue::Text(self.summary()),
            Column::CurrentPly => ColumnValue::Int(self.current_ply as i64),
            Column::Details => ColumnValue::Text(self.details()),
            Column::IsFavorite => ColumnValue::Bool(self.favorite),
            Column::IsDeleted => ColumnValue::Bool(self.deleted),
        }
    }
}

/// A typed column value produced through a resolved projection.
///
/// The closed set of variants keeps type mismatches detectable at the
/// accessor boundary instead of deep inside string parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Int(i64),
    Text(String),
    Bool(bool),
    Null,
}

impl ColumnValue {
    /// True for [`ColumnValue::Null`] and for empty text, which the row
    /// model uses interchangeably for "value unknown".
    pub fn is_null(&self) -> bool {
        match self {
            ColumnValue::Null => true,
            ColumnValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }
}
