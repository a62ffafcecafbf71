//! Output columns and projection resolution.

use std::sync::LazyLock;

use ahash::AHashMap;

/// An output column of a game view, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Event,
    Site,
    Date,
    Round,
    White,
    Black,
    Result,
    Pgn,
    Summary,
    CurrentPly,
    Details,
    IsFavorite,
    IsDeleted,
}

impl Column {
    /// Every column in canonical order.
    pub const ALL: [Column; 14] = [
        Column::Id,
        Column::Event,
        Column::Site,
        Column::Date,
        Column::Round,
        Column::White,
        Column::Black,
        Column::Result,
        Column::Pgn,
        Column::Summary,
        Column::CurrentPly,
        Column::Details,
        Column::IsFavorite,
        Column::IsDeleted,
    ];

    /// The column's wire name, as consumers request it.
    pub fn name(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Event => "event",
            Column::Site => "site",
            Column::Date => "date",
            Column::Round => "round",
            Column::White => "white",
            Column::Black => "black",
            Column::Result => "result",
            Column::Pgn => "pgn",
            Column::Summary => "summary",
            Column::CurrentPly => "current_ply",
            Column::Details => "details",
            Column::IsFavorite => "is_favorite",
            Column::IsDeleted => "is_deleted",
        }
    }

    /// Resolves a requested column name.
    ///
    /// Unknown names resolve to [`Column::Id`] rather than failing.
    /// Consumers of earlier provider versions relied on this, so the
    /// fallback is part of the contract.
    pub fn from_name(name: &str) -> Column {
        static BY_NAME: LazyLock<AHashMap<&'static str, Column>> =
            LazyLock::new(|| Column::ALL.iter().map(|&c| (c.name(), c)).collect());
        BY_NAME.get(name).copied().unwrap_or(Column::Id)
    }
}

/// An ordered subset of output columns, as resolved from a consumer's
/// request.
///
/// `None` at resolution time means "all columns, canonical order". The PGN
/// column is the one column whose materialization cost is optional, so the
/// projection records whether it is present.
#[derive(Debug, Clone)]
pub struct Projection {
    columns: Vec<Column>,
    loads_pgn: bool,
}

impl Projection {
    /// Resolves a requested list of column names.
    pub fn resolve(requested: Option<&[String]>) -> Projection {
        let columns: Vec<Column> = match requested {
            None => Column::ALL.to_vec(),
            Some(names) => names.iter().map(|n| Column::from_name(n)).collect(),
        };
        let loads_pgn = columns.contains(&Column::Pgn);
        Projection { columns, loads_pgn }
    }

    /// The resolved columns, in request order.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The column at the given projection slot.
    #[inline]
    pub fn column_at(&self, position: usize) -> Option<Column> {
        self.columns.get(position).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True when the PGN column is part of the projection.
    #[inline]
    pub fn loads_pgn(&self) -> bool {
        self.loads_pgn
    }

    /// Wire names of the resolved columns, in request order.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name()).collect()
    }
}
