//! The filtered, paginated, lazily-materialized cursor.
//!
//! A view is opened once per query and owns its store handle, its resolved
//! projection and its filter (if a search was requested). Row movement
//! resolves a logical position to a game id (directly, or through the
//! filter), materializes that one game, and caches exactly one row of
//! column values. Moving again discards the previous row.

use caissa_common::{Result, error::Error};
use caissa_filter::{GameFilter, effective_op, seed_mask};
use caissa_query::{BoardQuery, SearchHeaderRequest, board};
use caissa_store::{GameStore, Progress, TextDecoder};

use crate::column::Projection;
use crate::record::{ColumnValue, GameRecord};

/// Filtered-versus-total row counts, reported out-of-band for "N of M"
/// consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub matched: u32,
    pub total: u32,
}

/// Raw search arguments accepted at open time, as the surrounding query
/// layer delivers them.
#[derive(Debug, Clone, Copy)]
pub enum SearchArgs<'a> {
    /// Header-field search, arity [`caissa_query::header::HEADER_SELECTION_ARITY`].
    Header(&'a [String]),
    /// Board-position search, arity [`board::BOARD_SELECTION_ARITY`].
    Board(&'a [String]),
}

impl<'a> SearchArgs<'a> {
    /// Classifies a selection-argument list by its arity: exactly
    /// [`board::BOARD_SELECTION_ARITY`] entries mean a board search,
    /// anything else a header search.
    pub fn detect(args: &'a [String]) -> SearchArgs<'a> {
        if args.len() == board::BOARD_SELECTION_ARITY {
            SearchArgs::Board(args)
        } else {
            SearchArgs::Header(args)
        }
    }
}

/// A read-only cursor over the games of one database file, optionally
/// restricted by a filter and clipped by a row limit.
pub struct GameView<S> {
    store: S,
    decoder: Box<dyn TextDecoder>,
    total_count: u32,
    filter: Option<GameFilter>,
    start_offset: u32,
    limit: Option<u32>,
    projection: Projection,
    loads_pgn: bool,
    row: Option<GameRecord>,
}

impl<S: GameStore> GameView<S> {
    /// Opens a collection view.
    ///
    /// `limit_hint` arrives as free text and is parsed best-effort; an
    /// unparsable hint means "no limit". When `search` is given, the scan
    /// runs to completion (or cancellation) before this returns, and the
    /// resulting filter is owned by the view.
    ///
    /// A store that fails to load the named file leaves the view empty
    /// (count 0); this is not an error.
    pub fn open(
        store: S,
        decoder: Box<dyn TextDecoder>,
        path: &str,
        projection: Option<&[String]>,
        limit_hint: Option<&str>,
        search: Option<SearchArgs<'_>>,
        progress: &mut dyn Progress,
    ) -> Result<GameView<S>> {
        let mut view = Self::init(store, decoder, path, projection, parse_limit(limit_hint), 0)?;
        match search {
            Some(SearchArgs::Header(args)) => view.run_header_search(args, progress)?,
            Some(SearchArgs::Board(args)) => view.run_board_search(args, progress)?,
            None => {}
        }
        Ok(view)
    }

    /// Opens a single-item view positioned on the game at `index`.
    pub fn open_single(
        store: S,
        decoder: Box<dyn TextDecoder>,
        path: &str,
        index: u32,
        projection: Option<&[String]>,
    ) -> Result<GameView<S>> {
        Self::init(store, decoder, path, projection, Some(1), index)
    }

    /// Opens a view over the games marked favorite.
    pub fn open_favorites(
        store: S,
        decoder: Box<dyn TextDecoder>,
        path: &str,
        projection: Option<&[String]>,
        progress: &mut dyn Progress,
    ) -> Result<GameView<S>> {
        let mut view = Self::init(store, decoder, path, projection, None, 0)?;
        let favorites = view.store.favorites(progress);
        view.filter = Some(GameFilter::from_ids(favorites));
        Ok(view)
    }

    fn init(
        mut store: S,
        decoder: Box<dyn TextDecoder>,
        path: &str,
        projection: Option<&[String]>,
        limit: Option<u32>,
        start_offset: u32,
    ) -> Result<GameView<S>> {
        if path.is_empty() {
            return Err(Error::malformed_query("the data file name must be given"));
        }
        let total_count = if store.load_file(path) {
            store.size()
        } else {
            log::warn!("failed to load '{path}', the view stays empty");
            0
        };
        let projection = Projection::resolve(projection);
        let loads_pgn = projection.loads_pgn();
        Ok(GameView {
            store,
            decoder,
            total_count,
            filter: None,
            start_offset,
            limit,
            projection,
            loads_pgn,
            row: None,
        })
    }

    fn run_header_search(&mut self, args: &[String], progress: &mut dyn Progress) -> Result<()> {
        let (op, request) = SearchHeaderRequest::from_selection_args(args)?;
        let op = effective_op(op, self.filter.as_ref());
        let mut mask = seed_mask(op, self.filter.as_ref(), self.total_count as usize);
        let completed = self.store.search_header(&request, op, &mut mask, progress);
        self.install_filter(completed, &mask, progress);
        Ok(())
    }

    fn run_board_search(&mut self, args: &[String], progress: &mut dyn Progress) -> Result<()> {
        let (op, query) = BoardQuery::from_selection_args(args)?;
        let op = effective_op(op, self.filter.as_ref());
        let mut mask = seed_mask(op, self.filter.as_ref(), self.total_count as usize);
        let completed =
            self.store
                .search_board(&query.fen, query.match_kind, op, &mut mask, progress);
        self.install_filter(completed, &mask, progress);
        Ok(())
    }

    /// A cancelled scan still yields its partial mask; only an outright
    /// scan failure empties the view.
    fn install_filter(&mut self, completed: bool, mask: &[u16], progress: &dyn Progress) {
        let filter = if completed || progress.is_cancelled() {
            GameFilter::from_mask(mask)
        } else {
            log::warn!("scan failed, the view stays empty");
            GameFilter::from_mask(&[])
        };
        self.filter = Some(filter);
    }

    /// The number of rows this view exposes: the filtered (or total) game
    /// count, clipped by the declared row limit.
    pub fn count(&self) -> u32 {
        let matched = match &self.filter {
            Some(filter) => filter.len() as u32,
            None => self.total_count,
        };
        match self.limit {
            Some(limit) => matched.min(limit),
            None => matched,
        }
    }

    /// Total game count of the store at open time, disregarding any filter.
    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    /// The filter established at open time, if any.
    pub fn active_filter(&self) -> Option<&GameFilter> {
        self.filter.as_ref()
    }

    /// Filtered-versus-total counts when a filter is active.
    pub fn filter_stats(&self) -> Option<FilterStats> {
        self.filter.as_ref().map(|filter| FilterStats {
            matched: filter.len() as u32,
            total: self.total_count,
        })
    }

    /// Wire names of the projected columns, in request order.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.projection.column_names()
    }

    /// Moves the cursor to `new_position`, materializing that row.
    ///
    /// Returns false, with the cached row unchanged, when the position
    /// does not resolve to a game: past the row count, past the filter, or
    /// past the end of the store. Callers stop iterating on false rather
    /// than treating it as an error.
    pub fn move_to(&mut self, _old_position: u32, new_position: u32) -> bool {
        if new_position >= self.count() {
            return false;
        }
        let logical = self.start_offset + new_position;
        let (game_id, ply) = match &self.filter {
            Some(filter) => {
                let position = logical as usize;
                match (filter.game_id(position), filter.ply(position)) {
                    (Some(id), Some(ply)) => (id, ply),
                    _ => return false,
                }
            }
            None => {
                if logical >= self.total_count {
                    return false;
                }
                (logical, 0)
            }
        };
        let favorite = self.store.load_game(game_id, !self.loads_pgn);
        self.row = Some(build_record(
            &self.store,
            self.decoder.as_ref(),
            game_id,
            ply,
            favorite,
            self.loads_pgn,
        ));
        true
    }

    /// The value at the given projection slot of the current row.
    /// [`ColumnValue::Null`] when no row is materialized or the slot is
    /// out of range.
    pub fn value(&self, position: usize) -> ColumnValue {
        match (&self.row, self.projection.column_at(position)) {
            (Some(row), Some(column)) => row.value(column),
            _ => ColumnValue::Null,
        }
    }

    pub fn get_int(&self, position: usize) -> Result<i32> {
        self.integer_value(position)
    }

    pub fn get_long(&self, position: usize) -> Result<i64> {
        self.integer_value(position)
    }

    pub fn get_short(&self, position: usize) -> Result<i16> {
        self.integer_value(position)
    }

    pub fn get_double(&self, position: usize) -> Result<f64> {
        match self.value(position) {
            ColumnValue::Int(i) => Ok(i as f64),
            ColumnValue::Text(text) => text
                .parse()
                .map_err(|_| Error::format(text, "a floating-point number")),
            ColumnValue::Bool(b) => Err(Error::format(b.to_string(), "a floating-point number")),
            ColumnValue::Null => Ok(0.0),
        }
    }

    pub fn get_float(&self, position: usize) -> Result<f32> {
        self.get_double(position).map(|value| value as f32)
    }

    /// The textual form of the value at the given projection slot; `None`
    /// when no row is materialized or the column has no value.
    pub fn get_string(&self, position: usize) -> Option<String> {
        match self.value(position) {
            ColumnValue::Int(i) => Some(i.to_string()),
            ColumnValue::Text(text) => Some(text),
            ColumnValue::Bool(b) => Some(b.to_string()),
            ColumnValue::Null => None,
        }
    }

    /// True when the slot holds no value (no row, missing PGN, or an
    /// empty header field).
    pub fn is_null(&self, position: usize) -> bool {
        self.value(position).is_null()
    }

    /// Decodes an integer-typed column. A non-numeric value is a caller
    /// contract violation (wrong accessor for the column) and propagates
    /// as a format error.
    fn integer_value<T>(&self, position: usize) -> Result<T>
    where
        T: TryFrom<i64> + std::str::FromStr + Default,
    {
        match self.value(position) {
            ColumnValue::Int(i) => {
                T::try_from(i).map_err(|_| Error::format(i.to_string(), "an integer in range"))
            }
            ColumnValue::Text(text) => text
                .parse()
                .map_err(|_| Error::format(text, "an integer")),
            ColumnValue::Bool(b) => Err(Error::format(b.to_string(), "an integer")),
            ColumnValue::Null => Ok(T::default()),
        }
    }

    /// Toggles bulk-text loading for subsequently materialized rows.
    pub fn set_load_pgn(&mut self, load: bool) {
        self.loads_pgn = load;
    }

    /// Overrides the favorite flag of the cached row, for when an external
    /// edit happens without reopening the view.
    pub fn override_favorite(&mut self, favorite: bool) {
        if let Some(row) = &mut self.row {
            row.favorite = favorite;
        }
    }

    /// Overrides the deleted flag of the cached row.
    pub fn override_deleted(&mut self, deleted: bool) {
        if let Some(row) = &mut self.row {
            row.deleted = deleted;
        }
    }

    /// The currently materialized row, if any.
    pub fn current_row(&self) -> Option<&GameRecord> {
        self.row.as_ref()
    }

    /// Closes the view, releasing the store handle.
    pub fn close(self) -> S {
        self.store
    }
}

fn build_record<S: GameStore>(
    store: &S,
    decoder: &dyn TextDecoder,
    game_id: u32,
    ply: u16,
    favorite: bool,
    loads_pgn: bool,
) -> GameRecord {
    let pgn = if loads_pgn {
        store.pgn().map(|bytes| decoder.decode(bytes))
    } else {
        None
    };
    GameRecord {
        id: game_id,
        event: collapse_placeholder(decoder.decode(store.event())),
        site: collapse_placeholder(decoder.decode(store.site())),
        date: normalize_date(store.date()),
        round: collapse_placeholder(decoder.decode(store.round())),
        white: decoder.decode(store.white()),
        black: decoder.decode(store.black()),
        result: caissa_store::GameResult::from_code(store.result()),
        pgn,
        current_ply: ply,
        favorite,
        deleted: store.is_deleted(),
    }
}

/// The store writes `"?"` for unknown event/site/round fields; display
/// wants them empty.
pub(crate) fn collapse_placeholder(text: String) -> String {
    if text == "?" { String::new() } else { text }
}

/// Truncates a PGN date to its known precision: `"1950.??.??"` becomes
/// `"1950"`, fully unknown dates become empty.
pub(crate) fn normalize_date(date: &str) -> String {
    let date = date
        .strip_suffix(".??.??")
        .or_else(|| date.strip_suffix(".??"))
        .unwrap_or(date);
    if date == "?" || date == "????" {
        String::new()
    } else {
        date.to_string()
    }
}

pub(crate) fn parse_limit(hint: Option<&str>) -> Option<u32> {
    hint.and_then(|text| text.trim().parse::<u32>().ok())
        .filter(|&limit| limit > 0)
}
