//! The positional game store contract.

use caissa_filter::FilterOp;
use caissa_query::{MatchKind, SearchHeaderRequest};

use crate::progress::Progress;

/// Outcome of a finished (or unfinished) game, as stored in the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    None = 0,
    WhiteWins = 1,
    BlackWins = 2,
    Draw = 3,
}

impl GameResult {
    /// Maps the store's integer result code.
    ///
    /// Panics on a code outside `0..=3`: the store contract guarantees the
    /// range, so an out-of-range code is a precondition violation, not a
    /// recoverable condition.
    pub fn from_code(code: u8) -> GameResult {
        match code {
            0 => GameResult::None,
            1 => GameResult::WhiteWins,
            2 => GameResult::BlackWins,
            3 => GameResult::Draw,
            _ => panic!("result code {code} violates the store contract"),
        }
    }

    /// The PGN rendering of the result.
    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::None => "*",
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2",
        }
    }
}

/// The native positional game store.
///
/// Games are indexed `0..size()`, one record per game, stable for the
/// lifetime of a loaded database. The store keeps a notion of the
/// *current game*, established by [`GameStore::load_game`]; the header
/// accessors read from that game. Header strings come back as raw bytes in
/// the store's legacy encoding (see [`crate::text::TextDecoder`]); only the
/// date is guaranteed ASCII and arrives as text.
///
/// The two scan methods fill a caller-seeded dense mask (one `u16` per
/// game, zero = excluded, positive = included with that ply) and poll the
/// supplied [`Progress`] for cancellation. A cancelled scan leaves a
/// partial mask and returns normally.
pub trait GameStore {
    /// Opens the database at `path`. Returns false when the file cannot be
    /// loaded; the store is then empty.
    fn load_file(&mut self, path: &str) -> bool;

    /// Total game count of the loaded database.
    fn size(&self) -> u32;

    /// Makes the game at `id` current. With `headers_only` the bulk game
    /// text is not decoded. Returns the favorite flag of the loaded game.
    fn load_game(&mut self, id: u32, headers_only: bool) -> bool;

    fn event(&self) -> &[u8];
    fn site(&self) -> &[u8];
    fn round(&self) -> &[u8];
    fn white(&self) -> &[u8];
    fn black(&self) -> &[u8];
    fn date(&self) -> &str;

    /// Result code of the current game, in `0..=3`.
    fn result(&self) -> u8;

    /// Complete PGN of the current game, when loaded.
    fn pgn(&self) -> Option<&[u8]>;

    fn is_deleted(&self) -> bool;

    /// Header-field scan. `mask` is in-out, seeded by the caller per the
    /// filter operation. Returns false when the scan failed outright.
    fn search_header(
        &mut self,
        request: &SearchHeaderRequest,
        op: FilterOp,
        mask: &mut [u16],
        progress: &mut dyn Progress,
    ) -> bool;

    /// Board/FEN scan. Same masking scheme as [`GameStore::search_header`];
    /// mask values carry the ply at which the position occurred.
    fn search_board(
        &mut self,
        fen: &str,
        match_kind: MatchKind,
        op: FilterOp,
        mask: &mut [u16],
        progress: &mut dyn Progress,
    ) -> bool;

    /// Ids of the games marked favorite, ascending.
    fn favorites(&mut self, progress: &mut dyn Progress) -> Vec<u32>;

    /// Sets the favorite flag on the current game.
    fn set_favorite(&mut self, favorite: bool) -> bool;

    /// Sets the deleted flag on the current game.
    fn set_deleted(&mut self, deleted: bool) -> bool;

    /// Replaces the game at `id` with `pgn`. Returns an error message, or
    /// `None` on success.
    fn save_game(&mut self, id: u32, pgn: &str) -> Option<String>;

    /// Exports the games selected by `mask` as PGN to `path`.
    fn export_filter(&mut self, path: &str, mask: &[u16], progress: &mut dyn Progress) -> bool;

    /// Creates a new empty database. Returns an error message, or `None`
    /// on success.
    fn create(&mut self, path: &str) -> Option<String>;

    /// Imports a PGN file into a new database. Returns an error message,
    /// or `None` on success.
    fn import_pgn(&mut self, path: &str, progress: &mut dyn Progress) -> Option<String>;
}
