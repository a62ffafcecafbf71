//! An in-memory stand-in for the native game store.

use caissa_filter::FilterOp;
use caissa_query::{DateKey, MatchKind, ResultFlags, SearchHeaderRequest};
use caissa_store::{GameStore, Progress};

/// One fixture game, built with a fluent API:
///
/// ```
/// use caissa_testkit::TestGame;
///
/// let game = TestGame::new("Fischer, Robert", "Spassky, Boris")
///     .date("1972.07.11")
///     .event("World Championship")
///     .result(2)
///     .position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 1);
/// ```
#[derive(Debug, Clone)]
pub struct TestGame {
    pub white: String,
    pub black: String,
    pub event: String,
    pub site: String,
    pub round: String,
    pub date: String,
    pub result: u8,
    pub pgn: String,
    pub half_moves: u32,
    /// (FEN, ply) pairs the fake board scan matches against.
    pub positions: Vec<(String, u16)>,
    pub favorite: bool,
    pub deleted: bool,
}

impl TestGame {
    pub fn new(white: &str, black: &str) -> TestGame {
        TestGame {
            white: white.to_string(),
            black: black.to_string(),
            event: "?".to_string(),
            site: "?".to_string(),
            round: "?".to_string(),
            date: "????.??.??".to_string(),
            result: 0,
            pgn: format!("[White \"{white}\"]\n[Black \"{black}\"]\n\n*"),
            half_moves: 0,
            positions: Vec::new(),
            favorite: false,
            deleted: false,
        }
    }

    pub fn event(mut self, event: &str) -> TestGame {
        self.event = event.to_string();
        self
    }

    pub fn site(mut self, site: &str) -> TestGame {
        self.site = site.to_string();
        self
    }

    pub fn round(mut self, round: &str) -> TestGame {
        self.round = round.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> TestGame {
        self.date = date.to_string();
        self
    }

    pub fn result(mut self, code: u8) -> TestGame {
        self.result = code;
        self
    }

    pub fn pgn(mut self, pgn: &str) -> TestGame {
        self.pgn = pgn.to_string();
        self
    }

    pub fn half_moves(mut self, count: u32) -> TestGame {
        self.half_moves = count;
        self
    }

    pub fn position(mut self, fen: &str, ply: u16) -> TestGame {
        self.positions.push((fen.to_string(), ply));
        self
    }

    pub fn favorite(mut self) -> TestGame {
        self.favorite = true;
        self
    }

    pub fn deleted(mut self) -> TestGame {
        self.deleted = true;
        self
    }
}

/// An in-memory [`GameStore`].
///
/// Scans follow the seeded-mask contract: IGNORE evaluates every game and
/// overwrites its slot, OR only raises zero slots to a match, AND only
/// zeroes already-included slots. Cancellation is polled per game; a
/// cancelled scan returns false and leaves the mask partially processed.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: Vec<TestGame>,
    loaded: bool,
    fail_load: bool,
    fail_scans: bool,
    current: Option<usize>,
    current_headers_only: bool,
    /// Every `(game_id, headers_only)` pair passed to `load_game`.
    pub loads: Vec<(u32, bool)>,
}

impl MemoryStore {
    pub fn new(games: Vec<TestGame>) -> MemoryStore {
        MemoryStore {
            games,
            ..MemoryStore::default()
        }
    }

    /// A store whose `load_file` always fails.
    pub fn failing() -> MemoryStore {
        MemoryStore {
            fail_load: true,
            ..MemoryStore::default()
        }
    }

    /// Makes every scan fail outright.
    pub fn with_failing_scans(mut self) -> MemoryStore {
        self.fail_scans = true;
        self
    }

    fn game(&self) -> Option<&TestGame> {
        self.current.map(|id| &self.games[id])
    }

    fn header_matches(&self, request: &SearchHeaderRequest, id: u32, game: &TestGame) -> bool {
        if !request.id.contains(&id) {
            return false;
        }
        let straight = text_matches(&request.white, request.white_exact, &game.white)
            && text_matches(&request.black, request.black_exact, &game.black);
        let swapped = text_matches(&request.white, request.white_exact, &game.black)
            && text_matches(&request.black, request.black_exact, &game.white);
        if !(straight || (request.ignore_colors && swapped)) {
            return false;
        }
        if !text_matches(&request.event, request.event_exact, &game.event)
            || !text_matches(&request.site, request.site_exact, &game.site)
            || !text_matches(&request.round, request.round_exact, &game.round)
        {
            return false;
        }
        let result_flag = match game.result {
            0 => ResultFlags::NONE,
            1 => ResultFlags::WHITE_WINS,
            2 => ResultFlags::BLACK_WINS,
            _ => ResultFlags::DRAW,
        };
        if !request.results.contains(result_flag) {
            return false;
        }
        if !request.half_moves.contains(&game.half_moves) {
            return false;
        }
        let parity_ok = if game.half_moves % 2 == 0 {
            request.half_moves_even
        } else {
            request.half_moves_odd
        };
        if !parity_ok {
            return false;
        }
        request.date.contains(&DateKey::lower_bound(&game.date))
    }
}

/// Empty query text matches everything; exact queries compare whole
/// strings, inexact ones match on substring containment.
fn text_matches(query: &str, exact: bool, value: &str) -> bool {
    if query.is_empty() {
        true
    } else if exact {
        value == query
    } else {
        value.contains(query)
    }
}

impl GameStore for MemoryStore {
    fn load_file(&mut self, _path: &str) -> bool {
        if self.fail_load {
            return false;
        }
        self.loaded = true;
        true
    }

    fn size(&self) -> u32 {
        if self.loaded { self.games.len() as u32 } else { 0 }
    }

    fn load_game(&mut self, id: u32, headers_only: bool) -> bool {
        self.loads.push((id, headers_only));
        if (id as usize) < self.games.len() {
            self.current = Some(id as usize);
            self.current_headers_only = headers_only;
            self.games[id as usize].favorite
        } else {
            self.current = None;
            false
        }
    }

    fn event(&self) -> &[u8] {
        self.game().map(|g| g.event.as_bytes()).unwrap_or_default()
    }

    fn site(&self) -> &[u8] {
        self.game().map(|g| g.site.as_bytes()).unwrap_or_default()
    }

    fn round(&self) -> &[u8] {
        self.game().map(|g| g.round.as_bytes()).unwrap_or_default()
    }

    fn white(&self) -> &[u8] {
        self.game().map(|g| g.white.as_bytes()).unwrap_or_default()
    }

    fn black(&self) -> &[u8] {
        self.game().map(|g| g.black.as_bytes()).unwrap_or_default()
    }

    fn date(&self) -> &str {
        self.game().map(|g| g.date.as_str()).unwrap_or("")
    }

    fn result(&self) -> u8 {
        self.game().map(|g| g.result).unwrap_or(0)
    }

    fn pgn(&self) -> Option<&[u8]> {
        if self.current_headers_only {
            return None;
        }
        self.game().map(|g| g.pgn.as_bytes())
    }

    fn is_deleted(&self) -> bool {
        self.game().map(|g| g.deleted).unwrap_or(false)
    }

    fn search_header(
        &mut self,
        request: &SearchHeaderRequest,
        op: FilterOp,
        mask: &mut [u16],
        progress: &mut dyn Progress,
    ) -> bool {
        if self.fail_scans {
            return false;
        }
        let total = self.games.len().max(1);
        for id in 0..self.games.len().min(mask.len()) {
            if progress.is_cancelled() {
                return false;
            }
            progress.report_progress((id * 100 / total) as u32);
            let matched = self.header_matches(request, id as u32, &self.games[id]);
            apply_scan_result(op, &mut mask[id], matched.then_some(1));
        }
        true
    }

    fn search_board(
        &mut self,
        fen: &str,
        match_kind: MatchKind,
        op: FilterOp,
        mask: &mut [u16],
        progress: &mut dyn Progress,
    ) -> bool {
        if self.fail_scans {
            return false;
        }
        let total = self.games.len().max(1);
        for id in 0..self.games.len().min(mask.len()) {
            if progress.is_cancelled() {
                return false;
            }
            progress.report_progress((id * 100 / total) as u32);
            let hit = match match_kind {
                MatchKind::Any => self.games[id].positions.first().map(|&(_, ply)| ply),
                _ => self.games[id]
                    .positions
                    .iter()
                    .find(|(candidate, _)| candidate == fen)
                    .map(|&(_, ply)| ply),
            };
            apply_scan_result(op, &mut mask[id], hit);
        }
        true
    }

    fn favorites(&mut self, _progress: &mut dyn Progress) -> Vec<u32> {
        self.games
            .iter()
            .enumerate()
            .filter(|(_, g)| g.favorite)
            .map(|(id, _)| id as u32)
            .collect()
    }

    fn set_favorite(&mut self, favorite: bool) -> bool {
        match self.current {
            Some(id) => {
                self.games[id].favorite = favorite;
                true
            }
            None => false,
        }
    }

    fn set_deleted(&mut self, deleted: bool) -> bool {
        match self.current {
            Some(id) => {
                self.games[id].deleted = deleted;
                true
            }
            None => false,
        }
    }

    fn save_game(&mut self, id: u32, pgn: &str) -> Option<String> {
        match self.games.get_mut(id as usize) {
            Some(game) => {
                game.pgn = pgn.to_string();
                None
            }
            None => Some(format!("no game with id {id}")),
        }
    }

    fn export_filter(&mut self, _path: &str, mask: &[u16], _progress: &mut dyn Progress) -> bool {
        self.loaded && mask.len() == self.games.len()
    }

    fn create(&mut self, _path: &str) -> Option<String> {
        self.games.clear();
        self.loaded = true;
        self.current = None;
        None
    }

    fn import_pgn(&mut self, _path: &str, _progress: &mut dyn Progress) -> Option<String> {
        Some("PGN import is not available in the in-memory store".to_string())
    }
}

/// Applies one game's scan outcome to its mask slot under the filter
/// operation: IGNORE overwrites, OR only adds, AND only retains or zeroes.
fn apply_scan_result(op: FilterOp, slot: &mut u16, matched: Option<u16>) {
    match op {
        FilterOp::Ignore => *slot = matched.unwrap_or(0),
        FilterOp::Or => {
            if *slot == 0 {
                *slot = matched.unwrap_or(0);
            }
        }
        FilterOp::And => {
            if *slot > 0 && matched.is_none() {
                *slot = 0;
            }
        }
    }
}
