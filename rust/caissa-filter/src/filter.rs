//! Ordered sparse selection of game ids with per-game ply annotations.
//!
//! GameFilter models the outcome of one scan over a store of N games. It
//! pairs each selected game id with the ply at which the searched-for
//! position occurred in that game (1 for non-positional scans).
//!
//! Key properties and invariants
//! - `ids` is strictly ascending and unique, enabling binary search by id.
//! - `ids` and `plies` have the same length; every ply is >= 1.
//! - A filter is immutable after construction. A follow-up scan produces a
//!   new filter; it never mutates the prior one.

/// An ordered sparse selection of game ids, each carrying the ply at which
/// the match occurred.
///
/// Construct via [`GameFilter::from_mask`] (compaction of a dense scan mask)
/// or [`GameFilter::from_ids`] (pre-sorted id list, ply defaulting to 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFilter {
    ids: Vec<u32>,
    plies: Vec<u16>,
}

impl GameFilter {
    /// Compacts a dense mask into a filter.
    ///
    /// `mask[game_id]` of zero means the game is excluded; a positive value
    /// means the game is included and carries that value as its ply.
    ///
    /// Complexity: O(n) in the mask length, O(k) extra space for k matches.
    pub fn from_mask(mask: &[u16]) -> GameFilter {
        let count = mask.iter().filter(|&&ply| ply > 0).count();
        let mut ids = Vec::with_capacity(count);
        let mut plies = Vec::with_capacity(count);
        for (id, &ply) in mask.iter().enumerate() {
            if ply > 0 {
                ids.push(id as u32);
                plies.push(ply);
            }
        }
        GameFilter { ids, plies }
    }

    /// Builds a filter from an ascending list of game ids, with every ply
    /// defaulting to 1.
    ///
    /// The caller guarantees that `ids` is strictly ascending; violating
    /// this breaks the binary-search contract of [`GameFilter::position_of`].
    pub fn from_ids(ids: Vec<u32>) -> GameFilter {
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids must be ascending");
        let plies = vec![1; ids.len()];
        GameFilter { ids, plies }
    }

    /// Returns the number of selected games.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no game is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the game id at the given filter position, or `None` if the
    /// position is outside the filter.
    #[inline]
    pub fn game_id(&self, position: usize) -> Option<u32> {
        self.ids.get(position).copied()
    }

    /// Returns the ply recorded for the given filter position, or `None` if
    /// the position is outside the filter.
    #[inline]
    pub fn ply(&self, position: usize) -> Option<u16> {
        self.plies.get(position).copied()
    }

    /// Locates a game id within the filter.
    ///
    /// Returns the filter position of `game_id`, or `None` when the game is
    /// not selected. Callers must treat `None` as "row excluded", never as a
    /// retryable condition.
    ///
    /// Complexity: O(log n).
    pub fn position_of(&self, game_id: u32) -> Option<usize> {
        self.ids.binary_search(&game_id).ok()
    }

    /// Iterates over the selected `(game_id, ply)` pairs in ascending id
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u16)> + '_ {
        self.ids.iter().copied().zip(self.plies.iter().copied())
    }
}
