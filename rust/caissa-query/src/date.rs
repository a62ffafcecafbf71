//! Bit-packed game dates.
//!
//! A (year, month, day) triple packs into a single integer so that range
//! comparisons on dates are plain integer comparisons. The shift widths
//! exceed the field ranges (month <= 12, day <= 31 both fit in 5 bits), so
//! integer order matches chronological order for all nonzero years.

/// A game date packed as `year << 9 | month << 5 | day`.
///
/// Year 0 is the "date unknown" sentinel and packs to 0 regardless of month
/// and day, so unknown dates sort before all known dates and compare equal
/// to each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(u32);

impl DateKey {
    pub const YEAR_SHIFT: u32 = 9;
    pub const MONTH_SHIFT: u32 = 5;
    /// Largest year representable by the store's index format.
    pub const YEAR_MAX: u32 = 2047;

    /// Packs a (year, month, day) triple. Inputs are clamped by the caller,
    /// not validated here.
    pub const fn pack(year: u32, month: u32, day: u32) -> DateKey {
        if year == 0 {
            DateKey(0)
        } else {
            DateKey(year << Self::YEAR_SHIFT | month << Self::MONTH_SHIFT | day)
        }
    }

    /// The latest date expressible in the store's index format.
    pub const fn max() -> DateKey {
        Self::pack(Self::YEAR_MAX, 12, 31)
    }

    /// Returns the raw packed integer.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Parses a `"YYYY.MM.DD"`-shaped fragment as an inclusive lower bound.
    ///
    /// Absent, short, or non-numeric segments (`"??"` wildcards included)
    /// degrade to the widest bound for that segment: year 0, month 1, day 1.
    pub fn lower_bound(fragment: &str) -> DateKey {
        Self::pack(
            segment(fragment, 0, 4, 0),
            segment(fragment, 5, 7, 1),
            segment(fragment, 8, 10, 1),
        )
    }

    /// Parses a `"YYYY.MM.DD"`-shaped fragment as an inclusive upper bound.
    ///
    /// Absent, short, or non-numeric segments degrade to year 9999, month
    /// 12, day 31. The 9999 default packs beyond [`DateKey::max`], so an
    /// open upper bound covers every stored date.
    pub fn upper_bound(fragment: &str) -> DateKey {
        Self::pack(
            segment(fragment, 0, 4, 9999),
            segment(fragment, 5, 7, 12),
            segment(fragment, 8, 10, 31),
        )
    }
}

/// Extracts the numeric segment at `[start, end)` of a date fragment,
/// falling back to `default` when the fragment is too short or the segment
/// does not parse.
fn segment(fragment: &str, start: usize, end: usize, default: u32) -> u32 {
    fragment
        .get(start..end)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
