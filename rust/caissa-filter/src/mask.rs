//! Seeding of scan masks from a prior filter.
//!
//! A scan receives an in-out mask sized to the store. The mask handed in
//! determines which games the scan treats as its base set; the operation
//! code is interpreted by the scan itself (OR may only add entries, AND may
//! only retain or zero them). Everything this layer decides is *what the
//! seed looks like*, which keeps "which games are eligible for refinement"
//! out of the scan primitive.

use crate::filter::GameFilter;

/// How a new scan combines with the prior filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterOp {
    /// Start from scratch; the prior filter is not consulted.
    #[default]
    Ignore,
    /// The scan may only add games to the prior selection.
    Or,
    /// The scan may only narrow the prior selection.
    And,
}

impl FilterOp {
    /// Parses an operation code from free text: `0` = IGNORE, `1` = OR,
    /// `2` = AND. Absent or unparsable text falls back to IGNORE.
    pub fn parse(arg: Option<&str>) -> FilterOp {
        match arg.and_then(|s| s.trim().parse::<u32>().ok()) {
            Some(1) => FilterOp::Or,
            Some(2) => FilterOp::And,
            _ => FilterOp::Ignore,
        }
    }
}

/// The operation actually handed to a scan: with no prior filter there is
/// nothing to combine with, so OR and AND collapse to IGNORE. Callers rely
/// on this when they pass OR/AND on the first scan.
pub fn effective_op(op: FilterOp, prior: Option<&GameFilter>) -> FilterOp {
    if prior.is_some() { op } else { FilterOp::Ignore }
}

/// Prepares the dense mask handed to a scan, seeded according to `op` and
/// the prior filter.
///
/// With no prior filter every game is included (ply 1) regardless of `op`,
/// matching the [`effective_op`] collapse.
pub fn seed_mask(op: FilterOp, prior: Option<&GameFilter>, len: usize) -> Vec<u16> {
    match (op, prior) {
        (FilterOp::Ignore, _) | (_, None) => vec![1; len],
        (FilterOp::Or | FilterOp::And, Some(filter)) => {
            let mut mask = vec![0; len];
            for (id, ply) in filter.iter() {
                if let Some(slot) = mask.get_mut(id as usize) {
                    *slot = ply;
                }
            }
            mask
        }
    }
}
