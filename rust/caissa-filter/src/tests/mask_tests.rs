use crate::{FilterOp, GameFilter, effective_op, seed_mask};

#[test]
fn test_parse_operation_codes() {
    assert_eq!(FilterOp::parse(Some("0")), FilterOp::Ignore);
    assert_eq!(FilterOp::parse(Some("1")), FilterOp::Or);
    assert_eq!(FilterOp::parse(Some("2")), FilterOp::And);
    assert_eq!(FilterOp::parse(Some(" 2 ")), FilterOp::And);
}

#[test]
fn test_parse_falls_back_to_ignore() {
    assert_eq!(FilterOp::parse(None), FilterOp::Ignore);
    assert_eq!(FilterOp::parse(Some("")), FilterOp::Ignore);
    assert_eq!(FilterOp::parse(Some("union")), FilterOp::Ignore);
    assert_eq!(FilterOp::parse(Some("7")), FilterOp::Ignore);
}

#[test]
fn test_seed_ignore_includes_everything() {
    let prior = GameFilter::from_mask(&[0, 4, 0, 0, 2]);
    let mask = seed_mask(FilterOp::Ignore, Some(&prior), 5);
    assert_eq!(mask, vec![1; 5]);
}

#[test]
fn test_effective_op_collapses_without_prior_filter() {
    let prior = GameFilter::from_mask(&[0, 1]);
    for op in [FilterOp::Ignore, FilterOp::Or, FilterOp::And] {
        assert_eq!(effective_op(op, None), FilterOp::Ignore);
        assert_eq!(effective_op(op, Some(&prior)), op);
    }
}

#[test]
fn test_seed_without_prior_filter_includes_everything() {
    // OR and AND collapse to IGNORE when there is no base to combine with.
    for op in [FilterOp::Ignore, FilterOp::Or, FilterOp::And] {
        let mask = seed_mask(op, None, 4);
        assert_eq!(mask, vec![1; 4], "op {op:?}");
    }
}

#[test]
fn test_seed_or_and_scatter_prior_plies() {
    let prior = GameFilter::from_mask(&[0, 4, 0, 0, 2, 0]);
    for op in [FilterOp::Or, FilterOp::And] {
        let mask = seed_mask(op, Some(&prior), 6);
        assert_eq!(mask, vec![0, 4, 0, 0, 2, 0], "op {op:?}");
    }
}

#[test]
fn test_seed_clips_prior_ids_beyond_mask() {
    // A filter built against a larger store must not overflow a shorter mask.
    let prior = GameFilter::from_mask(&[0, 1, 0, 1, 1]);
    let mask = seed_mask(FilterOp::And, Some(&prior), 3);
    assert_eq!(mask, vec![0, 1, 0]);
}

#[test]
fn test_and_scan_cannot_introduce_new_ids() {
    let prior = GameFilter::from_mask(&[0, 1, 0, 1, 0]);
    let mask = seed_mask(FilterOp::And, Some(&prior), 5);

    // A well-behaved AND scan only retains or zeroes seeded slots. Whatever
    // it does, the compacted result stays a subset of the prior selection.
    let narrowed: Vec<u16> = mask.iter().enumerate().map(|(id, &ply)| if id == 1 { ply } else { 0 }).collect();
    let combined = GameFilter::from_mask(&narrowed);
    for (id, _) in combined.iter() {
        assert!(prior.position_of(id).is_some());
    }
}

#[test]
fn test_or_seed_preserves_prior_selection() {
    let prior = GameFilter::from_mask(&[0, 3, 0, 0, 8]);
    let mask = seed_mask(FilterOp::Or, Some(&prior), 5);

    // Every game of the prior filter is already present in the seed, so an
    // adding-only scan can never drop it.
    for (id, ply) in prior.iter() {
        assert_eq!(mask[id as usize], ply);
    }
}
