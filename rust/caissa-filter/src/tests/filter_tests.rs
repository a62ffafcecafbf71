use crate::GameFilter;

#[test]
fn test_from_mask_keeps_ascending_ids_and_plies() {
    let mask = [0u16, 3, 0, 0, 7, 1, 0, 2];
    let filter = GameFilter::from_mask(&mask);

    assert_eq!(filter.len(), 4);
    let pairs: Vec<_> = filter.iter().collect();
    assert_eq!(pairs, vec![(1, 3), (4, 7), (5, 1), (7, 2)]);

    // Every reported id carries exactly the mask value at that slot.
    for (id, ply) in filter.iter() {
        assert_eq!(mask[id as usize], ply);
    }
}

#[test]
fn test_from_mask_empty_and_all_zero() {
    assert!(GameFilter::from_mask(&[]).is_empty());

    let filter = GameFilter::from_mask(&[0; 64]);
    assert!(filter.is_empty());
    assert_eq!(filter.game_id(0), None);
    assert_eq!(filter.ply(0), None);
}

#[test]
fn test_from_mask_all_included() {
    let mask = vec![1u16; 100];
    let filter = GameFilter::from_mask(&mask);
    assert_eq!(filter.len(), 100);
    assert_eq!(filter.game_id(99), Some(99));
    assert_eq!(filter.ply(99), Some(1));
}

#[test]
fn test_from_ids_defaults_plies_to_one() {
    let filter = GameFilter::from_ids(vec![2, 9, 11, 40]);
    assert_eq!(filter.len(), 4);
    for position in 0..filter.len() {
        assert_eq!(filter.ply(position), Some(1));
    }
    assert_eq!(filter.game_id(1), Some(9));
}

#[test]
fn test_position_of_round_trip() {
    let mask = [0u16, 2, 0, 5, 0, 0, 9, 1];
    let filter = GameFilter::from_mask(&mask);

    for position in 0..filter.len() {
        let id = filter.game_id(position).unwrap();
        assert_eq!(filter.position_of(id), Some(position));
    }
}

#[test]
fn test_position_of_absent_id() {
    let filter = GameFilter::from_mask(&[0, 1, 0, 1, 0]);
    assert_eq!(filter.position_of(0), None);
    assert_eq!(filter.position_of(2), None);
    assert_eq!(filter.position_of(4), None);
    assert_eq!(filter.position_of(1000), None);
}

#[test]
fn test_accessors_out_of_range() {
    let filter = GameFilter::from_mask(&[1, 0, 1]);
    assert_eq!(filter.len(), 2);
    assert_eq!(filter.game_id(2), None);
    assert_eq!(filter.ply(5), None);
}
