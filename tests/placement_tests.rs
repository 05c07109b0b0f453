use rand::{rngs::SmallRng, SeedableRng};
use salvo::{
    count_placements, enumerate, nth_placement, random_placement, Cell, Grid, Orientation,
    ShipSpec,
};

#[test]
fn test_single_ship_on_4x4_has_24_placements() {
    let specs = [ShipSpec::new(1, 2)];
    let placements = enumerate(&Grid::new(4), &specs, None);
    assert_eq!(placements.len(), 24);
    for (i, a) in placements.iter().enumerate() {
        assert_eq!(a.ship_cells(1).len(), 2);
        for b in &placements[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_discovery_order() {
    let specs = [ShipSpec::new(1, 2), ShipSpec::new(2, 2)];
    let placements = enumerate(&Grid::new(2), &specs, None);
    assert_eq!(placements.len(), 4);

    // first ship horizontal on the top row, second fills the bottom row
    assert_eq!(placements[0].ship_cells(1), vec![(0, 0), (1, 0)]);
    assert_eq!(placements[0].ship_cells(2), vec![(0, 1), (1, 1)]);
    // then vertical in the left column
    assert_eq!(placements[1].ship_cells(1), vec![(0, 0), (0, 1)]);
    assert_eq!(placements[1].ship_cells(2), vec![(1, 0), (1, 1)]);
    assert_eq!(placements[2].ship_cells(1), vec![(1, 0), (1, 1)]);
    assert_eq!(placements[3].ship_cells(1), vec![(0, 1), (1, 1)]);
}

#[test]
fn test_fleet_too_large_has_no_placements() {
    let specs = [ShipSpec::new(1, 5)];
    assert!(enumerate(&Grid::new(4), &specs, None).is_empty());
    assert_eq!(count_placements(&Grid::new(4), &specs), 0);
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(random_placement(&Grid::new(4), &specs, &mut rng).is_none());
}

#[test]
fn test_no_specs_yields_grid_itself() {
    let grid = Grid::new(3);
    let placements = enumerate(&grid, &[], None);
    assert_eq!(placements, vec![grid]);
}

#[test]
fn test_filter_applies_to_complete_placements() {
    let specs = [ShipSpec::new(1, 2)];
    let covers_origin = |g: &Grid| g.get(0, 0).is_some_and(|c| c.ship().is_some());
    let placements = enumerate(&Grid::new(4), &specs, Some(&covers_origin));
    assert_eq!(placements.len(), 2);
}

#[test]
fn test_blocked_cells_are_avoided() {
    let grid = Grid::new(3).place_region((1, 1), (2, 2), Cell::Blocked).unwrap();
    let placements = enumerate(&grid, &[ShipSpec::new(1, 3)], None);
    assert_eq!(placements.len(), 4);
    for placement in &placements {
        assert_eq!(placement.get(1, 1), Some(&Cell::Blocked));
    }
}

#[test]
fn test_count_and_nth_agree_with_enumerate() {
    let specs = [ShipSpec::new(1, 2), ShipSpec::new(2, 3)];
    let grid = Grid::new(4);
    let placements = enumerate(&grid, &specs, None);
    assert_eq!(count_placements(&grid, &specs), placements.len());
    assert_eq!(nth_placement(&grid, &specs, 0).as_ref(), placements.first());
    assert_eq!(
        nth_placement(&grid, &specs, placements.len() - 1).as_ref(),
        placements.last()
    );
    assert!(nth_placement(&grid, &specs, placements.len()).is_none());
}

#[test]
fn test_random_placement_is_reproducible() {
    let specs = [ShipSpec::new(1, 2), ShipSpec::new(2, 3)];
    let grid = Grid::new(4);
    let a = random_placement(&grid, &specs, &mut SmallRng::seed_from_u64(42)).unwrap();
    let b = random_placement(&grid, &specs, &mut SmallRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
    assert!(enumerate(&grid, &specs, None).contains(&a));
}

#[test]
fn test_zero_size_ship_has_no_placements() {
    assert!(enumerate(&Grid::new(2), &[ShipSpec::new(1, 0)], None).is_empty());
    let specs = [ShipSpec::new(1, 2), ShipSpec::new(2, 0)];
    assert_eq!(count_placements(&Grid::new(3), &specs), 0);
}

#[test]
fn test_span_rejects_empty_and_overflowing_runs() {
    assert_eq!(Orientation::Horizontal.span((1, 2), 3), Some((4, 3)));
    assert_eq!(Orientation::Vertical.span((1, 2), 3), Some((2, 5)));
    assert_eq!(Orientation::Horizontal.span((0, 0), 0), None);
    assert_eq!(Orientation::Horizontal.span((usize::MAX, 0), 2), None);
    assert_eq!(Orientation::Vertical.span((0, usize::MAX - 1), 2), None);
    assert!(enumerate(&Grid::new(2), &[ShipSpec::new(1, usize::MAX)], None).is_empty());
}
