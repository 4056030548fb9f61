//! Grid and cell invariants exercised through the facade

use pixel_blast::core::GridStore;
use pixel_blast::types::{Color, Position, DEFAULT_GRID_SIZE, MAX_LAYERS};

#[test]
fn test_default_grid_dimensions() {
    let grid = GridStore::default();
    assert_eq!(grid.rows(), DEFAULT_GRID_SIZE);
    assert_eq!(grid.columns(), DEFAULT_GRID_SIZE);
    assert!(grid.is_empty());

    for (pos, cell) in grid.iter() {
        assert!(grid.in_bounds(pos));
        assert!(cell.is_empty());
    }
}

#[test]
fn test_layer_count_stays_bounded() {
    let mut grid = GridStore::new(8, 8);
    let pos = Position::new(4, 4);

    // Arbitrary push/pop sequence; the count must never leave [0, 5].
    let moves: [i8; 12] = [1, 1, 1, -1, 1, 1, 1, 1, -1, -1, 1, 1];
    for m in moves {
        if m > 0 {
            grid.push(pos, Color::Orange);
        } else {
            grid.pop_top(pos);
        }
        let count = grid.get_cell(pos).unwrap().layer_count();
        assert!(count <= MAX_LAYERS);
    }
}

#[test]
fn test_push_onto_full_cell_changes_nothing() {
    let mut grid = GridStore::new(8, 8);
    let pos = Position::new(0, 0);
    for _ in 0..MAX_LAYERS {
        assert!(grid.push(pos, Color::Red));
    }

    assert!(!grid.push(pos, Color::Blue));
    let cell = grid.get_cell(pos).unwrap();
    assert_eq!(cell.layer_count(), MAX_LAYERS);
    assert_eq!(cell.peek_top(), Some(Color::Red));
}

#[test]
fn test_peek_follows_push_and_pop() {
    let mut grid = GridStore::new(8, 8);
    let pos = Position::new(3, 3);

    assert_eq!(grid.peek_top(pos), None);
    grid.push(pos, Color::Green);
    assert_eq!(grid.peek_top(pos), Some(Color::Green));
    grid.push(pos, Color::White);
    assert_eq!(grid.peek_top(pos), Some(Color::White));

    grid.pop_top(pos);
    assert_eq!(grid.peek_top(pos), Some(Color::Green));
    grid.pop_top(pos);
    assert_eq!(grid.peek_top(pos), None);
}

#[test]
fn test_pop_on_empty_cell_is_a_no_op() {
    let mut grid = GridStore::new(8, 8);
    assert_eq!(grid.pop_top(Position::new(3, 3)), None);
    assert!(grid.is_empty());
}

#[test]
fn test_invalid_positions_never_mutate() {
    let mut grid = GridStore::new(8, 8);

    assert!(!grid.push(Position::new(-1, 0), Color::Red));
    assert!(!grid.push(Position::new(0, 8), Color::Red));
    assert_eq!(grid.pop_top(Position::new(99, 99)), None);
    assert!(grid.is_empty());
}

#[test]
fn test_count_color_includes_buried_layers() {
    let mut grid = GridStore::new(8, 8);
    let pos = Position::new(2, 2);
    grid.push(pos, Color::Red);
    grid.push(pos, Color::Blue);
    grid.push(pos, Color::Red);

    // The bottom red is buried but still counted.
    assert_eq!(grid.count_color(Color::Red), 2);
    assert_eq!(grid.count_color(Color::Blue), 1);
}

#[test]
fn test_is_empty_tracks_every_cell() {
    let mut grid = GridStore::new(5, 5);
    assert!(grid.is_empty());

    grid.push(Position::new(4, 4), Color::Purple);
    assert!(!grid.is_empty());

    grid.pop_top(Position::new(4, 4));
    assert!(grid.is_empty());
}

#[test]
fn test_custom_dimensions() {
    let grid = GridStore::new(5, 10);
    assert_eq!(grid.rows(), 5);
    assert_eq!(grid.columns(), 10);
    assert_eq!(grid.lane_row(), 4);
    assert!(grid.get_cell(Position::new(4, 9)).is_some());
    assert!(grid.get_cell(Position::new(5, 9)).is_none());
}
