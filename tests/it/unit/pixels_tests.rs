//! Unit tests for the pixel set.

use pixelboard::{Cell, PixelSet};

fn black() -> String {
    "#000000".to_string()
}

#[test]
fn test_new_set_is_empty() {
    let set = PixelSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[test]
fn test_add_then_remove_restores_prior_state() {
    let empty = PixelSet::new();
    let mut set = empty.clone();
    set.add(Cell::new(3, 4), black());
    set.remove(Cell::new(3, 4));
    assert_eq!(set, empty);
}

#[test]
fn test_add_overwrites_color_last_write_wins() {
    let mut set = PixelSet::new();
    let cell = Cell::new(1, 1);
    set.add(cell, "#ff0000".to_string());
    set.add(cell, "#00ff00".to_string());
    assert_eq!(set.get(cell).map(String::as_str), Some("#00ff00"));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_remove_absent_cell_is_noop() {
    let mut set = PixelSet::new();
    set.add(Cell::new(0, 0), black());
    set.remove(Cell::new(5, 5));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_cells_with_swapped_coordinates_are_distinct() {
    // The keying must be injective: (1, 12) and (11, 2) or (12, 1) must
    // never collide.
    let mut set = PixelSet::new();
    set.add(Cell::new(1, 12), "#111111".to_string());
    set.add(Cell::new(12, 1), "#222222".to_string());
    set.add(Cell::new(11, 2), "#333333".to_string());
    assert_eq!(set.len(), 3);
    assert_eq!(set.get(Cell::new(1, 12)).map(String::as_str), Some("#111111"));
    assert_eq!(set.get(Cell::new(12, 1)).map(String::as_str), Some("#222222"));
}

#[test]
fn test_apply_line_paints_union_without_mutating_original() {
    let mut set = PixelSet::new();
    set.add(Cell::new(9, 9), black());

    let next = set.apply_line(Cell::new(0, 0), Cell::new(3, 0), &black(), false);

    // Original untouched
    assert_eq!(set.len(), 1);

    // New state: prior cell plus the line, start exclusive
    assert_eq!(next.len(), 4);
    assert!(!next.contains(Cell::new(0, 0)));
    for x in 1..=3 {
        assert!(next.contains(Cell::new(x, 0)), "missing ({}, 0)", x);
    }
    assert!(next.contains(Cell::new(9, 9)));
}

#[test]
fn test_apply_line_erases_difference() {
    let mut set = PixelSet::new();
    for x in 0..5 {
        set.add(Cell::new(x, 0), black());
    }
    set.add(Cell::new(0, 3), black());

    let next = set.apply_line(Cell::new(1, 0), Cell::new(4, 0), &black(), true);

    // The erased line excludes its start cell
    assert!(next.contains(Cell::new(0, 0)));
    assert!(next.contains(Cell::new(1, 0)));
    for x in 2..5 {
        assert!(!next.contains(Cell::new(x, 0)), "({}, 0) should be erased", x);
    }
    // Unrelated cells survive
    assert!(next.contains(Cell::new(0, 3)));
}

#[test]
fn test_apply_degenerate_line_changes_nothing() {
    let mut set = PixelSet::new();
    set.add(Cell::new(2, 2), black());
    let next = set.apply_line(Cell::new(2, 2), Cell::new(2, 2), &black(), false);
    assert_eq!(next, set);
}

#[test]
fn test_clear_empties_the_set() {
    let mut set = PixelSet::new();
    set.add(Cell::new(1, 1), black());
    set.add(Cell::new(2, 2), black());
    set.clear();
    assert!(set.is_empty());
}
