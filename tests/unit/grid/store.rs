use super::*;

fn grid_3x2() -> Grid<u32> {
    Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap()
}

#[test]
fn from_rows_rejects_ragged_input() {
    let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
    assert!(matches!(err, TableError::Shape(_)));
    assert!(Grid::<u32>::from_rows(vec![vec![]]).is_err());
    assert!(Grid::<u32>::from_rows(vec![]).unwrap().is_empty());
}

#[test]
fn counts_and_access() {
    let g = grid_3x2();
    assert_eq!(g.row_count(), 3);
    assert_eq!(g.column_count(), 2);
    assert!(g.is_rectangular());
    assert_eq!(g.get_cell(2, 1), Some(&6));
    assert_eq!(g.get_cell(3, 0), None);
    assert_eq!(g.get_row(1), Some(&[3, 4][..]));
    assert_eq!(g.get_column(1), vec![&2, &4, &6]);
    assert!(g.get_column(2).is_empty());
}

#[test]
fn insert_row_before_first() {
    let mut g = grid_3x2();
    assert!(g.insert_row(vec![9, 9], 0, Side::Before).unwrap());
    assert_eq!(g.row_count(), 4);
    assert_eq!(g.get_row(0), Some(&[9, 9][..]));
    assert_eq!(g.get_row(1), Some(&[1, 2][..]));
}

#[test]
fn insert_row_after_then_remove_restores() {
    let original = grid_3x2();
    let mut g = original.clone();
    assert!(g.insert_row(vec![7, 8], 1, Side::After).unwrap());
    assert_eq!(g.get_row(2), Some(&[7, 8][..]));
    assert_eq!(g.remove_row(2), Some(vec![7, 8]));
    assert_eq!(g, original);
}

#[test]
fn insert_with_missing_anchor_is_noop() {
    let mut g = grid_3x2();
    assert!(!g.insert_row(vec![0, 0], 3, Side::After).unwrap());
    assert!(!g.insert_column(vec![0, 0, 0], 5, Side::Before).unwrap());
    assert_eq!(g, grid_3x2());
}

#[test]
fn insert_rejects_wrong_length() {
    let mut g = grid_3x2();
    assert!(g.insert_row(vec![1, 2, 3], 0, Side::After).is_err());
    assert!(g.insert_column(vec![1], 0, Side::After).is_err());
    assert_eq!(g, grid_3x2());
}

#[test]
fn insert_column_and_remove_column() {
    let mut g = grid_3x2();
    assert!(g.insert_column(vec![0, 0, 0], 0, Side::Before).unwrap());
    assert_eq!(g.get_row(2), Some(&[0, 5, 6][..]));
    assert_eq!(g.remove_column(0), Some(vec![0, 0, 0]));
    assert_eq!(g, grid_3x2());
}

#[test]
fn empty_grid_accepts_anchor_zero_only() {
    let mut g = Grid::<u32>::new();
    assert!(!g.insert_row(vec![1], 1, Side::After).unwrap());
    assert!(g.insert_row(vec![1, 2], 0, Side::Before).unwrap());
    assert_eq!(g.row_count(), 1);

    let mut g = Grid::<u32>::new();
    assert!(g.insert_column(vec![1, 2], 0, Side::After).unwrap());
    assert_eq!((g.row_count(), g.column_count()), (2, 1));
}

#[test]
fn removing_last_column_empties_grid() {
    let mut g = Grid::from_rows(vec![vec![1], vec![2]]).unwrap();
    assert_eq!(g.remove_column(0), Some(vec![1, 2]));
    assert!(g.is_empty());
    assert_eq!(g.row_count(), 0);
    assert_eq!(g.remove_column(0), None);
}

#[test]
fn set_row_and_column() {
    let mut g = grid_3x2();
    assert!(g.set_row(0, vec![10, 20]).unwrap());
    assert!(g.set_column(1, vec![0, 0, 0]).unwrap());
    assert_eq!(g.get_row(0), Some(&[10, 0][..]));
    assert!(!g.set_row(9, vec![1, 1]).unwrap());
    assert!(g.set_row(0, vec![1]).is_err());
    assert!(g.set_column(0, vec![1]).is_err());
}

#[test]
fn map_and_iteration_helpers() {
    let g = grid_3x2();
    let doubled = g.map(|v| v * 2);
    assert_eq!(doubled.get_cell(1, 1), Some(&8));

    let tagged = g.map_indexed(|r, c, _| (r, c));
    assert_eq!(tagged.get_cell(2, 0), Some(&(2, 0)));

    let cells: Vec<(usize, usize, u32)> = g.iter_cells().map(|(r, c, v)| (r, c, *v)).collect();
    assert_eq!(cells[3], (1, 1, 4));

    let mut column_sums = Vec::new();
    g.for_each_column(|_, col| column_sums.push(col.into_iter().sum::<u32>()));
    assert_eq!(column_sums, vec![9, 12]);

    let mut row_idx = Vec::new();
    g.for_each_row(|i, _| row_idx.push(i));
    assert_eq!(row_idx, vec![0, 1, 2]);

    assert_eq!(g.count_rows_where(|r| r[0] > 1), 2);
    assert!(g.any_row(|r| r.contains(&6)));
    assert!(g.any_column(|c| c.iter().all(|v| **v % 2 == 0)));
    assert!(!g.any_column(|c| c.is_empty()));
}

#[test]
fn serde_is_plain_rows_and_rejects_ragged() {
    let g = grid_3x2();
    let json = serde_json::to_string(&g).unwrap();
    assert_eq!(json, "[[1,2],[3,4],[5,6]]");
    let back: Grid<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, g);
    assert!(serde_json::from_str::<Grid<u32>>("[[1,2],[3]]").is_err());
}

#[test]
fn insertion_position_rules() {
    assert_eq!(insertion_position(0, Side::After, 0), Some(0));
    assert_eq!(insertion_position(1, Side::After, 0), None);
    assert_eq!(insertion_position(2, Side::Before, 3), Some(2));
    assert_eq!(insertion_position(2, Side::After, 3), Some(3));
    assert_eq!(insertion_position(3, Side::After, 3), None);
}
