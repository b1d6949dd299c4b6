//! Grid scan-order sorting.
//!
//! Sprites are ordered in two stable passes: the whole sequence by `y`, then
//! each run of `width` consecutive records (one grid row) by `x`. At most
//! `height` rows are sorted; records past `width * height` stay in `y` order.

use serde::Serialize;

use crate::error::SortError;
use crate::record::SpriteRecord;

/// Default grid width (columns per row).
pub const DEFAULT_WIDTH: usize = 12;

/// Default grid height (rows).
pub const DEFAULT_HEIGHT: usize = 8;

/// Dimensions of the sprite grid. Both are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridSize {
    width: usize,
    height: usize,
}

impl GridSize {
    /// Creates a grid size, rejecting zero dimensions.
    pub fn new(width: usize, height: usize) -> Result<Self, SortError> {
        if width == 0 || height == 0 {
            return Err(SortError::InvalidGrid { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of records the grid holds (`width * height`, saturating).
    pub fn capacity(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Outcome of a grid sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSummary {
    /// Number of records sorted.
    pub record_count: usize,
    /// Number of row windows sorted by `x` (the last may be short).
    pub windows_sorted: usize,
    /// Records past `width * height`, ordered by `y` only.
    pub overflow: usize,
}

/// Sorts records into grid scan order in place.
///
/// # Example
/// ```
/// use spritesort_core::{grid_sort, GridSize, SpriteRecord};
///
/// let mut records = vec![SpriteRecord::new(1, 1), SpriteRecord::new(0, 0)];
/// let summary = grid_sort(&mut records, GridSize::new(2, 1).unwrap());
///
/// assert_eq!(records[0].x(), 0);
/// assert_eq!(summary.windows_sorted, 1);
/// ```
pub fn grid_sort(records: &mut [SpriteRecord], grid: GridSize) -> SortSummary {
    // slice::sort_by_key is stable
    records.sort_by_key(SpriteRecord::y);

    let mut windows_sorted = 0;
    for window in records.chunks_mut(grid.width).take(grid.height) {
        window.sort_by_key(SpriteRecord::x);
        windows_sorted += 1;
    }

    SortSummary {
        record_count: records.len(),
        windows_sorted,
        overflow: records.len().saturating_sub(grid.capacity()),
    }
}

/// A position inside a row window whose `x` is lower than its predecessor's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowViolation {
    /// Zero-based window (row) index.
    pub window: usize,
    /// Absolute position in the sequence.
    pub position: usize,
    pub previous_x: i64,
    pub x: i64,
}

/// A position whose `y` is lower than its predecessor's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowInversion {
    pub position: usize,
    pub previous_y: i64,
    pub y: i64,
}

/// Read-only report of how far a sequence is from grid scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReport {
    pub grid: GridSize,
    pub record_count: usize,
    /// Windows inside the `height` bound that contain at least one record.
    pub window_count: usize,
    pub violations: Vec<WindowViolation>,
    pub row_inversions: Vec<RowInversion>,
    pub overflow: usize,
    /// True when [`grid_sort`] would leave the sequence unchanged.
    pub is_fixed_point: bool,
}

impl OrderReport {
    /// True when every record lies inside the grid.
    pub fn fits_grid(&self) -> bool {
        self.overflow == 0
    }
}

/// Inspects a sequence without modifying it.
///
/// Inversions and violations describe local disorder. They do not decide
/// `is_fixed_point` on their own: a row inversion inside a single window can
/// be undone by the column pass, so the fixed-point check re-sorts a copy.
pub fn inspect_order(records: &[SpriteRecord], grid: GridSize) -> OrderReport {
    let row_inversions: Vec<RowInversion> = records
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[1].y() < pair[0].y())
        .map(|(i, pair)| RowInversion {
            position: i + 1,
            previous_y: pair[0].y(),
            y: pair[1].y(),
        })
        .collect();

    let mut violations = Vec::new();
    let mut window_count = 0;
    for (window_index, window) in records.chunks(grid.width).take(grid.height).enumerate() {
        window_count += 1;
        let start = window_index * grid.width;
        for (offset, pair) in window.windows(2).enumerate() {
            if pair[1].x() < pair[0].x() {
                violations.push(WindowViolation {
                    window: window_index,
                    position: start + offset + 1,
                    previous_x: pair[0].x(),
                    x: pair[1].x(),
                });
            }
        }
    }

    let is_fixed_point = (violations.is_empty() && row_inversions.is_empty()) || {
        let mut resorted = records.to_vec();
        grid_sort(&mut resorted, grid);
        resorted == records
    };

    OrderReport {
        grid,
        record_count: records.len(),
        window_count,
        is_fixed_point,
        violations,
        row_inversions,
        overflow: records.len().saturating_sub(grid.capacity()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tagged(x: i64, y: i64, id: &str) -> SpriteRecord {
        SpriteRecord::new(x, y).with_field("id", id)
    }

    fn ids(records: &[SpriteRecord]) -> Vec<&str> {
        records
            .iter()
            .map(|r| r.get("id").and_then(|v| v.as_str()).unwrap_or("?"))
            .collect()
    }

    fn grid(width: usize, height: usize) -> GridSize {
        GridSize::new(width, height).unwrap()
    }

    #[test]
    fn test_grid_size_rejects_zero() {
        assert!(matches!(
            GridSize::new(0, 8),
            Err(SortError::InvalidGrid { width: 0, height: 8 })
        ));
        assert!(GridSize::new(12, 0).is_err());
    }

    #[test]
    fn test_grid_size_default_and_display() {
        let g = GridSize::default();
        assert_eq!((g.width(), g.height()), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!(g.to_string(), "12x8");
        assert_eq!(g.capacity(), 96);
    }

    #[test]
    fn test_capacity_saturates() {
        assert_eq!(grid(usize::MAX, 2).capacity(), usize::MAX);
    }

    #[test]
    fn test_two_record_swap() {
        let mut records = vec![tagged(1, 1, "b"), tagged(0, 0, "a")];
        let summary = grid_sort(&mut records, grid(2, 1));
        assert_eq!(ids(&records), vec!["a", "b"]);
        assert_eq!(
            summary,
            SortSummary {
                record_count: 2,
                windows_sorted: 1,
                overflow: 0,
            }
        );
    }

    #[test]
    fn test_rows_then_columns() {
        let mut records = vec![
            tagged(5, 1, "a"),
            tagged(5, 0, "b"),
            tagged(1, 1, "c"),
            tagged(1, 0, "d"),
        ];
        grid_sort(&mut records, grid(2, 2));
        assert_eq!(ids(&records), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let mut records = vec![
            tagged(3, 0, "first"),
            tagged(3, 0, "second"),
            tagged(3, 0, "third"),
        ];
        grid_sort(&mut records, grid(3, 1));
        assert_eq!(ids(&records), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_short_final_window() {
        let mut records = vec![
            tagged(2, 1, "e"),
            tagged(1, 0, "b"),
            tagged(0, 0, "a"),
            tagged(1, 1, "d"),
            tagged(2, 0, "c"),
        ];
        let summary = grid_sort(&mut records, grid(3, 2));
        assert_eq!(ids(&records), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(summary.windows_sorted, 2);
        assert_eq!(summary.overflow, 0);
    }

    #[test]
    fn test_height_larger_than_collection() {
        let mut records = vec![tagged(1, 0, "b"), tagged(0, 0, "a")];
        let summary = grid_sort(&mut records, grid(2, 50));
        assert_eq!(ids(&records), vec!["a", "b"]);
        assert_eq!(summary.windows_sorted, 1);
    }

    #[test]
    fn test_records_beyond_grid_keep_row_order() {
        let mut records = vec![
            tagged(1, 0, "b"),
            tagged(0, 0, "a"),
            tagged(9, 1, "z"),
            tagged(3, 1, "y"),
        ];
        let summary = grid_sort(&mut records, grid(2, 1));
        // second row is outside the grid, so only the y pass applies to it
        assert_eq!(ids(&records), vec!["a", "b", "z", "y"]);
        assert_eq!(summary.overflow, 2);
        assert_eq!(summary.windows_sorted, 1);
    }

    #[test]
    fn test_empty_input() {
        let mut records: Vec<SpriteRecord> = Vec::new();
        let summary = grid_sort(&mut records, GridSize::default());
        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.windows_sorted, 0);
    }

    #[test]
    fn test_window_split_by_position_not_row() {
        // three records share y=0 but the window is two wide
        let mut records = vec![
            tagged(2, 0, "c"),
            tagged(1, 0, "b"),
            tagged(0, 0, "a"),
            tagged(0, 1, "d"),
        ];
        grid_sort(&mut records, grid(2, 2));
        assert_eq!(ids(&records), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_inspect_sorted_sequence() {
        let mut records = vec![tagged(1, 1, "b"), tagged(0, 0, "a")];
        grid_sort(&mut records, grid(2, 1));
        let report = inspect_order(&records, grid(2, 1));
        assert!(report.is_fixed_point);
        assert!(report.violations.is_empty());
        assert!(report.row_inversions.is_empty());
        assert_eq!(report.window_count, 1);
        assert!(report.fits_grid());
    }

    #[test]
    fn test_inspect_reports_violations() {
        let records = vec![
            tagged(0, 0, "a"),
            tagged(4, 0, "b"),
            tagged(2, 1, "c"),
            tagged(1, 0, "d"),
        ];
        let report = inspect_order(&records, grid(2, 2));
        assert!(!report.is_fixed_point);
        assert_eq!(
            report.violations,
            vec![WindowViolation {
                window: 1,
                position: 3,
                previous_x: 2,
                x: 1,
            }]
        );
        assert_eq!(
            report.row_inversions,
            vec![RowInversion {
                position: 3,
                previous_y: 1,
                y: 0,
            }]
        );
    }

    #[test]
    fn test_inspect_agrees_with_resort() {
        let records = vec![
            tagged(3, 2, "a"),
            tagged(1, 0, "b"),
            tagged(2, 0, "c"),
            tagged(0, 2, "d"),
            tagged(7, 1, "e"),
        ];
        let g = grid(2, 2);
        for candidate in [records.clone(), {
            let mut sorted = records.clone();
            grid_sort(&mut sorted, g);
            sorted
        }] {
            let mut resorted = candidate.clone();
            grid_sort(&mut resorted, g);
            assert_eq!(
                inspect_order(&candidate, g).is_fixed_point,
                resorted == candidate
            );
        }
    }

    #[test]
    fn test_inversion_undone_by_column_pass() {
        // y-sort swaps the pair, the x pass swaps it back
        let records = vec![tagged(0, 1, "a"), tagged(1, 0, "b")];
        let report = inspect_order(&records, grid(2, 1));
        assert_eq!(report.row_inversions.len(), 1);
        assert!(report.is_fixed_point);
    }

    #[test]
    fn test_inspect_counts_overflow() {
        let records = vec![tagged(0, 0, "a"), tagged(1, 0, "b"), tagged(2, 0, "c")];
        let report = inspect_order(&records, grid(1, 2));
        assert_eq!(report.overflow, 1);
        assert_eq!(report.window_count, 2);
        assert!(!report.fits_grid());
        assert!(report.is_fixed_point);
    }
}
