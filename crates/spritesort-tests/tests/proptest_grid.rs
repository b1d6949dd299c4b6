//! Property-based tests for grid sorting using proptest.
//!
//! Every record carries its original index in an `idx` field so that
//! identity and relative order can be tracked through the sort.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p spritesort-tests --test proptest_grid
//! ```

use proptest::prelude::*;

use spritesort_core::{grid_sort, inspect_order, GridSize, SpriteRecord};

fn idx(record: &SpriteRecord) -> u64 {
    record.get("idx").and_then(|v| v.as_u64()).unwrap_or(u64::MAX)
}

/// Records with small coordinate ranges so that ties are common.
fn arbitrary_records() -> impl Strategy<Value = Vec<SpriteRecord>> {
    prop::collection::vec((-4i64..4, -4i64..4), 0..60).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| SpriteRecord::new(x, y).with_field("idx", i as u64))
            .collect()
    })
}

fn arbitrary_grid() -> impl Strategy<Value = GridSize> {
    (1usize..9, 1usize..12).prop_map(|(w, h)| GridSize::new(w, h).unwrap())
}

proptest! {
    /// Output is a permutation of the input.
    #[test]
    fn sort_preserves_records(records in arbitrary_records(), grid in arbitrary_grid()) {
        let mut sorted = records.clone();
        let summary = grid_sort(&mut sorted, grid);

        prop_assert_eq!(sorted.len(), records.len());
        prop_assert_eq!(summary.record_count, records.len());

        let mut seen: Vec<u64> = sorted.iter().map(idx).collect();
        seen.sort_unstable();
        let expected: Vec<u64> = (0..records.len() as u64).collect();
        prop_assert_eq!(seen, expected);

        for record in &sorted {
            prop_assert_eq!(record, &records[idx(record) as usize]);
        }
    }

    /// Each bounded window has non-decreasing x.
    #[test]
    fn windows_sorted_by_x(records in arbitrary_records(), grid in arbitrary_grid()) {
        let mut sorted = records;
        grid_sort(&mut sorted, grid);

        for window in sorted.chunks(grid.width()).take(grid.height()) {
            for pair in window.windows(2) {
                prop_assert!(pair[0].x() <= pair[1].x());
            }
        }
    }

    /// Rows never interleave: every y in a window is <= every y in the next.
    #[test]
    fn windows_ordered_by_y(records in arbitrary_records(), grid in arbitrary_grid()) {
        let mut sorted = records;
        grid_sort(&mut sorted, grid);

        let bounds: Vec<(i64, i64)> = sorted
            .chunks(grid.width())
            .map(|w| {
                let min = w.iter().map(SpriteRecord::y).min().unwrap_or(0);
                let max = w.iter().map(SpriteRecord::y).max().unwrap_or(0);
                (min, max)
            })
            .collect();
        for pair in bounds.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].0);
        }
    }

    /// Records equal in both coordinates keep their input order, and past the
    /// grid records equal in y keep their input order.
    #[test]
    fn sort_is_stable(records in arbitrary_records(), grid in arbitrary_grid()) {
        let mut sorted = records;
        grid_sort(&mut sorted, grid);

        for window in sorted.chunks(grid.width()).take(grid.height()) {
            for (i, a) in window.iter().enumerate() {
                for b in &window[i + 1..] {
                    if a.x() == b.x() && a.y() == b.y() {
                        prop_assert!(idx(a) < idx(b));
                    }
                }
            }
        }

        let tail = &sorted[grid.capacity().min(sorted.len())..];
        for pair in tail.windows(2) {
            prop_assert!(pair[0].y() <= pair[1].y());
            if pair[0].y() == pair[1].y() {
                prop_assert!(idx(&pair[0]) < idx(&pair[1]));
            }
        }
    }

    /// Sorting sorted output changes nothing.
    #[test]
    fn sort_is_fixed_point(records in arbitrary_records(), grid in arbitrary_grid()) {
        let mut once = records;
        grid_sort(&mut once, grid);
        let mut twice = once.clone();
        grid_sort(&mut twice, grid);

        prop_assert_eq!(&once, &twice);
        prop_assert!(inspect_order(&once, grid).is_fixed_point);
    }

    /// Inspection agrees with an actual re-sort on arbitrary input.
    #[test]
    fn inspect_matches_resort(records in arbitrary_records(), grid in arbitrary_grid()) {
        let report = inspect_order(&records, grid);
        let mut resorted = records.clone();
        grid_sort(&mut resorted, grid);

        prop_assert_eq!(report.is_fixed_point, resorted == records);
        prop_assert_eq!(report.record_count, records.len());
        prop_assert_eq!(
            report.overflow,
            records.len().saturating_sub(grid.capacity())
        );
    }
}
