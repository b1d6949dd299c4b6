//! SpriteSort core library
//!
//! This crate provides the record types, grid sorting, and order inspection
//! behind the `spritesort` command-line tool.
//!
//! # Overview
//!
//! A sprite sheet description is a JSON array of objects, each carrying
//! integer `x` and `y` coordinates plus any number of opaque fields. Sorting
//! puts the records into row-major scan order for a grid of fixed width and
//! height:
//!
//! 1. Stable sort of the whole sequence by `y`
//! 2. Stable sort by `x` of each consecutive window of `width` records, for at
//!    most `height` windows
//!
//! # Example
//!
//! ```
//! use spritesort_core::{GridSize, SpriteCollection};
//!
//! let mut sheet = SpriteCollection::from_json(
//!     r#"[{"x":1,"y":1,"id":"b"},{"x":0,"y":0,"id":"a"}]"#,
//! ).unwrap();
//!
//! let summary = sheet.sort_grid(GridSize::new(2, 1).unwrap());
//! assert_eq!(summary.record_count, 2);
//! assert_eq!(
//!     sheet.to_json().unwrap(),
//!     r#"[{"x":0,"y":0,"id":"a"},{"x":1,"y":1,"id":"b"}]"#
//! );
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error type with stable codes
//! - [`record`]: Sprite record and collection types
//! - [`grid`]: Grid size, the two-pass sort, and order inspection
//! - [`io`]: Reading and writing collections on disk

pub mod error;
pub mod grid;
pub mod io;
pub mod record;

pub use error::SortError;
pub use grid::{
    grid_sort, inspect_order, GridSize, OrderReport, RowInversion, SortSummary, WindowViolation,
    DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
pub use io::{read_collection, write_collection};
pub use record::{SpriteCollection, SpriteRecord, X_FIELD, Y_FIELD};
