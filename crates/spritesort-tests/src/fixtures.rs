//! Sprite sheet fixtures.

use serde_json::{json, Value};
use spritesort_core::SpriteRecord;

/// Cell size used for fixture coordinates, in pixels.
pub const CELL: i64 = 32;

/// A full `width x height` sheet in scan order, each record tagged with a
/// `name` of the form `r{row}c{col}` and a `frame` index.
pub fn scan_order_sheet(width: usize, height: usize) -> Vec<SpriteRecord> {
    let mut records = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            records.push(
                SpriteRecord::new(col as i64 * CELL, row as i64 * CELL)
                    .with_field("name", format!("r{}c{}", row, col))
                    .with_field("frame", (row * width + col) as u64),
            );
        }
    }
    records
}

/// Deterministic scramble: reversed, then rotated by half its length.
pub fn scrambled(records: &[SpriteRecord]) -> Vec<SpriteRecord> {
    let mut out: Vec<_> = records.iter().rev().cloned().collect();
    if out.len() > 2 {
        let mid = out.len() / 2;
        out.rotate_left(mid);
    }
    out
}

/// Names of records in their current order.
pub fn names(records: &[SpriteRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| {
            r.get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

/// Serializes records as the JSON array a sheet file would contain.
pub fn to_json_array(records: &[SpriteRecord]) -> String {
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}

/// A sheet exported by a packing tool: coordinates plus nested metadata.
pub fn packed_sheet_json() -> Value {
    json!([
        {"name": "walk_1", "x": 32, "y": 32, "w": 32, "h": 32, "pivot": {"x": 0.5, "y": 1.0}},
        {"name": "idle_1", "x": 32, "y": 0, "w": 32, "h": 32, "pivot": {"x": 0.5, "y": 1.0}},
        {"name": "walk_0", "x": 0, "y": 32, "w": 32, "h": 32, "pivot": {"x": 0.5, "y": 1.0}},
        {"name": "idle_0", "x": 0, "y": 0, "w": 32, "h": 32, "pivot": {"x": 0.5, "y": 1.0}},
        {"name": "jump_0", "x": 0, "y": 64, "w": 32, "h": 32, "tags": ["air"]}
    ])
}
