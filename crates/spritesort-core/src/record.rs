//! Sprite record and collection types.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{value_kind, SortError};
use crate::grid::{grid_sort, GridSize, SortSummary};

/// Name of the horizontal coordinate field.
pub const X_FIELD: &str = "x";

/// Name of the vertical coordinate field.
pub const Y_FIELD: &str = "y";

/// A single grid-positioned sprite entry.
///
/// The typed coordinates are read once at construction; the full field map
/// (coordinates included) is kept as parsed so serialization reproduces every
/// field in its original order. Records expose no mutators.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteRecord {
    x: i64,
    y: i64,
    fields: Map<String, Value>,
}

impl SpriteRecord {
    /// Creates a record holding only the two coordinates.
    pub fn new(x: i64, y: i64) -> Self {
        let mut fields = Map::new();
        fields.insert(X_FIELD.to_string(), Value::from(x));
        fields.insert(Y_FIELD.to_string(), Value::from(y));
        Self { x, y, fields }
    }

    /// Adds an opaque field. Coordinate keys are owned by [`SpriteRecord::new`]
    /// and are left untouched.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != X_FIELD && key != Y_FIELD {
            self.fields.insert(key, value.into());
        }
        self
    }

    /// Builds a record from a parsed JSON value.
    ///
    /// `index` is the record's position in the input array and is only used
    /// for diagnostics.
    pub fn from_value(index: usize, value: Value) -> Result<Self, SortError> {
        match value {
            Value::Object(fields) => Self::from_map(index, fields),
            other => Err(SortError::NotAnObject {
                index,
                found: value_kind(&other),
            }),
        }
    }

    /// Builds a record from a JSON object's field map.
    pub fn from_map(index: usize, fields: Map<String, Value>) -> Result<Self, SortError> {
        let x = coordinate(index, &fields, X_FIELD)?;
        let y = coordinate(index, &fields, Y_FIELD)?;
        Ok(Self { x, y, fields })
    }

    /// Horizontal grid coordinate.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Vertical grid coordinate.
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Looks up any field by name, coordinates included.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields in their original order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Fields other than the coordinates.
    pub fn extra_fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields
            .iter()
            .filter(|(key, _)| key.as_str() != X_FIELD && key.as_str() != Y_FIELD)
    }
}

impl Serialize for SpriteRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

fn coordinate(
    index: usize,
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<i64, SortError> {
    let value = fields
        .get(field)
        .ok_or(SortError::MissingField { index, field })?;
    value.as_i64().ok_or_else(|| SortError::IncomparableValue {
        index,
        field,
        value: value.to_string(),
    })
}

/// An ordered sequence of sprite records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SpriteCollection {
    records: Vec<SpriteRecord>,
}

impl SpriteCollection {
    /// Wraps already-built records.
    pub fn from_records(records: Vec<SpriteRecord>) -> Self {
        Self { records }
    }

    /// Parses a collection from a JSON array of objects.
    pub fn from_json(json: &str) -> Result<Self, SortError> {
        let value: Value = serde_json::from_str(json).map_err(SortError::InvalidJson)?;
        Self::from_value(value)
    }

    /// Builds a collection from a parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, SortError> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(SortError::NotAnArray {
                    found: value_kind(&other),
                })
            }
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| SpriteRecord::from_value(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    /// Serializes the collection to compact JSON.
    pub fn to_json(&self) -> Result<String, SortError> {
        serde_json::to_string(self).map_err(SortError::Serialize)
    }

    /// Serializes the collection to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SortError> {
        serde_json::to_string_pretty(self).map_err(SortError::Serialize)
    }

    /// Re-orders the records into grid scan order.
    pub fn sort_grid(&mut self, grid: GridSize) -> SortSummary {
        grid_sort(&mut self.records, grid)
    }

    pub fn records(&self) -> &[SpriteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<SpriteRecord> {
        self.records
    }
}

impl From<Vec<SpriteRecord>> for SpriteCollection {
    fn from(records: Vec<SpriteRecord>) -> Self {
        Self::from_records(records)
    }
}
