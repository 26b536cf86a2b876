#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::{FieldName, FieldValue, RecordId};

/// A flat, immutable catalog record.
///
/// Records are supplied already materialized by a store; nothing in the view
/// pipeline creates, mutates, or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    id: RecordId,
    cells: BTreeMap<FieldName, FieldValue>,
}

impl Record {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            cells: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_cell(mut self, name: FieldName, value: FieldValue) -> Self {
        self.cells.insert(name, value);
        self
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// The cell for `name`, or `None` when the record lacks the field
    /// entirely (a shape error for any field the current view references).
    pub fn cell(&self, name: &FieldName) -> Option<&FieldValue> {
        self.cells.get(name)
    }

    pub fn cells(&self) -> &BTreeMap<FieldName, FieldValue> {
        &self.cells
    }
}
