#![deny(unsafe_code)]

use crate::{FieldName, ModelError};

/// The kind of value a field holds.
///
/// `Category` is text drawn from a closed set of values; it is the only kind
/// that can back a categorical filter or a grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Category,
    Flag,
}

/// One field of a catalog schema.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldSpec {
    name: FieldName,
    kind: FieldKind,
    searchable: bool,
}

impl FieldSpec {
    pub fn new(name: FieldName, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            searchable: false,
        }
    }

    /// Mark this field as a target of free-text search.
    #[must_use]
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn name(&self) -> &FieldName {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }
}

/// The closed field table of one catalog.
///
/// Checked at construction: duplicate names are rejected, and every field
/// lookup by callers goes through [`Schema::require`] so an unrecognized
/// name surfaces as an error instead of a silent default.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Schema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Result<Self, ModelError> {
        let name = name.into();
        for (idx, field) in fields.iter().enumerate() {
            if fields[..idx].iter().any(|f| f.name() == field.name()) {
                return Err(ModelError::DuplicateField {
                    schema: name,
                    field: field.name().to_string(),
                });
            }
        }
        Ok(Self { name, fields })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &FieldName) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn require(&self, name: &FieldName) -> Result<&FieldSpec, ModelError> {
        self.field(name).ok_or_else(|| ModelError::UnknownField {
            schema: self.name.clone(),
            field: name.to_string(),
        })
    }

    pub fn searchable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.is_searchable())
    }
}
