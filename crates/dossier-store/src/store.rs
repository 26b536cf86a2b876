//! The immutable, in-memory record store backing one catalog view.

use dossier_model::{FieldKind, FieldName, Record, Schema, ViewState};
use dossier_view::{DerivedView, ViewError};

use crate::error::{Result, StoreError};

/// An ordered, read-only sequence of records validated against one schema.
///
/// Construction is the validation boundary: every cell must name a schema
/// field and fit its kind, so a data-authoring mistake surfaces here rather
/// than mid-projection. After construction the store only hands out shared
/// references.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordStore {
    schema: Schema,
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new(schema: Schema, records: Vec<Record>) -> Result<Self> {
        for record in &records {
            for (field, value) in record.cells() {
                let spec =
                    schema
                        .field(field)
                        .ok_or_else(|| StoreError::UnknownCell {
                            schema: schema.name().to_string(),
                            record: record.id().to_string(),
                            field: field.to_string(),
                        })?;
                if !value.fits(spec.kind()) {
                    return Err(StoreError::KindMismatch {
                        record: record.id().to_string(),
                        field: field.to_string(),
                    });
                }
            }
        }
        Ok(Self { schema, records })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct values of a category field in first-seen order, used to
    /// populate the view's discrete-choice filter controls.
    pub fn distinct_values(&self, field: &FieldName) -> Result<Vec<String>> {
        let spec = self.schema.require(field)?;
        if spec.kind() != FieldKind::Category {
            return Err(StoreError::NotCategorical {
                schema: self.schema.name().to_string(),
                field: field.to_string(),
            });
        }
        let mut values: Vec<String> = Vec::new();
        for record in &self.records {
            if let Some(text) = record.cell(field).and_then(|v| v.as_text())
                && !values.iter().any(|v| v == text)
            {
                values.push(text.to_string());
            }
        }
        Ok(values)
    }

    /// Project this store through a view state.
    pub fn project(&self, state: &ViewState) -> std::result::Result<DerivedView, ViewError> {
        dossier_view::project(&self.schema, &self.records, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_model::{FieldSpec, FieldValue, RecordId};

    fn name(value: &str) -> FieldName {
        FieldName::new(value).unwrap()
    }

    fn schema() -> Schema {
        Schema::new(
            "documents",
            vec![
                FieldSpec::new(name("title"), FieldKind::Text).searchable(),
                FieldSpec::new(name("category"), FieldKind::Category),
                FieldSpec::new(name("downloads"), FieldKind::Number),
            ],
        )
        .unwrap()
    }

    #[test]
    fn construction_rejects_unknown_cells() {
        let record = Record::new(RecordId::new("1").unwrap())
            .with_cell(name("rating"), FieldValue::Number(5));
        assert!(matches!(
            RecordStore::new(schema(), vec![record]),
            Err(StoreError::UnknownCell { .. })
        ));
    }

    #[test]
    fn construction_rejects_kind_mismatch() {
        let record = Record::new(RecordId::new("1").unwrap())
            .with_cell(name("downloads"), FieldValue::text("many"));
        assert!(matches!(
            RecordStore::new(schema(), vec![record]),
            Err(StoreError::KindMismatch { .. })
        ));
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let records = vec![
            Record::new(RecordId::new("1").unwrap())
                .with_cell(name("category"), FieldValue::text("Health")),
            Record::new(RecordId::new("2").unwrap())
                .with_cell(name("category"), FieldValue::text("Corporate")),
            Record::new(RecordId::new("3").unwrap())
                .with_cell(name("category"), FieldValue::text("Health")),
        ];
        let store = RecordStore::new(schema(), records).unwrap();
        assert_eq!(
            store.distinct_values(&name("category")).unwrap(),
            vec!["Health", "Corporate"]
        );
    }

    #[test]
    fn distinct_values_rejects_non_category_fields() {
        let store = RecordStore::new(schema(), Vec::new()).unwrap();
        assert!(matches!(
            store.distinct_values(&name("title")),
            Err(StoreError::NotCategorical { .. })
        ));
    }
}
