use thiserror::Error;

use dossier_model::{FieldName, ModelError, RecordId};

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Model(#[from] ModelError),
    /// A record's cell map lacks a field the current view references.
    /// This is a data-authoring mistake and is never recovered locally.
    #[error("record {record} is missing field {field}")]
    MissingField { record: RecordId, field: FieldName },
    #[error("record {record}: field {field} does not hold a categorical value")]
    NotCategorical { record: RecordId, field: FieldName },
    #[error("field {field} is not a category dimension and cannot be filtered on")]
    NotFilterable { field: FieldName },
    #[error("field {field} cannot back a sort key")]
    NotSortable { field: FieldName },
    #[error("field {field} is not a category dimension and cannot group records")]
    NotGroupable { field: FieldName },
}

pub type Result<T> = std::result::Result<T, ViewError>;
