use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid record id: {0:?}")]
    InvalidRecordId(String),
    #[error("invalid field name: {0:?}")]
    InvalidFieldName(String),
    #[error("duplicate field {field:?} in schema {schema:?}")]
    DuplicateField { schema: String, field: String },
    #[error("schema {schema:?} has no field {field:?}")]
    UnknownField { schema: String, field: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
