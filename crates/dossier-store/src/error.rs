use std::path::PathBuf;

use thiserror::Error;

use dossier_model::ModelError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("record {record}: field {field} is not part of schema {schema}")]
    UnknownCell {
        schema: String,
        record: String,
        field: String,
    },
    #[error("record {record}: field {field} holds a value of the wrong kind")]
    KindMismatch { record: String, field: String },
    #[error("field {field} is not a category dimension of schema {schema}")]
    NotCategorical { schema: String, field: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("{}: missing column {column}", path.display())]
    MissingColumn { path: PathBuf, column: String },
    #[error("{}: line {line}, column {column}: {message}", path.display())]
    InvalidCell {
        path: PathBuf,
        line: u64,
        column: String,
        message: String,
    },
    #[error("{0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
