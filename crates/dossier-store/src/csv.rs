//! CSV loading for external catalogs.
//!
//! A catalog CSV carries an `id` column plus one column per schema field.
//! Values are trimmed; an empty cell becomes `Missing`. Dates use the
//! `%Y-%m-%d` form the built-in catalogs use.

use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::debug;

use dossier_model::{FieldKind, FieldSpec, FieldValue, Record, RecordId, Schema};

use crate::error::{Result, StoreError};
use crate::store::RecordStore;

const ID_COLUMN: &str = "id";

/// Load a record store from a CSV file, validating against `schema`.
pub fn load_csv(path: &Path, schema: Schema) -> Result<RecordStore> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let id_index = column_index(&headers, ID_COLUMN).ok_or_else(|| StoreError::MissingColumn {
        path: path.to_path_buf(),
        column: ID_COLUMN.to_string(),
    })?;
    let mut field_indexes = Vec::with_capacity(schema.fields().len());
    for field in schema.fields() {
        let index =
            column_index(&headers, field.name().as_str()).ok_or_else(|| {
                StoreError::MissingColumn {
                    path: path.to_path_buf(),
                    column: field.name().to_string(),
                }
            })?;
        field_indexes.push((field.clone(), index));
    }

    let mut records = Vec::new();
    for entry in reader.records() {
        let row = entry?;
        let line = row.position().map_or(0, |p| p.line());
        let id = RecordId::new(row.get(id_index).unwrap_or_default()).map_err(|_| {
            StoreError::InvalidCell {
                path: path.to_path_buf(),
                line,
                column: ID_COLUMN.to_string(),
                message: "record id must not be empty".to_string(),
            }
        })?;
        let mut record = Record::new(id);
        for (field, index) in &field_indexes {
            let raw = row.get(*index).unwrap_or_default().trim();
            let value = parse_cell(field, raw).map_err(|message| StoreError::InvalidCell {
                path: path.to_path_buf(),
                line,
                column: field.name().to_string(),
                message,
            })?;
            record = record.with_cell(field.name().clone(), value);
        }
        records.push(record);
    }

    debug!(path = %path.display(), records = records.len(), "loaded catalog csv");
    RecordStore::new(schema, records)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}').trim() == name)
}

fn parse_cell(field: &FieldSpec, raw: &str) -> std::result::Result<FieldValue, String> {
    if raw.is_empty() {
        return Ok(FieldValue::Missing);
    }
    match field.kind() {
        FieldKind::Text | FieldKind::Category => Ok(FieldValue::text(raw)),
        FieldKind::Number => raw
            .parse::<i64>()
            .map(FieldValue::Number)
            .map_err(|e| format!("invalid number: {e}")),
        FieldKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(FieldValue::Date)
            .map_err(|e| format!("invalid date: {e}")),
        FieldKind::Flag => match raw.to_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(FieldValue::Flag(true)),
            "false" | "no" | "0" => Ok(FieldValue::Flag(false)),
            other => Err(format!("invalid flag: {other:?}")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_model::FieldName;
    use std::io::Write;

    fn schema() -> Schema {
        Schema::new(
            "documents",
            vec![
                FieldSpec::new(FieldName::new("title").unwrap(), FieldKind::Text).searchable(),
                FieldSpec::new(FieldName::new("category").unwrap(), FieldKind::Category),
                FieldSpec::new(FieldName::new("date").unwrap(), FieldKind::Date),
                FieldSpec::new(FieldName::new("downloads").unwrap(), FieldKind::Number),
                FieldSpec::new(FieldName::new("preview").unwrap(), FieldKind::Flag),
            ],
        )
        .unwrap()
    }

    fn write_temp(contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "dossier-csv-{}-{}.csv",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_typed_cells() {
        let path = write_temp(
            "id,title,category,date,downloads,preview\n\
             1,FDA Memo,Health,2024-11-15,1247,true\n\
             2,Lobbying Report,Corporate,2024-10-28,,no\n",
        );
        let store = load_csv(&path, schema()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(store.len(), 2);
        let first = &store.records()[0];
        assert_eq!(
            first.cell(&FieldName::new("downloads").unwrap()),
            Some(&FieldValue::Number(1247))
        );
        let second = &store.records()[1];
        assert_eq!(
            second.cell(&FieldName::new("downloads").unwrap()),
            Some(&FieldValue::Missing)
        );
    }

    #[test]
    fn reports_file_and_line_for_bad_cells() {
        let path = write_temp(
            "id,title,category,date,downloads,preview\n\
             1,FDA Memo,Health,not-a-date,1247,true\n",
        );
        let err = load_csv(&path, schema()).unwrap_err();
        std::fs::remove_file(&path).ok();
        let message = err.to_string();
        assert!(message.contains("column date"), "got: {message}");
    }

    #[test]
    fn missing_schema_column_is_an_error() {
        let path = write_temp("id,title\n1,FDA Memo\n");
        let err = load_csv(&path, schema()).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, StoreError::MissingColumn { .. }));
    }
}
