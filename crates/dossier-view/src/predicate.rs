//! Predicate composition for the filter stage.
//!
//! A [`Predicate`] is compiled once per projection from the active
//! `ViewState` and applied to every store record. All active conditions are
//! ANDed; there is no OR across dimensions and no negation.

use dossier_model::{FieldKind, FieldName, FieldValue, Record, Schema, ViewState};

use crate::error::{Result, ViewError};

/// The combined filter test for one projection.
#[derive(Debug, Clone)]
pub struct Predicate {
    /// Lowercased search term; `None` when the input was blank.
    search_term: Option<String>,
    /// Fields scanned by free-text search, per the schema.
    search_fields: Vec<FieldName>,
    /// Active categorical dimensions, matched by exact equality.
    equals: Vec<(FieldName, String)>,
}

impl Predicate {
    /// Compile the active filters into a single predicate.
    ///
    /// Fails loudly when a filter dimension is unknown to the schema or is
    /// not a category field; a stale dimension is a programmer error, not a
    /// condition to tolerate.
    pub fn compile(schema: &Schema, state: &ViewState) -> Result<Self> {
        let term = state.search_term.trim();
        let search_term = if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        };
        let search_fields = schema
            .searchable_fields()
            .map(|f| f.name().clone())
            .collect();

        let mut equals = Vec::with_capacity(state.filters.len());
        for (dimension, value) in &state.filters {
            let spec = schema.require(dimension)?;
            if spec.kind() != FieldKind::Category {
                return Err(ViewError::NotFilterable {
                    field: dimension.clone(),
                });
            }
            equals.push((dimension.clone(), value.clone()));
        }

        Ok(Self {
            search_term,
            search_fields,
            equals,
        })
    }

    /// True when no condition is active: every record matches.
    pub fn is_identity(&self) -> bool {
        self.search_term.is_none() && self.equals.is_empty()
    }

    /// Evaluate the predicate against one record.
    ///
    /// A record lacking a referenced field is an error; a field holding
    /// `Missing` is an ordinary non-match.
    pub fn matches(&self, record: &Record) -> Result<bool> {
        if let Some(term) = &self.search_term {
            let mut hit = false;
            for field in &self.search_fields {
                let value = record.cell(field).ok_or_else(|| ViewError::MissingField {
                    record: record.id().clone(),
                    field: field.clone(),
                })?;
                if let Some(text) = value.as_text()
                    && text.to_lowercase().contains(term.as_str())
                {
                    hit = true;
                    break;
                }
            }
            if !hit {
                return Ok(false);
            }
        }

        for (dimension, expected) in &self.equals {
            let value = record.cell(dimension).ok_or_else(|| ViewError::MissingField {
                record: record.id().clone(),
                field: dimension.clone(),
            })?;
            match value {
                // Categories are closed enumerations: equality is exact and
                // case-sensitive.
                FieldValue::Text(text) => {
                    if text != expected {
                        return Ok(false);
                    }
                }
                FieldValue::Missing => return Ok(false),
                _ => {
                    return Err(ViewError::NotCategorical {
                        record: record.id().clone(),
                        field: dimension.clone(),
                    });
                }
            }
        }

        Ok(true)
    }
}
