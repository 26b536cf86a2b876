#![deny(unsafe_code)]

use std::fmt;

use chrono::NaiveDate;

use crate::schema::FieldKind;

/// A single cell value.
///
/// Dates are parsed once when the record is built so comparisons never
/// re-parse strings. `Missing` is a present-but-empty cell; a cell that is
/// absent from the record entirely is a shape error, not a `Missing` value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum FieldValue {
    Text(String),
    Number(i64),
    Date(NaiveDate),
    Flag(bool),
    Missing,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns true when this value could populate a field of `kind`.
    /// `Missing` is acceptable everywhere.
    pub fn fits(&self, kind: FieldKind) -> bool {
        match self {
            Self::Text(_) => matches!(kind, FieldKind::Text | FieldKind::Category),
            Self::Number(_) => kind == FieldKind::Number,
            Self::Date(_) => kind == FieldKind::Date,
            Self::Flag(_) => kind == FieldKind::Flag,
            Self::Missing => true,
        }
    }

    /// Text content for substring search and categorical comparison.
    /// Non-text values have no searchable content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
            Self::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            Self::Flag(true) => f.write_str("yes"),
            Self::Flag(false) => f.write_str("no"),
            Self::Missing => f.write_str("-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_checks_kind() {
        assert!(FieldValue::text("Health").fits(FieldKind::Category));
        assert!(FieldValue::Number(42).fits(FieldKind::Number));
        assert!(!FieldValue::Number(42).fits(FieldKind::Text));
        assert!(FieldValue::Missing.fits(FieldKind::Date));
    }

    #[test]
    fn display_formats_dates_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 15).unwrap();
        assert_eq!(FieldValue::Date(date).to_string(), "2024-11-15");
    }
}
