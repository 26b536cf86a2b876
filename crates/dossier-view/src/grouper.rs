//! Grouping stage: partition a filtered, sorted sequence by a category key.

use dossier_model::{FieldKind, FieldName, FieldValue, Record, Schema};

use crate::error::{Result, ViewError};

/// One partition of a grouped view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Group {
    pub key: String,
    pub records: Vec<Record>,
}

/// Partition `records` by the value of `key`.
///
/// Group order is the first-seen order of key values in the input, not
/// alphabetical: downstream rendering relies on the most relevant group
/// arriving first. A record whose grouping cell holds `Missing` is excluded
/// from every group; there is no implicit "Uncategorized" bucket. A record
/// lacking the cell entirely is a shape error.
pub fn group_records(
    records: Vec<Record>,
    schema: &Schema,
    key: &FieldName,
) -> Result<Vec<Group>> {
    let spec = schema.require(key)?;
    if spec.kind() != FieldKind::Category {
        return Err(ViewError::NotGroupable { field: key.clone() });
    }

    let mut groups: Vec<Group> = Vec::new();
    for record in records {
        let value = record.cell(key).ok_or_else(|| ViewError::MissingField {
            record: record.id().clone(),
            field: key.clone(),
        })?;
        let group_key = match value {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Missing => continue,
            _ => {
                return Err(ViewError::NotCategorical {
                    record: record.id().clone(),
                    field: key.clone(),
                });
            }
        };
        match groups.iter_mut().find(|g| g.key == group_key) {
            Some(group) => group.records.push(record),
            None => groups.push(Group {
                key: group_key,
                records: vec![record],
            }),
        }
    }
    Ok(groups)
}
