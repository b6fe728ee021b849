use std::collections::HashMap;

use crate::input::IngestError;
use crate::model::schema::{self, FIELD_COUNT};

/// Parse one manually entered record (field name -> string value) into a
/// schema-ordered feature vector.
///
/// Every one of the 17 fields must be present and non-empty; the four flag
/// fields must parse as integer 0/1, the rest as finite floats. Field names
/// are matched case-insensitively.
pub fn ingest_manual(fields: &HashMap<String, String>) -> Result<Vec<f64>, IngestError> {
    let mut tokens: Vec<Option<&str>> = vec![None; FIELD_COUNT];
    for (name, value) in fields {
        if let Some(idx) = schema::field_index(name) {
            tokens[idx] = Some(value.trim());
        }
    }

    let missing: Vec<String> = schema::FIELDS
        .iter()
        .enumerate()
        .filter(|(idx, _)| tokens[*idx].is_none_or(str::is_empty))
        .map(|(_, f)| f.name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns(missing));
    }

    let mut values = Vec::with_capacity(FIELD_COUNT);
    for (idx, field) in schema::FIELDS.iter().enumerate() {
        let token = tokens[idx].unwrap_or_default();
        let value = if schema::is_flag(idx) {
            let flag: i64 = token.parse().map_err(|_| IngestError::RowSchemaMismatch {
                row: 0,
                reason: format!("field '{}': invalid flag '{}'", field.name, token),
            })?;
            if flag != 0 && flag != 1 {
                return Err(IngestError::RowSchemaMismatch {
                    row: 0,
                    reason: format!("field '{}': flag must be 0 or 1, got '{}'", field.name, token),
                });
            }
            flag as f64
        } else {
            let value: f64 = token.parse().map_err(|_| IngestError::RowSchemaMismatch {
                row: 0,
                reason: format!("field '{}': invalid number '{}'", field.name, token),
            })?;
            if !value.is_finite() {
                return Err(IngestError::RowSchemaMismatch {
                    row: 0,
                    reason: format!("field '{}': non-finite value '{}'", field.name, token),
                });
            }
            value
        };
        values.push(value);
    }

    Ok(values)
}
