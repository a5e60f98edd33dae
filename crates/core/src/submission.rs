//! Shaping of submission records on their way into and out of storage.
//!
//! The validator sees the raw client payload. What gets stored is narrower:
//! only fields the schema declares, with switch values coerced to booleans.
//! On the way out, multi-select values are normalised to plain option labels
//! so clients always receive `["React", "Node"]` regardless of how the
//! selection was posted.

use serde_json::{Map, Value};

use crate::form_schema::{FieldDefinition, FieldKind};

/// A raw submission: field name -> dynamically typed value.
pub type SubmissionRecord = Map<String, Value>;

/// Keep only the schema's fields, coercing switches to bool.
///
/// Absent fields stay absent; extra keys are dropped.
pub fn prepare_for_storage(
    fields: &[FieldDefinition],
    record: &SubmissionRecord,
) -> SubmissionRecord {
    let mut stored = Map::with_capacity(fields.len());

    for field in fields {
        let Some(value) = record.get(&field.name) else {
            continue;
        };
        let value = match field.kind {
            FieldKind::Switch { .. } => Value::Bool(is_truthy(value)),
            _ => value.clone(),
        };
        stored.insert(field.name.clone(), value);
    }

    stored
}

/// Normalise a stored record for listing.
///
/// - Multi-select values become an array of label strings (`[]` if missing).
/// - Switch values become booleans (`false` if missing).
/// - Everything else, including keys no longer in the schema, passes through.
pub fn present_stored(
    fields: &[FieldDefinition],
    mut stored: SubmissionRecord,
) -> SubmissionRecord {
    for field in fields {
        match field.kind {
            FieldKind::MultiSelect { .. } => {
                let labels = selection_labels(stored.get(&field.name));
                stored.insert(field.name.clone(), labels);
            }
            FieldKind::Switch { .. } => {
                let on = stored.get(&field.name).is_some_and(is_truthy);
                stored.insert(field.name.clone(), Value::Bool(on));
            }
            _ => {}
        }
    }
    stored
}

/// Selections may be posted as strings or `{ "label": ..., "value": ... }`
/// objects; keep just the label text.
fn selection_labels(value: Option<&Value>) -> Value {
    let Some(Value::Array(items)) = value else {
        return Value::Array(Vec::new());
    };

    let labels = items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(Value::String(s.clone())),
            Value::Object(obj) => obj.get("label").filter(|l| l.is_string()).cloned(),
            _ => None,
        })
        .collect();

    Value::Array(labels)
}

/// Loose truthiness: `false`, `null`, `0`, `""` are false; everything else is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
