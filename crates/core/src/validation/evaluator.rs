//! Field evaluator: pure logic, no database access.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde_json::Value;

use super::ErrorMap;
use crate::form_schema::{
    DateRules, FieldDefinition, FieldKind, LengthRules, RangeRules, SelectionRules,
};
use crate::submission::SubmissionRecord;

/// Validate one record against the ordered field list.
///
/// Every field is visited; each contributes at most one message. A required
/// field that is blank gets `"<label> is required"` and nothing else. Optional
/// fields that are absent or `null` are skipped. Any other value, including
/// `""`, goes to the field's type handler, which runs its rules in fixed
/// order and keeps the last failing rule's message.
///
/// Keys in `record` that match no field are ignored.
pub fn validate(fields: &[FieldDefinition], record: &SubmissionRecord) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for field in fields {
        let value = record.get(&field.name);

        if field.required && value.is_none_or(is_blank) {
            errors.insert(&field.name, format!("{} is required", field.label));
            continue;
        }

        let Some(value) = value.filter(|v| !v.is_null()) else {
            continue;
        };

        if let Some(message) = check_field(field, value) {
            errors.insert(&field.name, message);
        }
    }

    errors
}

/// `null` and `""` count as "not provided" for the required check.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn check_field(field: &FieldDefinition, value: &Value) -> Option<String> {
    match &field.kind {
        FieldKind::Text { validations } => check_text(field, validations, value),
        FieldKind::Number { validations } => check_number(field, validations, value),
        FieldKind::Select { options, .. } => check_select(options, value),
        FieldKind::MultiSelect { validations, .. } => check_multi_select(validations, value),
        FieldKind::Date { validations } => check_date(field, validations, value),
        // Textarea length rules are intentionally not enforced.
        FieldKind::Textarea { .. } | FieldKind::Switch { .. } => None,
    }
}

fn check_text(field: &FieldDefinition, rules: &LengthRules, value: &Value) -> Option<String> {
    let Some(text) = value.as_str() else {
        return Some(format!("{} must be text", field.label));
    };
    let length = text.chars().count();

    let mut error = None;
    if let Some(min) = rules.min_length {
        if length < min {
            error = Some(format!("At least {min} characters required"));
        }
    }
    if let Some(max) = rules.max_length {
        if length > max {
            error = Some(format!("Max {max} characters allowed"));
        }
    }
    error
}

fn check_number(field: &FieldDefinition, rules: &RangeRules, value: &Value) -> Option<String> {
    let Some(number) = as_number(value) else {
        return Some(format!("{} must be a number", field.label));
    };

    let mut error = None;
    if let Some(min) = rules.min {
        if number < min {
            error = Some(format!("Minimum allowed value is {min}"));
        }
    }
    if let Some(max) = rules.max {
        if number > max {
            error = Some(format!("Maximum allowed value is {max}"));
        }
    }
    error
}

/// JSON numbers, or strings holding a finite number (HTML inputs post strings).
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn check_select(options: &[String], value: &Value) -> Option<String> {
    let allowed = value
        .as_str()
        .is_some_and(|v| options.iter().any(|o| o == v));
    if allowed {
        None
    } else {
        Some("Invalid option selected".to_string())
    }
}

fn check_multi_select(rules: &SelectionRules, value: &Value) -> Option<String> {
    // Non-array values are not checked at all.
    let items = value.as_array()?;
    let count = items.len();

    let mut error = None;
    if let Some(min) = rules.min_selected {
        if count < min {
            error = Some(format!("Select at least {min} items"));
        }
    }
    if let Some(max) = rules.max_selected {
        if count > max {
            error = Some(format!("Select at most {max} items"));
        }
    }
    error
}

fn check_date(field: &FieldDefinition, rules: &DateRules, value: &Value) -> Option<String> {
    // An empty date input means no date was picked.
    if value.as_str() == Some("") {
        return None;
    }
    let Some(date) = value.as_str().and_then(parse_date) else {
        return Some(format!("{} must be a valid date", field.label));
    };

    let min = rules.min_date?;
    if date < start_of_day(min) {
        Some(format!("Date must be after {min}"))
    } else {
        None
    }
}

/// Parse `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(start_of_day(date));
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}
