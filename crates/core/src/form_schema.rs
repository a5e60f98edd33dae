//! Form schema types and the read-only registry that serves them.
//!
//! The schema is the single source of truth for both the server-side
//! validator and client-side rendering: [`FormSchema`] serializes to the
//! exact document returned by `GET /api/form-schema`.
//!
//! Field types form a closed set ([`FieldKind`]); each variant carries only
//! the constraint rules that apply to it, so a rule can never be attached to
//! the wrong kind of field.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Schema document
// ---------------------------------------------------------------------------

/// A complete form definition: heading text plus the ordered field list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub fields: Vec<FieldDefinition>,
}

/// Static descriptor of one form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Key of this field in submitted records.
    pub name: String,
    /// Display name, also used in "is required" messages.
    pub label: String,
    /// Field type tag, options and constraint rules.
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Closed set of field types, each with its own rule bag.
///
/// Serialized as an internally tagged `"type"` (`"text"`, `"multi-select"`,
/// ...) alongside `"options"` and `"validations"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldKind {
    Text {
        #[serde(default)]
        validations: LengthRules,
    },
    Number {
        #[serde(default)]
        validations: RangeRules,
    },
    Select {
        options: Vec<String>,
        #[serde(default)]
        validations: NoRules,
    },
    MultiSelect {
        options: Vec<String>,
        #[serde(default)]
        validations: SelectionRules,
    },
    Date {
        #[serde(default)]
        validations: DateRules,
    },
    /// Length rules are served to clients but not enforced server-side.
    Textarea {
        #[serde(default)]
        validations: LengthRules,
    },
    Switch {
        #[serde(default)]
        validations: NoRules,
    },
}

impl FieldKind {
    /// The wire name of this field type.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text { .. } => "text",
            FieldKind::Number { .. } => "number",
            FieldKind::Select { .. } => "select",
            FieldKind::MultiSelect { .. } => "multi-select",
            FieldKind::Date { .. } => "date",
            FieldKind::Textarea { .. } => "textarea",
            FieldKind::Switch { .. } => "switch",
        }
    }

    /// Allowed option values; empty for types without options.
    pub fn options(&self) -> &[String] {
        match self {
            FieldKind::Select { options, .. } | FieldKind::MultiSelect { options, .. } => options,
            _ => &[],
        }
    }
}

// ---------------------------------------------------------------------------
// Constraint rules
// ---------------------------------------------------------------------------

/// Character-count bounds for `text` and `textarea` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// Inclusive numeric bounds for `number` fields.
///
/// Whole-valued bounds serialize as JSON integers (`18`, not `18.0`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeRules {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_bound"
    )]
    pub min: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_bound"
    )]
    pub max: Option<f64>,
}

fn serialize_bound<S: serde::Serializer>(bound: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;
    match *bound {
        Some(v) if v.fract() == 0.0 && v.abs() < MAX_EXACT_INT => s.serialize_i64(v as i64),
        Some(v) => s.serialize_f64(v),
        None => s.serialize_none(),
    }
}

/// Selection-count bounds for `multi-select` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_selected: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selected: Option<usize>,
}

/// Earliest accepted date for `date` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<NaiveDate>,
}

/// Empty rule bag, serialized as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoRules {}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a schema document cannot be loaded into the registry.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Form schema declares no fields")]
    NoFields,

    #[error("Field at position {0} has an empty name")]
    EmptyName(usize),

    #[error("Field '{0}' has an empty label")]
    EmptyLabel(String),

    #[error("Duplicate field name '{0}'")]
    DuplicateName(String),

    #[error("Field '{0}' must declare at least one option")]
    MissingOptions(String),

    #[error("Failed to read form schema from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse form schema: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Read-only holder of the active form schema.
///
/// Built once at startup and shared behind an `Arc`; there are no mutation
/// operations, so concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct FormSchemaRegistry {
    schema: FormSchema,
}

impl FormSchemaRegistry {
    /// Wrap a schema after checking its invariants:
    ///
    /// - at least one field,
    /// - every name and label non-empty,
    /// - names unique,
    /// - `select` / `multi-select` fields declare options.
    pub fn new(schema: FormSchema) -> Result<Self, SchemaError> {
        if schema.fields.is_empty() {
            return Err(SchemaError::NoFields);
        }

        let mut seen = HashSet::with_capacity(schema.fields.len());
        for (position, field) in schema.fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(SchemaError::EmptyName(position));
            }
            if field.label.trim().is_empty() {
                return Err(SchemaError::EmptyLabel(field.name.clone()));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateName(field.name.clone()));
            }
            let needs_options = matches!(
                field.kind,
                FieldKind::Select { .. } | FieldKind::MultiSelect { .. }
            );
            if needs_options && field.kind.options().is_empty() {
                return Err(SchemaError::MissingOptions(field.name.clone()));
            }
        }

        Ok(Self { schema })
    }

    /// Parse a schema document (same shape as the served JSON) and register it.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        let schema: FormSchema = serde_json::from_str(json)?;
        Self::new(schema)
    }

    /// Load a schema document from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The built-in employee form.
    pub fn builtin() -> Self {
        Self {
            schema: employee_form(),
        }
    }

    /// The full schema document, as served to clients.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Field definitions in declared order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.schema.fields
    }

    /// Look up one field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.schema.fields.iter().find(|f| f.name == name)
    }
}

fn field(name: &str, label: &str, kind: FieldKind) -> FieldDefinition {
    FieldDefinition {
        name: name.to_string(),
        label: label.to_string(),
        kind,
        required: false,
        placeholder: None,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Employee details form served when no schema file is configured.
fn employee_form() -> FormSchema {
    FormSchema {
        title: "EMPLOYEE FORM".to_string(),
        description: "Fill your employee details carefully".to_string(),
        fields: vec![
            FieldDefinition {
                required: true,
                placeholder: Some("Enter your name".to_string()),
                ..field(
                    "fullName",
                    "Full Name",
                    FieldKind::Text {
                        validations: LengthRules {
                            min_length: Some(3),
                            max_length: Some(30),
                        },
                    },
                )
            },
            FieldDefinition {
                required: true,
                ..field(
                    "age",
                    "Age",
                    FieldKind::Number {
                        validations: RangeRules {
                            min: Some(18.0),
                            max: Some(60.0),
                        },
                    },
                )
            },
            FieldDefinition {
                required: true,
                ..field(
                    "gender",
                    "Gender",
                    FieldKind::Select {
                        options: strings(&["Male", "Female", "Other"]),
                        validations: NoRules {},
                    },
                )
            },
            field(
                "skills",
                "Skills",
                FieldKind::MultiSelect {
                    options: strings(&["React", "Node", "Tailwind", "AWS"]),
                    validations: SelectionRules {
                        min_selected: Some(1),
                        max_selected: Some(3),
                    },
                },
            ),
            field(
                "joinDate",
                "Joining Date",
                FieldKind::Date {
                    validations: DateRules {
                        min_date: NaiveDate::from_ymd_opt(2025, 1, 1),
                    },
                },
            ),
            FieldDefinition {
                placeholder: Some("Write about yourself".to_string()),
                ..field(
                    "bio",
                    "Bio",
                    FieldKind::Textarea {
                        validations: LengthRules {
                            min_length: Some(10),
                            max_length: Some(200),
                        },
                    },
                )
            },
            field(
                "isActive",
                "Active Employee",
                FieldKind::Switch {
                    validations: NoRules {},
                },
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn builtin_schema_passes_registry_checks() {
        let schema = FormSchemaRegistry::builtin().schema().clone();
        assert!(FormSchemaRegistry::new(schema).is_ok());
    }

    #[test]
    fn builtin_fields_keep_declared_order() {
        let registry = FormSchemaRegistry::builtin();
        let names: Vec<&str> = registry.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            ["fullName", "age", "gender", "skills", "joinDate", "bio", "isActive"]
        );
    }

    #[test]
    fn serializes_in_client_shape() {
        let registry = FormSchemaRegistry::builtin();
        let value = serde_json::to_value(registry.schema()).unwrap();

        assert_eq!(value["title"], "EMPLOYEE FORM");
        assert_eq!(
            value["fields"][0],
            json!({
                "name": "fullName",
                "label": "Full Name",
                "type": "text",
                "required": true,
                "placeholder": "Enter your name",
                "validations": { "minLength": 3, "maxLength": 30 }
            })
        );
        assert_eq!(value["fields"][3]["type"], "multi-select");
        assert_eq!(
            value["fields"][3]["validations"],
            json!({ "minSelected": 1, "maxSelected": 3 })
        );
        assert_eq!(
            value["fields"][1]["validations"],
            json!({ "min": 18, "max": 60 })
        );
        assert_eq!(value["fields"][4]["validations"]["minDate"], "2025-01-01");
        assert_eq!(value["fields"][6]["validations"], json!({}));
        assert!(value["fields"][1].get("placeholder").is_none());
    }

    #[test]
    fn fractional_bounds_stay_fractional() {
        let rules = RangeRules {
            min: Some(-2.0),
            max: Some(0.5),
        };
        let value = serde_json::to_value(&rules).unwrap();
        assert_eq!(value, json!({ "min": -2, "max": 0.5 }));
        assert!(value["min"].is_i64());
    }

    #[test]
    fn parses_served_document_back() {
        let registry = FormSchemaRegistry::builtin();
        let json = serde_json::to_string(registry.schema()).unwrap();
        let parsed = FormSchemaRegistry::from_json_str(&json).unwrap();
        assert_eq!(parsed.schema(), registry.schema());
    }

    #[test]
    fn missing_validations_default_to_empty_rules() {
        let registry = FormSchemaRegistry::from_json_str(
            r#"{"title":"T","fields":[{"name":"nick","label":"Nick","type":"text"}]}"#,
        )
        .unwrap();
        let nick = registry.field("nick").unwrap();
        assert!(!nick.required);
        assert_eq!(
            nick.kind,
            FieldKind::Text {
                validations: LengthRules::default()
            }
        );
    }

    #[test]
    fn rejects_unknown_field_type() {
        let result = FormSchemaRegistry::from_json_str(
            r#"{"title":"T","fields":[{"name":"x","label":"X","type":"slider"}]}"#,
        );
        assert_matches!(result, Err(SchemaError::Parse(_)));
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut schema = FormSchemaRegistry::builtin().schema().clone();
        let copy = schema.fields[0].clone();
        schema.fields.push(copy);
        assert_matches!(
            FormSchemaRegistry::new(schema),
            Err(SchemaError::DuplicateName(name)) if name == "fullName"
        );
    }

    #[test]
    fn rejects_empty_schema() {
        let schema = FormSchema {
            title: "Empty".into(),
            description: String::new(),
            fields: vec![],
        };
        assert_matches!(FormSchemaRegistry::new(schema), Err(SchemaError::NoFields));
    }

    #[test]
    fn rejects_blank_name_and_label() {
        let mut schema = FormSchemaRegistry::builtin().schema().clone();
        schema.fields[2].name = " ".into();
        assert_matches!(
            FormSchemaRegistry::new(schema),
            Err(SchemaError::EmptyName(2))
        );

        let mut schema = FormSchemaRegistry::builtin().schema().clone();
        schema.fields[1].label = String::new();
        assert_matches!(
            FormSchemaRegistry::new(schema),
            Err(SchemaError::EmptyLabel(name)) if name == "age"
        );
    }

    #[test]
    fn rejects_select_without_options() {
        let result = FormSchemaRegistry::from_json_str(
            r#"{"title":"T","fields":[{"name":"g","label":"G","type":"select","options":[]}]}"#,
        );
        assert_matches!(result, Err(SchemaError::MissingOptions(name)) if name == "g");
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title":"Survey","description":"d","fields":[
                {{"name":"score","label":"Score","type":"number","required":true,
                  "validations":{{"min":0,"max":10}}}}
            ]}}"#
        )
        .unwrap();

        let registry = FormSchemaRegistry::from_json_file(file.path()).unwrap();
        assert_eq!(registry.schema().title, "Survey");
        assert_eq!(
            registry.field("score").unwrap().kind,
            FieldKind::Number {
                validations: RangeRules {
                    min: Some(0.0),
                    max: Some(10.0)
                }
            }
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let result = FormSchemaRegistry::from_json_file("/nonexistent/form.json");
        assert_matches!(result, Err(SchemaError::Io { path, .. }) if path == "/nonexistent/form.json");
    }

    #[test]
    fn options_only_for_choice_fields() {
        let registry = FormSchemaRegistry::builtin();
        assert_eq!(registry.field("gender").unwrap().kind.options().len(), 3);
        assert!(registry.field("age").unwrap().kind.options().is_empty());
        assert_eq!(registry.field("skills").unwrap().kind.type_name(), "multi-select");
    }
}
