use super::draft::DraftRecord;
use super::rules::Rule;
use serde::Serialize;
use std::collections::BTreeMap;

/// Declarative description of one scalar form field.
#[derive(Clone, Debug)]
pub struct FieldSpec {
    pub name: String,
    pub required: bool,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn required(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        FieldSpec {
            name: name.into(),
            required: true,
            rules,
        }
    }

    pub fn optional(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        FieldSpec {
            name: name.into(),
            required: false,
            rules,
        }
    }
}

/// Field name to violation reasons, ordered for deterministic responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(reason.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fold another error map into this one, concatenating reasons per field.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, reasons) in other.0 {
            self.0.entry(field).or_default().extend(reasons);
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Comma-joined field names, used in client-facing messages.
    pub fn field_names(&self) -> String {
        self.0.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// A validated record: every required field present, trimmed, and rule-clean.
#[derive(Clone, Debug, Default)]
pub struct ValidRecord {
    values: BTreeMap<String, String>,
}

impl ValidRecord {
    /// The validated value of a field; empty for absent optional fields.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// The validated value of an optional field, if it was supplied non-empty.
    pub fn opt(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str).filter(|v| !v.is_empty())
    }
}

/// A per-endpoint validation schema.
///
/// Validation is exhaustive: every rule of every field runs, and the caller
/// receives the complete violation list rather than the first failure. Values
/// are trimmed, never otherwise coerced.
#[derive(Clone, Debug)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Schema { fields }
    }

    pub fn validate(&self, draft: &DraftRecord) -> Result<ValidRecord, FieldErrors> {
        let mut errors = FieldErrors::default();
        let mut record = ValidRecord::default();

        for spec in &self.fields {
            let value = draft.text(&spec.name).map(str::trim).unwrap_or("");

            if value.is_empty() {
                if spec.required {
                    errors.push(&spec.name, "is required");
                }
                continue;
            }

            let mut clean = true;
            for rule in &spec.rules {
                if let Err(reason) = rule.check(value) {
                    clean = false;
                    errors.push(&spec.name, reason);
                }
            }
            if clean {
                record.values.insert(spec.name.clone(), value.to_string());
            }
        }

        if errors.is_empty() {
            Ok(record)
        } else {
            Err(errors)
        }
    }
}
