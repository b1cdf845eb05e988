//! Turns the model's free-text reply into JSON.
//!
//! Only structural validity is enforced: text that does not parse as JSON is
//! a failure, while a reply of the wrong shape comes back as
//! [`CoercedOutput::Unshaped`] for the caller to treat as "fields absent".

use serde_json::Value;

use crate::domain::diagnosis::entities::DiagnosisEntry;

const FENCE_JSON: &str = "```json";
const FENCE: &str = "```";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    SymptomList,
    DiagnosisObject,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoercedOutput {
    /// A top-level array; elements are not checked.
    SymptomList(Vec<Value>),
    /// An object with a `diagnoses` array, alongside the whole parsed document.
    DiagnosisObject {
        diagnoses: Vec<DiagnosisEntry>,
        document: Value,
    },
    /// Valid JSON that does not match the requested shape.
    Unshaped(Value),
    ParseFailure { raw: String, reason: String },
}

impl CoercedOutput {
    /// The parsed JSON, if parsing succeeded.
    pub fn into_document(self) -> Option<Value> {
        match self {
            CoercedOutput::SymptomList(items) => Some(Value::Array(items)),
            CoercedOutput::DiagnosisObject { document, .. } => Some(document),
            CoercedOutput::Unshaped(document) => Some(document),
            CoercedOutput::ParseFailure { .. } => None,
        }
    }
}

/// Removes every code-fence marker, wherever it appears, then trims.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace(FENCE_JSON, "").replace(FENCE, "").trim().to_string()
}

pub fn coerce(raw: &str, shape: ResponseShape) -> CoercedOutput {
    let cleaned = strip_code_fences(raw);

    let document: Value = match serde_json::from_str(&cleaned) {
        Ok(document) => document,
        Err(e) => {
            return CoercedOutput::ParseFailure {
                raw: raw.to_string(),
                reason: e.to_string(),
            };
        }
    };

    match shape {
        ResponseShape::SymptomList => match document {
            Value::Array(items) => CoercedOutput::SymptomList(items),
            other => CoercedOutput::Unshaped(other),
        },
        ResponseShape::DiagnosisObject => {
            let entries = match document.get("diagnoses") {
                Some(Value::Array(entries)) => Some(entries.clone()),
                _ => None,
            };

            match entries {
                Some(entries) => CoercedOutput::DiagnosisObject {
                    diagnoses: entries.into_iter().map(DiagnosisEntry::from_value).collect(),
                    document,
                },
                None => CoercedOutput::Unshaped(document),
            }
        }
    }
}
