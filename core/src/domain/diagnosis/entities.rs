use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;

/// Optional patient attributes sent alongside a symptom.
///
/// Any JSON value is accepted for each attribute. Values are only used to
/// enrich the prompt and copied verbatim onto the stored record. Absent
/// attributes are omitted from the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 42)]
    pub age: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "female")]
    pub gender: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<Value>,
}

/// A well-formed `{ name, probability }` pair emitted by the model.
///
/// The probability is kept as the exact JSON number the model produced and
/// is never range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct DiagnosisCandidate {
    pub name: String,
    #[schema(value_type = f64, example = 70)]
    pub probability: Number,
}

/// One element of the model's `diagnoses` array.
///
/// Entries that are not exactly a `{ name, probability }` pair are kept
/// verbatim instead of being rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum DiagnosisEntry {
    Candidate(DiagnosisCandidate),
    Other(Value),
}

impl DiagnosisEntry {
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<DiagnosisCandidate>(value.clone()) {
            Ok(candidate) => DiagnosisEntry::Candidate(candidate),
            Err(_) => DiagnosisEntry::Other(value),
        }
    }
}

/// Persisted result of one successful diagnose call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosisRecord {
    pub symptom: String,
    /// `None` when the model reply had no `diagnoses` array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnoses: Option<Vec<DiagnosisEntry>>,
    #[serde(flatten)]
    pub patient: PatientContext,
}

impl DiagnosisRecord {
    pub fn new(
        symptom: String,
        diagnoses: Option<Vec<DiagnosisEntry>>,
        patient: PatientContext,
    ) -> Self {
        Self {
            symptom,
            diagnoses,
            patient,
        }
    }
}

/// In-memory trace of a diagnose call: the symptom and the full parsed reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmissionRecord {
    pub query: String,
    pub answer: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QueryAnswer {
    pub query: String,
    pub answer: String,
}

/// Related symptoms as returned by the model, in model order.
///
/// A reply that parsed as JSON but is not an array is handed back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RelatedSymptoms {
    Listed(Vec<Value>),
    Unshaped(Value),
}
