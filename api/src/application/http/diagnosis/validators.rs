use serde::{Deserialize, Serialize};
use serde_json::Value;
use symptomatic_core::domain::diagnosis::{
    entities::PatientContext,
    value_objects::{DiagnoseInput, ListRelatedSymptomsInput},
};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuerySymptomsValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "Symptom description is required."))]
    #[schema(example = "persistent dry cough")]
    pub query: Option<String>,
}

impl From<QuerySymptomsValidator> for ListRelatedSymptomsInput {
    fn from(payload: QuerySymptomsValidator) -> Self {
        ListRelatedSymptomsInput {
            query: payload.query,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct DiagnoseValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "Symptom is required"))]
    #[schema(example = "fever and headache")]
    pub symptom: Option<String>,

    #[serde(default)]
    #[schema(example = 42)]
    pub age: Option<Value>,

    #[serde(default)]
    #[schema(example = "female")]
    pub gender: Option<Value>,

    #[serde(default)]
    pub race: Option<Value>,
}

impl From<DiagnoseValidator> for DiagnoseInput {
    fn from(payload: DiagnoseValidator) -> Self {
        DiagnoseInput {
            symptom: payload.symptom,
            patient: PatientContext {
                age: payload.age,
                gender: payload.gender,
                race: payload.race,
            },
        }
    }
}
