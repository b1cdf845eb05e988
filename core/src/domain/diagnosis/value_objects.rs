use crate::domain::diagnosis::entities::PatientContext;

#[derive(Debug, Clone, Default)]
pub struct ListRelatedSymptomsInput {
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DiagnoseInput {
    pub symptom: Option<String>,
    pub patient: PatientContext,
}
